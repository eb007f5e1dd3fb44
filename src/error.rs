use snafu::Snafu;

use crate::item::ItemId;

#[derive(Snafu, Debug, Clone, PartialEq)]
#[snafu(visibility(pub(crate)))]
pub enum SchedulerError {
    #[snafu(display("an item for {subject}/{topic} is already scheduled"))]
    DuplicateItem { subject: String, topic: String },
    #[snafu(display("item id {id} is already in the pool"))]
    DuplicateId { id: ItemId },
    #[snafu(display("no item with id {id}"))]
    ItemNotFound { id: ItemId },
    #[snafu(display("rating {value} is outside 1..=4"))]
    InvalidGrade { value: u8 },
    #[snafu(display("invalid forecast config: {reason}"))]
    InvalidConfig { reason: String },
}

pub type Result<T, E = SchedulerError> = std::result::Result<T, E>;
