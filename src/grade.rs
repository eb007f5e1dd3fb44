use serde::{Deserialize, Serialize};
use snafu::OptionExt;
use strum::{Display, EnumIter, EnumString, FromRepr};

use crate::error::{InvalidGradeSnafu, Result};

/// Learner feedback on a review attempt, on the usual four-button scale.
/// The numeric representation is the 1-4 rating convention.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumIter,
    EnumString,
    FromRepr,
)]
#[repr(u8)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum Grade {
    Again = 1,
    Hard = 2,
    Good = 3,
    Easy = 4,
}

impl Grade {
    /// Converts a 1-4 rating into a grade, rejecting anything out of range.
    pub fn from_rating(value: u8) -> Result<Self> {
        Self::from_repr(value).context(InvalidGradeSnafu { value })
    }

    pub fn rating(self) -> u8 {
        self as u8
    }
}
