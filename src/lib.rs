mod error;
mod forecast;
mod grade;
mod item;
mod policy;
mod scheduler;

pub use error::{Result, SchedulerError};
pub use forecast::{Forecast, ForecastConfig, forecast};
pub use grade::Grade;
pub use item::{ItemId, ReviewItem};
pub use scheduler::ReviewScheduler;
