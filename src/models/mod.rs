pub mod config;
pub mod goals;
pub mod record;

pub use goals::{Gender, UserGoals};
pub use record::{ExtractedFields, Kind, LogRecord};
