//! Calendar - the owner of every day-bucket and event
//!
//! See `engine.rs` for the operations.

pub mod builder;
pub mod config;
pub mod engine;
pub mod error;
pub mod report;

// Re-export main types for convenience
pub use builder::CalendarBuilder;
pub use config::{CalendarConfig, OrderingConfig};
pub use engine::Calendar;
pub use error::{CalendarError, ErrorKind};
pub use report::{CalendarReport, DayReport, EventSummary};
