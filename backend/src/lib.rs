//! Event Calendar Core
//!
//! In-memory event store organized by calendar day.
//!
//! # Architecture
//!
//! - **core**: Start-time and day-number rules
//! - **models**: Domain types (Event, EventList day-buckets)
//! - **strategy**: Injected ordering and payload cleanup capabilities
//! - **calendar**: The Calendar owner, its builder, config, errors and reports
//!
//! # Critical Invariants
//!
//! 1. `total_events` equals the sum of day-bucket lengths
//! 2. Every day-bucket is sorted by the calendar's ordering
//! 3. Event names are unique across all days
//! 4. Failed operations leave the calendar unchanged

// Module declarations
pub mod calendar;
pub mod core;
pub mod models;
pub mod strategy;

// Re-exports for convenience
pub use calendar::{
    Calendar, CalendarBuilder, CalendarConfig, CalendarError, CalendarReport, DayReport,
    ErrorKind, EventSummary, OrderingConfig,
};
pub use models::{Event, EventList};
pub use strategy::{EventOrdering, PayloadCleanup};
