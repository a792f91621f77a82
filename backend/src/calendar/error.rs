//! Calendar errors
//!
//! Every failing operation reports one of these variants and leaves the
//! calendar exactly as it was before the call.

use thiserror::Error;

/// Coarse classification of a `CalendarError`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Empty name, out-of-range day/time/duration, missing ordering
    InvalidArgument,

    /// Named event does not exist
    NotFound,

    /// Event name already used somewhere in the calendar
    Duplicate,

    /// Memory could not be reserved
    Allocation,

    /// Report sink or serializer failed
    Io,

    /// Internal consistency check failed
    Internal,
}

/// Errors that can occur during calendar operations
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CalendarError {
    #[error("Calendar name must not be empty")]
    EmptyCalendarName,

    #[error("Calendar needs at least one day, got {days}")]
    InvalidDayCount { days: usize },

    #[error("No event ordering configured")]
    MissingOrdering,

    #[error("Event name must not be empty")]
    EmptyEventName,

    #[error("Start time {start_time} outside 0..=2400")]
    StartTimeOutOfRange { start_time: i32 },

    #[error("Duration must be positive, got {duration_minutes}")]
    InvalidDuration { duration_minutes: i32 },

    #[error("Day {day} outside 1..={days}")]
    DayOutOfRange { day: usize, days: usize },

    #[error("Event not found: {name}")]
    EventNotFound { name: String },

    #[error("Event already exists: {name}")]
    DuplicateEvent { name: String },

    #[error("Allocation failed while {context}")]
    AllocationFailed { context: &'static str },

    #[error("Report write failed: {0}")]
    ReportWrite(String),

    #[error("Serialization error: {0}")]
    SerializationError(String),

    #[error("Invariant violated: {0}")]
    InvariantViolation(String),
}

impl CalendarError {
    /// Classify this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            CalendarError::EmptyCalendarName
            | CalendarError::InvalidDayCount { .. }
            | CalendarError::MissingOrdering
            | CalendarError::EmptyEventName
            | CalendarError::StartTimeOutOfRange { .. }
            | CalendarError::InvalidDuration { .. }
            | CalendarError::DayOutOfRange { .. } => ErrorKind::InvalidArgument,
            CalendarError::EventNotFound { .. } => ErrorKind::NotFound,
            CalendarError::DuplicateEvent { .. } => ErrorKind::Duplicate,
            CalendarError::AllocationFailed { .. } => ErrorKind::Allocation,
            CalendarError::ReportWrite(_) | CalendarError::SerializationError(_) => ErrorKind::Io,
            CalendarError::InvariantViolation(_) => ErrorKind::Internal,
        }
    }
}
