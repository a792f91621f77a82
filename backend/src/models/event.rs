//! Event model
//!
//! A single calendar entry:
//! - Name (non-empty, unique across the whole calendar)
//! - Start time (HHMM-style, 0..=2400)
//! - Duration in minutes (positive)
//! - Optional opaque payload, never interpreted by the calendar
//!
//! Events are only reachable read-only from outside the calendar. The
//! calendar owns them and releases their payloads on removal.

use crate::calendar::error::CalendarError;
use crate::core::time::{validate_duration, validate_start_time};

/// A calendar entry owned by one day-bucket
///
/// # Example
/// ```
/// use event_calendar_core::Event;
///
/// let event = Event::new("Standup", 900, 15, Some("room 4")).unwrap();
/// assert_eq!(event.name(), "Standup");
/// assert_eq!(event.start_time(), 900);
/// assert_eq!(event.payload(), Some(&"room 4"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Event<P> {
    /// Unique event name
    name: String,

    /// HHMM-style start time
    start_time: i32,

    /// Length of the event in minutes
    duration_minutes: i32,

    /// Caller data, released through the calendar's cleanup hook
    payload: Option<P>,
}

impl<P> Event<P> {
    /// Create a validated event
    ///
    /// The name is copied into storage reserved up front so that an
    /// allocation failure is reported instead of aborting.
    ///
    /// # Errors
    ///
    /// * `EmptyEventName` - name is empty
    /// * `StartTimeOutOfRange` - start time outside 0..=2400
    /// * `InvalidDuration` - duration is zero or negative
    /// * `AllocationFailed` - name storage could not be reserved
    pub fn new(
        name: &str,
        start_time: i32,
        duration_minutes: i32,
        payload: Option<P>,
    ) -> Result<Self, CalendarError> {
        if name.is_empty() {
            return Err(CalendarError::EmptyEventName);
        }
        validate_start_time(start_time)?;
        validate_duration(duration_minutes)?;

        Ok(Self {
            name: copy_name(name, "copying event name")?,
            start_time,
            duration_minutes,
            payload,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn start_time(&self) -> i32 {
        self.start_time
    }

    pub fn duration_minutes(&self) -> i32 {
        self.duration_minutes
    }

    /// Borrow the payload, if one was attached
    pub fn payload(&self) -> Option<&P> {
        self.payload.as_ref()
    }

    /// Split the event into its name and payload
    pub fn into_parts(self) -> (String, Option<P>) {
        (self.name, self.payload)
    }
}

/// Copy a name into exactly-sized, fallibly reserved storage
pub(crate) fn copy_name(name: &str, context: &'static str) -> Result<String, CalendarError> {
    let mut owned = String::new();
    owned
        .try_reserve_exact(name.len())
        .map_err(|_| CalendarError::AllocationFailed { context })?;
    owned.push_str(name);
    Ok(owned)
}
