//! Calendar builder
//!
//! Collects the construction-time configuration: name, day count, the
//! mandatory ordering and the optional payload cleanup hook.

use crate::calendar::config::CalendarConfig;
use crate::calendar::engine::Calendar;
use crate::calendar::error::CalendarError;
use crate::strategy::{EventOrdering, PayloadCleanup};

/// Step-by-step calendar construction
///
/// # Example
///
/// ```rust
/// use event_calendar_core::{CalendarBuilder, CalendarError, strategy::ByStartTime};
///
/// let missing = CalendarBuilder::<u32>::new("Team", 5).build();
/// assert_eq!(missing.unwrap_err(), CalendarError::MissingOrdering);
///
/// let calendar = CalendarBuilder::<u32>::new("Team", 5)
///     .ordering(ByStartTime)
///     .cleanup(|_payload: u32| {})
///     .build()
///     .unwrap();
/// assert_eq!(calendar.days(), 5);
/// ```
pub struct CalendarBuilder<'a, P> {
    name: &'a str,
    days: usize,
    ordering: Option<Box<dyn EventOrdering<P>>>,
    cleanup: Option<Box<dyn PayloadCleanup<P>>>,
}

impl<'a, P> CalendarBuilder<'a, P> {
    /// Start a builder with no ordering and no cleanup
    pub fn new(name: &'a str, days: usize) -> Self {
        Self {
            name,
            days,
            ordering: None,
            cleanup: None,
        }
    }

    /// Start a builder from a config, using its built-in ordering
    pub fn from_config(config: &'a CalendarConfig) -> Self {
        Self::new(&config.name, config.days).boxed_ordering(config.ordering.build())
    }

    pub fn ordering<O>(self, ordering: O) -> Self
    where
        O: EventOrdering<P> + 'static,
    {
        self.boxed_ordering(Box::new(ordering))
    }

    pub fn boxed_ordering(mut self, ordering: Box<dyn EventOrdering<P>>) -> Self {
        self.ordering = Some(ordering);
        self
    }

    pub fn cleanup<C>(mut self, cleanup: C) -> Self
    where
        C: PayloadCleanup<P> + 'static,
    {
        self.cleanup = Some(Box::new(cleanup));
        self
    }

    /// Create the calendar
    ///
    /// # Errors
    ///
    /// * `EmptyCalendarName` - name is empty
    /// * `InvalidDayCount` - day count is zero
    /// * `MissingOrdering` - no ordering was supplied
    /// * `AllocationFailed` - storage could not be reserved
    pub fn build(self) -> Result<Calendar<P>, CalendarError> {
        Calendar::assemble(self.name, self.days, self.ordering, self.cleanup)
    }
}
