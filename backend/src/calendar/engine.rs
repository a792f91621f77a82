//! Calendar engine
//!
//! Owns `days` independent day-buckets and implements every calendar
//! operation: insert, lookup, removal, day clear, full clear and teardown.
//!
//! # Critical Invariants
//!
//! 1. **Count**: `total_events()` equals the sum of day-bucket lengths
//! 2. **Order**: every day-bucket is non-decreasing under the ordering
//! 3. **Uniqueness**: no two events anywhere share a name
//! 4. **Atomicity**: a failed operation leaves the calendar unchanged
//! 5. **Cleanup**: each non-empty payload reaches the cleanup hook exactly once

use crate::calendar::error::CalendarError;
use crate::calendar::report::{CalendarReport, DayReport, EventSummary};
use crate::core::time::day_index;
use crate::models::day_list::{EventList, Iter};
use crate::models::event::{copy_name, Event};
use crate::strategy::{EventOrdering, PayloadCleanup};
use std::collections::HashSet;
use std::fmt;
use std::io::Write;
use tracing::{debug, trace};

/// In-memory event store organized by day
///
/// # Example
///
/// ```rust
/// use event_calendar_core::{Calendar, strategy::ByStartTime};
///
/// let mut calendar: Calendar<()> = Calendar::new("Sprint", 3, ByStartTime).unwrap();
/// calendar.insert("Standup", 900, 15, None, 1).unwrap();
/// calendar.insert("Lunch", 1200, 60, None, 1).unwrap();
/// calendar.insert("Review", 1000, 30, None, 1).unwrap();
///
/// let order: Vec<&str> = calendar.events_on(1).unwrap().map(|e| e.name()).collect();
/// assert_eq!(order, vec!["Standup", "Review", "Lunch"]);
/// assert_eq!(calendar.total_events(), 3);
/// ```
pub struct Calendar<P> {
    /// Descriptive name
    name: String,

    /// One list per day; index 0 is day 1. Length never changes.
    event_lists: Vec<EventList<P>>,

    /// Keeps each day-bucket sorted
    ordering: Box<dyn EventOrdering<P>>,

    /// Receives payloads of events leaving the calendar
    cleanup: Option<Box<dyn PayloadCleanup<P>>>,
}

impl<P> Calendar<P> {
    /// Create a calendar without a cleanup hook
    ///
    /// Use `CalendarBuilder` to attach one.
    ///
    /// # Errors
    ///
    /// * `EmptyCalendarName` - name is empty
    /// * `InvalidDayCount` - `days` is zero
    /// * `AllocationFailed` - name or day-buckets could not be reserved
    pub fn new<O>(name: &str, days: usize, ordering: O) -> Result<Self, CalendarError>
    where
        O: EventOrdering<P> + 'static,
    {
        Self::assemble(name, days, Some(Box::new(ordering)), None)
    }

    /// Validate arguments and reserve all storage up front
    ///
    /// Every allocation happens before the calendar exists, so a failure
    /// drops whatever was reserved and nothing outlives the call.
    pub(crate) fn assemble(
        name: &str,
        days: usize,
        ordering: Option<Box<dyn EventOrdering<P>>>,
        cleanup: Option<Box<dyn PayloadCleanup<P>>>,
    ) -> Result<Self, CalendarError> {
        if name.is_empty() {
            return Err(CalendarError::EmptyCalendarName);
        }
        if days == 0 {
            return Err(CalendarError::InvalidDayCount { days });
        }
        let ordering = ordering.ok_or(CalendarError::MissingOrdering)?;

        let name = copy_name(name, "copying calendar name")?;
        let mut event_lists = Vec::new();
        event_lists
            .try_reserve_exact(days)
            .map_err(|_| CalendarError::AllocationFailed {
                context: "allocating day buckets",
            })?;
        event_lists.resize_with(days, EventList::new);

        debug!(
            calendar = %name,
            days,
            ordering = ordering.label(),
            has_cleanup = cleanup.is_some(),
            "calendar created"
        );

        Ok(Self {
            name,
            event_lists,
            ordering,
            cleanup,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Number of day-buckets (fixed at creation)
    pub fn days(&self) -> usize {
        self.event_lists.len()
    }

    /// Number of stored events, derived from the day-bucket lengths
    pub fn total_events(&self) -> usize {
        self.event_lists.iter().map(EventList::len).sum()
    }

    pub fn has_cleanup(&self) -> bool {
        self.cleanup.is_some()
    }

    /// Label of the configured ordering
    pub fn ordering_label(&self) -> &str {
        self.ordering.label()
    }

    /// Add an event to a day, keeping that day sorted
    ///
    /// # Arguments
    ///
    /// * `name` - Event name, unique across the whole calendar
    /// * `start_time` - HHMM-style start, 0..=2400
    /// * `duration_minutes` - Positive duration
    /// * `payload` - Optional caller data, handed to the cleanup hook later
    /// * `day` - 1-based day number
    ///
    /// # Errors
    ///
    /// * `EmptyEventName`, `StartTimeOutOfRange`, `InvalidDuration`,
    ///   `DayOutOfRange` - invalid argument
    /// * `DuplicateEvent` - name already used on any day
    /// * `AllocationFailed` - storage could not be reserved
    ///
    /// On error the calendar is unchanged and the payload is dropped without
    /// reaching the cleanup hook.
    pub fn insert(
        &mut self,
        name: &str,
        start_time: i32,
        duration_minutes: i32,
        payload: Option<P>,
        day: usize,
    ) -> Result<(), CalendarError> {
        let event = Event::new(name, start_time, duration_minutes, payload)?;
        let idx = day_index(day, self.days())?;

        if self.find_by_name(name).is_some() {
            debug!(calendar = %self.name, event = name, "duplicate event rejected");
            return Err(CalendarError::DuplicateEvent {
                name: name.to_string(),
            });
        }

        let position = self.event_lists[idx]
            .insert_sorted(event, self.ordering.as_ref())
            .map_err(|_| CalendarError::AllocationFailed {
                context: "linking event into day",
            })?;

        debug!(
            calendar = %self.name,
            event = name,
            day,
            position,
            start_time,
            duration_minutes,
            "event inserted"
        );
        Ok(())
    }

    /// Find an event by name on any day
    ///
    /// Days are searched in order, then each day in list order.
    pub fn find_by_name(&self, name: &str) -> Option<&Event<P>> {
        self.event_lists.iter().find_map(|list| list.find(name))
    }

    /// Find an event by name on one day
    ///
    /// # Returns
    ///
    /// * `Ok(Some(event))` - found on that day
    /// * `Ok(None)` - not on that day (it may exist on another)
    /// * `Err(DayOutOfRange)` - `day` is not a valid day number
    pub fn find_in_day(&self, name: &str, day: usize) -> Result<Option<&Event<P>>, CalendarError> {
        let idx = day_index(day, self.days())?;
        Ok(self.event_lists[idx].find(name))
    }

    /// Borrow the payload of the named event
    ///
    /// `None` when the event does not exist or carries no payload.
    pub fn get_payload(&self, name: &str) -> Option<&P> {
        self.find_by_name(name).and_then(Event::payload)
    }

    /// Day number (1-based) holding the named event
    pub fn day_of(&self, name: &str) -> Option<usize> {
        self.event_lists
            .iter()
            .position(|list| list.find(name).is_some())
            .map(|idx| idx + 1)
    }

    /// Remove the named event and release its payload
    ///
    /// # Errors
    ///
    /// * `EventNotFound` - no event with that name on any day
    pub fn remove_by_name(&mut self, name: &str) -> Result<(), CalendarError> {
        for (idx, list) in self.event_lists.iter_mut().enumerate() {
            if let Some(event) = list.remove(name) {
                Self::release(&mut self.cleanup, event);
                debug!(calendar = %self.name, event = name, day = idx + 1, "event removed");
                return Ok(());
            }
        }

        Err(CalendarError::EventNotFound {
            name: name.to_string(),
        })
    }

    /// Remove every event of one day
    ///
    /// # Returns
    ///
    /// Number of events released (zero for an already-empty day)
    pub fn clear_day(&mut self, day: usize) -> Result<usize, CalendarError> {
        let idx = day_index(day, self.days())?;
        Ok(self.clear_index(idx))
    }

    /// Remove every event of every day
    ///
    /// The calendar stays usable with the same days, ordering and cleanup.
    pub fn clear_all(&mut self) -> usize {
        (0..self.days()).map(|idx| self.clear_index(idx)).sum()
    }

    /// Tear the calendar down, releasing every payload
    ///
    /// Consumes the calendar, so no operation can follow. Dropping a calendar
    /// performs the same cascade.
    ///
    /// # Returns
    ///
    /// Number of events released
    pub fn destroy(mut self) -> usize {
        let released = self.clear_all();
        debug!(calendar = %self.name, released, "calendar destroyed");
        released
    }

    /// Events of one day in list order
    pub fn events_on(&self, day: usize) -> Result<Iter<'_, P>, CalendarError> {
        let idx = day_index(day, self.days())?;
        Ok(self.event_lists[idx].iter())
    }

    /// Every event with its day number, days in order then list order
    pub fn iter(&self) -> impl Iterator<Item = (usize, &Event<P>)> + '_ {
        self.event_lists
            .iter()
            .enumerate()
            .flat_map(|(idx, list)| list.iter().map(move |event| (idx + 1, event)))
    }

    /// Snapshot of the printable calendar data
    pub fn report(&self) -> CalendarReport {
        CalendarReport {
            name: self.name.clone(),
            days: self.days(),
            total_events: self.total_events(),
            day_reports: self
                .event_lists
                .iter()
                .enumerate()
                .map(|(idx, list)| DayReport {
                    day: idx + 1,
                    events: list.iter().map(EventSummary::from).collect(),
                })
                .collect(),
        }
    }

    /// Write the calendar in its text format to `sink`
    ///
    /// The header (name, days, total events) is written only when
    /// `include_summary` is set. Every day gets a block, even empty ones.
    ///
    /// # Errors
    ///
    /// * `ReportWrite` - the sink rejected a write
    pub fn describe<W>(&self, sink: &mut W, include_summary: bool) -> Result<(), CalendarError>
    where
        W: Write + ?Sized,
    {
        self.report()
            .write_to(sink, include_summary)
            .map_err(|e| CalendarError::ReportWrite(e.to_string()))
    }

    /// Verify every structural invariant
    ///
    /// Checks per-day chain integrity, ordering, global name uniqueness and
    /// that the derived total matches the events actually reachable.
    pub fn check_invariants(&self) -> Result<(), CalendarError> {
        let mut seen = HashSet::new();
        let mut reachable = 0;

        for (idx, list) in self.event_lists.iter().enumerate() {
            let day = idx + 1;
            list.check_integrity()
                .map_err(|msg| CalendarError::InvariantViolation(format!("day {}: {}", day, msg)))?;

            if !list.is_sorted_by(self.ordering.as_ref()) {
                return Err(CalendarError::InvariantViolation(format!(
                    "day {} is not sorted by {}",
                    day,
                    self.ordering.label()
                )));
            }

            for event in list {
                reachable += 1;
                if !seen.insert(event.name()) {
                    return Err(CalendarError::InvariantViolation(format!(
                        "event name {} appears more than once",
                        event.name()
                    )));
                }
            }
        }

        if reachable != self.total_events() {
            return Err(CalendarError::InvariantViolation(format!(
                "total events {} but {} reachable",
                self.total_events(),
                reachable
            )));
        }

        Ok(())
    }

    fn clear_index(&mut self, idx: usize) -> usize {
        let list = &mut self.event_lists[idx];
        let mut released = 0;
        while let Some(event) = list.pop_front() {
            Self::release(&mut self.cleanup, event);
            released += 1;
        }

        if released > 0 {
            debug!(calendar = %self.name, day = idx + 1, released, "day cleared");
        }
        released
    }

    /// Hand a departing event's payload to the cleanup hook, if both exist
    fn release(cleanup: &mut Option<Box<dyn PayloadCleanup<P>>>, event: Event<P>) {
        let (name, payload) = event.into_parts();
        if let (Some(hook), Some(payload)) = (cleanup.as_mut(), payload) {
            trace!(event = %name, "releasing payload");
            hook.release(payload);
        }
    }
}

impl<P> Drop for Calendar<P> {
    fn drop(&mut self) {
        self.clear_all();
    }
}

impl<P> fmt::Debug for Calendar<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Calendar")
            .field("name", &self.name)
            .field("days", &self.days())
            .field("total_events", &self.total_events())
            .field("ordering", &self.ordering_label())
            .field("has_cleanup", &self.has_cleanup())
            .finish()
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::strategy::ByStartTime;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn released_log() -> (Rc<RefCell<Vec<u32>>>, impl FnMut(u32) + 'static) {
        let log = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&log);
        (log, move |payload: u32| sink.borrow_mut().push(payload))
    }

    fn calendar_with_cleanup() -> (Calendar<u32>, Rc<RefCell<Vec<u32>>>) {
        let (log, hook) = released_log();
        let calendar = Calendar::assemble(
            "Test",
            3,
            Some(Box::new(ByStartTime)),
            Some(Box::new(hook)),
        )
        .unwrap();
        (calendar, log)
    }

    #[test]
    fn test_assemble_requires_ordering() {
        let result: Result<Calendar<u32>, _> = Calendar::assemble("Test", 3, None, None);
        assert_eq!(result.unwrap_err(), CalendarError::MissingOrdering);
    }

    #[test]
    fn test_remove_in_later_day_relinks_only_that_day() {
        let (mut calendar, log) = calendar_with_cleanup();
        calendar.insert("A", 900, 10, Some(1), 1).unwrap();
        calendar.insert("B", 1000, 10, Some(2), 1).unwrap();
        calendar.insert("C", 800, 10, Some(3), 2).unwrap();
        calendar.insert("D", 1100, 10, Some(4), 2).unwrap();

        calendar.remove_by_name("D").unwrap();

        let day1: Vec<_> = calendar.events_on(1).unwrap().map(|e| e.name()).collect();
        let day2: Vec<_> = calendar.events_on(2).unwrap().map(|e| e.name()).collect();
        assert_eq!(day1, vec!["A", "B"]);
        assert_eq!(day2, vec!["C"]);
        assert_eq!(*log.borrow(), vec![4]);
        assert!(calendar.check_invariants().is_ok());
    }

    #[test]
    fn test_missing_payload_skips_cleanup() {
        let (mut calendar, log) = calendar_with_cleanup();
        calendar.insert("Bare", 900, 10, None, 1).unwrap();

        calendar.remove_by_name("Bare").unwrap();

        assert!(log.borrow().is_empty());
    }

    #[test]
    fn test_drop_releases_payloads() {
        let (mut calendar, log) = calendar_with_cleanup();
        calendar.insert("A", 900, 10, Some(1), 1).unwrap();
        calendar.insert("B", 900, 10, Some(2), 3).unwrap();

        drop(calendar);

        assert_eq!(*log.borrow(), vec![1, 2]);
    }

    #[test]
    fn test_destroy_then_drop_releases_once() {
        let (mut calendar, log) = calendar_with_cleanup();
        calendar.insert("A", 900, 10, Some(1), 2).unwrap();

        assert_eq!(calendar.destroy(), 1);
        assert_eq!(*log.borrow(), vec![1]);
    }

    #[test]
    fn test_debug_omits_events() {
        let calendar: Calendar<u32> = Calendar::new("Debug", 2, ByStartTime).unwrap();
        let rendered = format!("{:?}", calendar);

        assert!(rendered.contains("name: \"Debug\""));
        assert!(rendered.contains("ordering: \"start_time\""));
    }
}
