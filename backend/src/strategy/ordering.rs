//! Event orderings
//!
//! An ordering compares an event already in a day-bucket (`existing`) with the
//! event being inserted (`candidate`). Insertion walks the bucket from its head
//! while `compare(existing, candidate)` is `Less` and links the candidate in
//! front of the first event for which it is not.

use crate::models::event::Event;
use std::cmp::Ordering;

/// Total order over events used to keep day-buckets sorted (ascending)
pub trait EventOrdering<P> {
    /// Compare an event already stored with the one being inserted
    fn compare(&self, existing: &Event<P>, candidate: &Event<P>) -> Ordering;

    /// Short name used in logs and reports
    fn label(&self) -> &str {
        "custom"
    }
}

impl<P, F> EventOrdering<P> for F
where
    F: Fn(&Event<P>, &Event<P>) -> Ordering,
{
    fn compare(&self, existing: &Event<P>, candidate: &Event<P>) -> Ordering {
        self(existing, candidate)
    }
}

/// Ascending start time
///
/// # Example
/// ```
/// use event_calendar_core::strategy::{ByStartTime, EventOrdering};
/// use event_calendar_core::Event;
/// use std::cmp::Ordering;
///
/// let early: Event<()> = Event::new("Standup", 900, 15, None).unwrap();
/// let late: Event<()> = Event::new("Lunch", 1200, 60, None).unwrap();
///
/// assert_eq!(ByStartTime.compare(&early, &late), Ordering::Less);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct ByStartTime;

impl<P> EventOrdering<P> for ByStartTime {
    fn compare(&self, existing: &Event<P>, candidate: &Event<P>) -> Ordering {
        existing.start_time().cmp(&candidate.start_time())
    }

    fn label(&self) -> &str {
        "start_time"
    }
}

/// Ascending duration
#[derive(Debug, Clone, Copy, Default)]
pub struct ByDuration;

impl<P> EventOrdering<P> for ByDuration {
    fn compare(&self, existing: &Event<P>, candidate: &Event<P>) -> Ordering {
        existing.duration_minutes().cmp(&candidate.duration_minutes())
    }

    fn label(&self) -> &str {
        "duration"
    }
}

/// Lexicographic name order
#[derive(Debug, Clone, Copy, Default)]
pub struct ByName;

impl<P> EventOrdering<P> for ByName {
    fn compare(&self, existing: &Event<P>, candidate: &Event<P>) -> Ordering {
        existing.name().cmp(candidate.name())
    }

    fn label(&self) -> &str {
        "name"
    }
}

/// Start time, ties broken by name
///
/// Names are unique, so this never reports `Equal` for distinct events.
#[derive(Debug, Clone, Copy, Default)]
pub struct ByStartTimeThenName;

impl<P> EventOrdering<P> for ByStartTimeThenName {
    fn compare(&self, existing: &Event<P>, candidate: &Event<P>) -> Ordering {
        existing
            .start_time()
            .cmp(&candidate.start_time())
            .then_with(|| existing.name().cmp(candidate.name()))
    }

    fn label(&self) -> &str {
        "start_time_then_name"
    }
}
