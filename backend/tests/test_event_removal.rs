//! Tests for event removal
//!
//! Removal must relink head, interior and tail nodes, decrement the total
//! and hand the payload to the cleanup hook exactly once.

use event_calendar_core::strategy::ByStartTime;
use event_calendar_core::{Calendar, CalendarBuilder, CalendarError, ErrorKind};
use std::cell::RefCell;
use std::rc::Rc;

fn tracked_calendar() -> (Calendar<u32>, Rc<RefCell<Vec<u32>>>) {
    let released = Rc::new(RefCell::new(Vec::new()));
    let log = Rc::clone(&released);
    let mut calendar = CalendarBuilder::new("Sprint", 3)
        .ordering(ByStartTime)
        .cleanup(move |payload: u32| log.borrow_mut().push(payload))
        .build()
        .unwrap();

    calendar.insert("Standup", 900, 15, Some(1), 1).unwrap();
    calendar.insert("Lunch", 1200, 60, Some(2), 1).unwrap();
    calendar.insert("Review", 1000, 30, Some(3), 1).unwrap();
    calendar.insert("Retro", 1500, 45, Some(4), 2).unwrap();

    (calendar, released)
}

fn day_names(calendar: &Calendar<u32>, day: usize) -> Vec<&str> {
    calendar.events_on(day).unwrap().map(|e| e.name()).collect()
}

#[test]
fn test_remove_interior_event() {
    let (mut calendar, released) = tracked_calendar();

    calendar.remove_by_name("Review").unwrap();

    assert_eq!(day_names(&calendar, 1), vec!["Standup", "Lunch"]);
    assert_eq!(calendar.total_events(), 3);
    assert_eq!(*released.borrow(), vec![3]);
    assert!(calendar.check_invariants().is_ok());
}

#[test]
fn test_remove_head_event() {
    let (mut calendar, released) = tracked_calendar();

    calendar.remove_by_name("Standup").unwrap();

    assert_eq!(day_names(&calendar, 1), vec!["Review", "Lunch"]);
    assert_eq!(*released.borrow(), vec![1]);
    assert!(calendar.check_invariants().is_ok());
}

#[test]
fn test_remove_tail_event() {
    let (mut calendar, _) = tracked_calendar();

    calendar.remove_by_name("Lunch").unwrap();

    assert_eq!(day_names(&calendar, 1), vec!["Standup", "Review"]);
    assert!(calendar.check_invariants().is_ok());
}

#[test]
fn test_remove_only_event_of_later_day() {
    let (mut calendar, released) = tracked_calendar();

    calendar.remove_by_name("Retro").unwrap();

    assert!(day_names(&calendar, 2).is_empty());
    assert_eq!(day_names(&calendar, 1), vec!["Standup", "Review", "Lunch"]);
    assert_eq!(*released.borrow(), vec![4]);
    assert!(calendar.check_invariants().is_ok());
}

#[test]
fn test_remove_missing_is_not_found() {
    let (mut calendar, released) = tracked_calendar();

    let err = calendar.remove_by_name("Planning").unwrap_err();

    assert_eq!(
        err,
        CalendarError::EventNotFound {
            name: "Planning".to_string()
        }
    );
    assert_eq!(err.kind(), ErrorKind::NotFound);
    assert_eq!(calendar.total_events(), 4);
    assert!(released.borrow().is_empty());
}

#[test]
fn test_remove_twice_fails_second_time() {
    let (mut calendar, released) = tracked_calendar();

    assert!(calendar.remove_by_name("Review").is_ok());
    assert!(calendar.remove_by_name("Review").is_err());
    assert_eq!(*released.borrow(), vec![3]);
}

#[test]
fn test_round_trip_insert_find_remove() {
    let (mut calendar, _) = tracked_calendar();
    calendar.insert("Planning", 1300, 90, Some(5), 3).unwrap();

    let found = calendar.find_by_name("Planning").unwrap();
    assert_eq!(
        (found.start_time(), found.duration_minutes(), found.payload()),
        (1300, 90, Some(&5))
    );

    calendar.remove_by_name("Planning").unwrap();
    assert!(calendar.find_by_name("Planning").is_none());
}

#[test]
fn test_removed_name_can_be_reused() {
    let (mut calendar, _) = tracked_calendar();

    calendar.remove_by_name("Standup").unwrap();
    calendar.insert("Standup", 1700, 15, None, 2).unwrap();

    assert_eq!(calendar.day_of("Standup"), Some(2));
    assert_eq!(day_names(&calendar, 2), vec!["Retro", "Standup"]);
}

#[test]
fn test_remove_without_cleanup_hook() {
    let mut calendar: Calendar<String> = Calendar::new("Plain", 1, ByStartTime).unwrap();
    calendar
        .insert("Note", 900, 5, Some("dropped".to_string()), 1)
        .unwrap();

    assert!(calendar.remove_by_name("Note").is_ok());
    assert_eq!(calendar.total_events(), 0);
}
