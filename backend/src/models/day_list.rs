//! Day-bucket event list
//!
//! One day's events as a sorted singly-linked sequence. Nodes live in an index
//! arena owned by the list; links are slot indices, so unlinking never leaves a
//! dangling reference and a freed slot is recycled by the next insert.
//!
//! # Layout
//!
//! ```text
//! head ─► [2] ─► [0] ─► [3] ─► None
//! free ─► [1] ─► None
//! ```
//!
//! # Critical Invariants
//!
//! 1. **Chain length**: walking from `head` visits exactly `len` occupied slots
//! 2. **Slot accounting**: occupied slots + vacant slots == `slots.len()`
//! 3. **Order**: the chain is non-decreasing under the ordering used to insert

use crate::models::event::Event;
use crate::strategy::EventOrdering;
use std::cmp::Ordering;
use std::collections::TryReserveError;

#[derive(Debug, Clone)]
enum Slot<P> {
    Occupied { event: Event<P>, next: Option<usize> },
    Vacant { next_free: Option<usize> },
}

/// Sorted singly-linked list of one day's events
#[derive(Debug, Clone)]
pub struct EventList<P> {
    /// Node storage, addressed by index
    slots: Vec<Slot<P>>,

    /// First event of the day
    head: Option<usize>,

    /// Most recently vacated slot
    free_head: Option<usize>,

    /// Number of linked events
    len: usize,
}

impl<P> EventList<P> {
    /// Create an empty list
    pub fn new() -> Self {
        Self {
            slots: Vec::new(),
            head: None,
            free_head: None,
            len: 0,
        }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    /// Insert an event keeping the list ordered
    ///
    /// Walks from the head while `ordering.compare(existing, &event)` is
    /// `Less` and links the event in front of the first node where it is not,
    /// or at the tail. An event equal to stored ones therefore lands before
    /// them.
    ///
    /// Storage is reserved before any link changes, so on error the list is
    /// untouched.
    ///
    /// # Returns
    ///
    /// Zero-based position of the new event in the list
    pub fn insert_sorted(
        &mut self,
        event: Event<P>,
        ordering: &dyn EventOrdering<P>,
    ) -> Result<usize, TryReserveError> {
        if self.free_head.is_none() {
            self.slots.try_reserve(1)?;
        }

        let mut prev = None;
        let mut cursor = self.head;
        let mut position = 0;
        while let Some(idx) = cursor {
            let (existing, next) = self.node(idx);
            if ordering.compare(existing, &event) != Ordering::Less {
                break;
            }
            prev = Some(idx);
            cursor = next;
            position += 1;
        }

        let idx = self.occupy(event, cursor);
        match prev {
            None => self.head = Some(idx),
            Some(prev_idx) => self.set_next(prev_idx, Some(idx)),
        }
        self.len += 1;

        Ok(position)
    }

    /// First event with the given name
    pub fn find(&self, name: &str) -> Option<&Event<P>> {
        self.iter().find(|event| event.name() == name)
    }

    /// Unlink and return the event with the given name
    ///
    /// Handles head, interior and tail nodes by relinking either `head` or
    /// the predecessor's `next`.
    pub fn remove(&mut self, name: &str) -> Option<Event<P>> {
        let mut prev = None;
        let mut cursor = self.head;
        while let Some(idx) = cursor {
            let (event, next) = self.node(idx);
            if event.name() == name {
                match prev {
                    None => self.head = next,
                    Some(prev_idx) => self.set_next(prev_idx, next),
                }
                return Some(self.vacate(idx));
            }
            prev = Some(idx);
            cursor = next;
        }
        None
    }

    /// Unlink and return the first event
    pub fn pop_front(&mut self) -> Option<Event<P>> {
        let idx = self.head?;
        let (_, next) = self.node(idx);
        self.head = next;
        Some(self.vacate(idx))
    }

    /// Iterate events in list order
    pub fn iter(&self) -> Iter<'_, P> {
        Iter {
            list: self,
            cursor: self.head,
        }
    }

    /// Check that consecutive events never decrease under `ordering`
    pub fn is_sorted_by(&self, ordering: &dyn EventOrdering<P>) -> bool {
        let mut events = self.iter();
        let Some(mut previous) = events.next() else {
            return true;
        };
        for event in events {
            if ordering.compare(previous, event) == Ordering::Greater {
                return false;
            }
            previous = event;
        }
        true
    }

    /// Verify chain and slot bookkeeping
    ///
    /// # Returns
    ///
    /// A description of the first inconsistency found
    pub fn check_integrity(&self) -> Result<(), String> {
        let mut walked = 0;
        let mut cursor = self.head;
        while let Some(idx) = cursor {
            walked += 1;
            if walked > self.slots.len() {
                return Err("cycle in event chain".to_string());
            }
            match self.slots.get(idx) {
                Some(Slot::Occupied { next, .. }) => cursor = *next,
                Some(Slot::Vacant { .. }) => {
                    return Err(format!("vacant slot {} linked into event chain", idx))
                }
                None => return Err(format!("link to missing slot {}", idx)),
            }
        }

        if walked != self.len {
            return Err(format!(
                "chain has {} events but length is {}",
                walked, self.len
            ));
        }

        let occupied = self
            .slots
            .iter()
            .filter(|slot| matches!(slot, Slot::Occupied { .. }))
            .count();
        if occupied != self.len {
            return Err(format!(
                "{} occupied slots but {} linked events",
                occupied, self.len
            ));
        }

        Ok(())
    }

    fn node(&self, idx: usize) -> (&Event<P>, Option<usize>) {
        match &self.slots[idx] {
            Slot::Occupied { event, next } => (event, *next),
            Slot::Vacant { .. } => unreachable!("vacant slot {} linked into event chain", idx),
        }
    }

    fn set_next(&mut self, idx: usize, new_next: Option<usize>) {
        match &mut self.slots[idx] {
            Slot::Occupied { next, .. } => *next = new_next,
            Slot::Vacant { .. } => unreachable!("vacant slot {} linked into event chain", idx),
        }
    }

    /// Store an event in a free slot (capacity must already be reserved)
    fn occupy(&mut self, event: Event<P>, next: Option<usize>) -> usize {
        let slot = Slot::Occupied { event, next };
        match self.free_head {
            Some(idx) => {
                self.free_head = match self.slots[idx] {
                    Slot::Vacant { next_free } => next_free,
                    Slot::Occupied { .. } => unreachable!("free list points at occupied slot {}", idx),
                };
                self.slots[idx] = slot;
                idx
            }
            None => {
                self.slots.push(slot);
                self.slots.len() - 1
            }
        }
    }

    /// Release an already-unlinked slot and hand back its event
    fn vacate(&mut self, idx: usize) -> Event<P> {
        let slot = std::mem::replace(
            &mut self.slots[idx],
            Slot::Vacant {
                next_free: self.free_head,
            },
        );
        self.free_head = Some(idx);
        self.len -= 1;

        // Last event gone: give the arena back
        if self.len == 0 {
            self.slots = Vec::new();
            self.free_head = None;
        }

        match slot {
            Slot::Occupied { event, .. } => event,
            Slot::Vacant { .. } => unreachable!("slot {} vacated twice", idx),
        }
    }
}

impl<P> Default for EventList<P> {
    fn default() -> Self {
        Self::new()
    }
}

/// Iterator over one day's events in list order
pub struct Iter<'a, P> {
    list: &'a EventList<P>,
    cursor: Option<usize>,
}

impl<'a, P> Iterator for Iter<'a, P> {
    type Item = &'a Event<P>;

    fn next(&mut self) -> Option<Self::Item> {
        let idx = self.cursor?;
        let (event, next) = self.list.node(idx);
        self.cursor = next;
        Some(event)
    }
}

impl<'a, P> IntoIterator for &'a EventList<P> {
    type Item = &'a Event<P>;
    type IntoIter = Iter<'a, P>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::strategy::ByStartTime;

    fn event(name: &str, start_time: i32) -> Event<u32> {
        Event::new(name, start_time, 30, Some(start_time as u32)).unwrap()
    }

    fn names(list: &EventList<u32>) -> Vec<&str> {
        list.iter().map(|e| e.name()).collect()
    }

    fn sample() -> EventList<u32> {
        let mut list = EventList::new();
        list.insert_sorted(event("Standup", 900), &ByStartTime).unwrap();
        list.insert_sorted(event("Lunch", 1200), &ByStartTime).unwrap();
        list.insert_sorted(event("Review", 1000), &ByStartTime).unwrap();
        list
    }

    #[test]
    fn test_new_list_is_empty() {
        let list: EventList<u32> = EventList::new();

        assert!(list.is_empty());
        assert_eq!(list.len(), 0);
        assert!(list.iter().next().is_none());
        assert!(list.check_integrity().is_ok());
    }

    #[test]
    fn test_insert_sorted_positions() {
        let mut list = EventList::new();

        assert_eq!(list.insert_sorted(event("B", 1000), &ByStartTime), Ok(0));
        assert_eq!(list.insert_sorted(event("A", 800), &ByStartTime), Ok(0));
        assert_eq!(list.insert_sorted(event("D", 1600), &ByStartTime), Ok(2));
        assert_eq!(list.insert_sorted(event("C", 1200), &ByStartTime), Ok(2));

        assert_eq!(names(&list), vec!["A", "B", "C", "D"]);
        assert!(list.is_sorted_by(&ByStartTime));
        assert!(list.check_integrity().is_ok());
    }

    #[test]
    fn test_equal_event_goes_before_existing() {
        let mut list = EventList::new();
        list.insert_sorted(event("First", 900), &ByStartTime).unwrap();
        list.insert_sorted(event("Second", 900), &ByStartTime).unwrap();

        assert_eq!(names(&list), vec!["Second", "First"]);
    }

    #[test]
    fn test_remove_head_interior_tail() {
        let mut head = sample();
        assert_eq!(head.remove("Standup").map(|e| e.start_time()), Some(900));
        assert_eq!(names(&head), vec!["Review", "Lunch"]);
        assert!(head.check_integrity().is_ok());

        let mut interior = sample();
        interior.remove("Review").unwrap();
        assert_eq!(names(&interior), vec!["Standup", "Lunch"]);
        assert!(interior.check_integrity().is_ok());

        let mut tail = sample();
        tail.remove("Lunch").unwrap();
        assert_eq!(names(&tail), vec!["Standup", "Review"]);
        assert!(tail.check_integrity().is_ok());
    }

    #[test]
    fn test_remove_missing_leaves_list_unchanged() {
        let mut list = sample();

        assert!(list.remove("Retro").is_none());
        assert_eq!(list.len(), 3);
        assert_eq!(names(&list), vec!["Standup", "Review", "Lunch"]);
    }

    #[test]
    fn test_vacated_slot_is_reused() {
        let mut list = sample();
        list.remove("Review").unwrap();
        list.insert_sorted(event("Sync", 1100), &ByStartTime).unwrap();

        assert_eq!(list.slots.len(), 3);
        assert_eq!(names(&list), vec!["Standup", "Sync", "Lunch"]);
        assert!(list.check_integrity().is_ok());
    }

    #[test]
    fn test_pop_front_drains_in_order_and_releases_arena() {
        let mut list = sample();
        let mut popped = Vec::new();
        while let Some(event) = list.pop_front() {
            popped.push(event.name().to_string());
        }

        assert_eq!(popped, vec!["Standup", "Review", "Lunch"]);
        assert!(list.is_empty());
        assert_eq!(list.slots.len(), 0);
        assert!(list.check_integrity().is_ok());
    }

    #[test]
    fn test_find() {
        let list = sample();

        assert_eq!(list.find("Review").map(|e| e.payload()), Some(Some(&1000)));
        assert!(list.find("Retro").is_none());
    }

    #[test]
    fn test_is_sorted_by_detects_foreign_order() {
        let list = sample();
        let by_name = |a: &Event<u32>, b: &Event<u32>| a.name().cmp(b.name());

        assert!(list.is_sorted_by(&ByStartTime));
        assert!(!list.is_sorted_by(&by_name));
    }
}
