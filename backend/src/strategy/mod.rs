//! Injected calendar strategies
//!
//! A calendar is configured with two capabilities at construction time:
//!
//! - an **ordering** (`EventOrdering`), mandatory, that keeps every day-bucket
//!   sorted on insert
//! - a **cleanup** hook (`PayloadCleanup`), optional, that receives each
//!   payload when its event is removed or the calendar is torn down
//!
//! Both traits have blanket impls for closures, so ad-hoc strategies need no
//! named type:
//!
//! ```rust
//! use event_calendar_core::{CalendarBuilder, Event};
//! use std::cmp::Ordering;
//!
//! let calendar = CalendarBuilder::<String>::new("Team", 5)
//!     .ordering(|a: &Event<String>, b: &Event<String>| -> Ordering {
//!         b.duration_minutes().cmp(&a.duration_minutes())
//!     })
//!     .cleanup(|payload: String| drop(payload))
//!     .build()
//!     .unwrap();
//!
//! assert!(calendar.has_cleanup());
//! ```

pub mod cleanup;
pub mod ordering;

pub use cleanup::PayloadCleanup;
pub use ordering::{ByDuration, ByName, ByStartTime, ByStartTimeThenName, EventOrdering};
