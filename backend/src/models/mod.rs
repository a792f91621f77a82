//! Domain models for the event calendar

pub mod day_list;
pub mod event;

// Re-exports
pub use day_list::EventList;
pub use event::Event;
