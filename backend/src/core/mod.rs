//! Core value rules shared by events and calendars

pub mod time;
