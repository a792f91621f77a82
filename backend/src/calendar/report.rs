//! Calendar report
//!
//! A read-only snapshot of what a calendar prints, plus the text format used
//! by `Calendar::describe`:
//!
//! ```text
//! Calendar's Name: "<name>"
//! Days: <days>
//! Total Events: <total_events>
//!
//! Day <n>
//! Event's Name: "<name>", Start_time: <start_time>, Duration: <duration_minutes>
//! ```
//!
//! The header block is optional. Every day gets a `Day <n>` line, even when
//! it holds no events.

use crate::calendar::error::CalendarError;
use crate::models::event::Event;
use serde::{Deserialize, Serialize};
use std::io::{self, Write};

/// Printable view of a whole calendar
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalendarReport {
    pub name: String,
    pub days: usize,
    pub total_events: usize,
    pub day_reports: Vec<DayReport>,
}

/// Printable view of one day, events in list order
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayReport {
    pub day: usize,
    pub events: Vec<EventSummary>,
}

/// Printable fields of one event (payloads are never reported)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventSummary {
    pub name: String,
    pub start_time: i32,
    pub duration_minutes: i32,
}

impl<P> From<&Event<P>> for EventSummary {
    fn from(event: &Event<P>) -> Self {
        EventSummary {
            name: event.name().to_string(),
            start_time: event.start_time(),
            duration_minutes: event.duration_minutes(),
        }
    }
}

impl CalendarReport {
    /// Write the text format to `sink`
    pub fn write_to<W>(&self, sink: &mut W, include_summary: bool) -> io::Result<()>
    where
        W: Write + ?Sized,
    {
        if include_summary {
            writeln!(sink, "Calendar's Name: \"{}\"", self.name)?;
            writeln!(sink, "Days: {}", self.days)?;
            writeln!(sink, "Total Events: {}", self.total_events)?;
            writeln!(sink)?;
        }

        for day_report in &self.day_reports {
            writeln!(sink, "Day {}", day_report.day)?;
            for event in &day_report.events {
                writeln!(
                    sink,
                    "Event's Name: \"{}\", Start_time: {}, Duration: {}",
                    event.name, event.start_time, event.duration_minutes
                )?;
            }
        }

        Ok(())
    }

    /// Render the text format into a string
    pub fn to_text(&self, include_summary: bool) -> String {
        let mut buffer = Vec::new();
        // Writing into a Vec cannot fail
        let _ = self.write_to(&mut buffer, include_summary);
        String::from_utf8_lossy(&buffer).into_owned()
    }

    /// Serialize as pretty-printed JSON
    pub fn to_json_pretty(&self) -> Result<String, CalendarError> {
        serde_json::to_string_pretty(self).map_err(|e| {
            CalendarError::SerializationError(format!("Report serialization failed: {}", e))
        })
    }
}
