//! Scenario files
//!
//! A scenario describes a calendar and the operations to apply to it, in
//! order: inserts, then removals, then day clears.
//!
//! ```json
//! {
//!   "calendar": { "name": "Sprint", "days": 3, "ordering": "start_time" },
//!   "events": [
//!     { "name": "Standup", "start_time": 900, "duration_minutes": 15, "day": 1,
//!       "payload": { "room": "4B" } }
//!   ],
//!   "remove": ["Standup"],
//!   "clear_days": [2]
//! }
//! ```

use anyhow::Context;
use event_calendar_core::{Calendar, CalendarBuilder, CalendarConfig, CalendarError};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::path::Path;
use tracing::{debug, info};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Scenario {
    pub calendar: CalendarConfig,

    #[serde(default)]
    pub events: Vec<ScenarioEvent>,

    #[serde(default)]
    pub remove: Vec<String>,

    #[serde(default)]
    pub clear_days: Vec<usize>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScenarioEvent {
    pub name: String,
    pub start_time: i32,
    pub duration_minutes: i32,
    pub day: usize,

    #[serde(default)]
    pub payload: Option<Value>,
}

impl Scenario {
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("reading scenario {}", path.display()))?;
        let scenario = serde_json::from_str(&text)
            .with_context(|| format!("parsing scenario {}", path.display()))?;
        Ok(scenario)
    }

    /// Build the calendar and apply every operation in order
    ///
    /// Stops at the first failing operation.
    pub fn apply(&self) -> Result<Calendar<Value>, CalendarError> {
        self.calendar.validate()?;
        let mut calendar = CalendarBuilder::from_config(&self.calendar)
            .cleanup(|payload: Value| debug!(%payload, "payload released"))
            .build()?;

        for event in &self.events {
            calendar.insert(
                &event.name,
                event.start_time,
                event.duration_minutes,
                event.payload.clone(),
                event.day,
            )?;
        }
        for name in &self.remove {
            calendar.remove_by_name(name)?;
        }
        for day in &self.clear_days {
            calendar.clear_day(*day)?;
        }

        info!(
            calendar = calendar.name(),
            total_events = calendar.total_events(),
            "scenario applied"
        );
        Ok(calendar)
    }
}
