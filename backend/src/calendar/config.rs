//! Calendar configuration
//!
//! Serializable description of a calendar using one of the built-in
//! orderings. Closures cannot be serialized; calendars with custom orderings
//! are assembled with `CalendarBuilder` directly.
//!
//! ```json
//! { "name": "Sprint 12", "days": 10, "ordering": "start_time" }
//! ```

use crate::calendar::builder::CalendarBuilder;
use crate::calendar::engine::Calendar;
use crate::calendar::error::CalendarError;
use crate::strategy::{ByDuration, ByName, ByStartTime, ByStartTimeThenName, EventOrdering};
use serde::{Deserialize, Serialize};

/// Built-in ordering selection
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OrderingConfig {
    /// Ascending start time (default)
    #[default]
    StartTime,

    /// Ascending start time, ties broken by name
    StartTimeThenName,

    /// Ascending duration
    Duration,

    /// Lexicographic name
    Name,
}

impl OrderingConfig {
    /// Instantiate the selected ordering
    pub fn build<P>(&self) -> Box<dyn EventOrdering<P>> {
        match self {
            OrderingConfig::StartTime => Box::new(ByStartTime),
            OrderingConfig::StartTimeThenName => Box::new(ByStartTimeThenName),
            OrderingConfig::Duration => Box::new(ByDuration),
            OrderingConfig::Name => Box::new(ByName),
        }
    }
}

/// Calendar configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalendarConfig {
    /// Descriptive calendar name (non-empty)
    pub name: String,

    /// Number of day-buckets (at least one)
    pub days: usize,

    /// Ordering used to keep each day sorted
    #[serde(default)]
    pub ordering: OrderingConfig,
}

impl CalendarConfig {
    /// Check the configuration without building a calendar
    pub fn validate(&self) -> Result<(), CalendarError> {
        if self.name.is_empty() {
            return Err(CalendarError::EmptyCalendarName);
        }
        if self.days == 0 {
            return Err(CalendarError::InvalidDayCount { days: self.days });
        }
        Ok(())
    }
}

impl<P> Calendar<P> {
    /// Create a calendar from a configuration, without a cleanup hook
    pub fn from_config(config: &CalendarConfig) -> Result<Self, CalendarError> {
        CalendarBuilder::from_config(config).build()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ordering_defaults_to_start_time() {
        let config: CalendarConfig =
            serde_json::from_str(r#"{ "name": "Team", "days": 5 }"#).unwrap();

        assert_eq!(config.ordering, OrderingConfig::StartTime);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_ordering_snake_case_names() {
        let config: CalendarConfig = serde_json::from_str(
            r#"{ "name": "Team", "days": 5, "ordering": "start_time_then_name" }"#,
        )
        .unwrap();

        assert_eq!(config.ordering, OrderingConfig::StartTimeThenName);
        assert_eq!(
            OrderingConfig::Duration.build::<()>().label(),
            "duration"
        );
    }

    #[test]
    fn test_validate_rejects_bad_config() {
        let empty_name = CalendarConfig {
            name: String::new(),
            days: 1,
            ordering: OrderingConfig::default(),
        };
        let no_days = CalendarConfig {
            name: "Team".to_string(),
            days: 0,
            ordering: OrderingConfig::default(),
        };

        assert_eq!(empty_name.validate(), Err(CalendarError::EmptyCalendarName));
        assert_eq!(no_days.validate(), Err(CalendarError::InvalidDayCount { days: 0 }));
    }
}
