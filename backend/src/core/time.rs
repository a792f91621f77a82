//! Clock values and day numbering
//!
//! Start times are HHMM-style integers. Only the numeric range is enforced:
//! `2400` is accepted and minute values are not checked, so `1399` passes.
//!
//! Days are opaque 1-based buckets. No calendar-date arithmetic happens here.

use crate::calendar::error::CalendarError;

/// Earliest accepted start time (midnight)
pub const MIN_START_TIME: i32 = 0;

/// Latest accepted start time (end-of-day midnight)
pub const MAX_START_TIME: i32 = 2400;

/// Validate an HHMM start time against `MIN_START_TIME..=MAX_START_TIME`
///
/// # Example
/// ```
/// use event_calendar_core::core::time::validate_start_time;
///
/// assert!(validate_start_time(900).is_ok());
/// assert!(validate_start_time(1399).is_ok());
/// assert!(validate_start_time(2401).is_err());
/// ```
pub fn validate_start_time(start_time: i32) -> Result<(), CalendarError> {
    if !(MIN_START_TIME..=MAX_START_TIME).contains(&start_time) {
        return Err(CalendarError::StartTimeOutOfRange { start_time });
    }
    Ok(())
}

/// Validate an event duration (must be strictly positive)
pub fn validate_duration(duration_minutes: i32) -> Result<(), CalendarError> {
    if duration_minutes <= 0 {
        return Err(CalendarError::InvalidDuration { duration_minutes });
    }
    Ok(())
}

/// Convert a 1-based day number into a bucket index
///
/// # Arguments
///
/// * `day` - Day number, 1 = first day
/// * `days` - Number of day-buckets in the calendar
///
/// # Returns
///
/// Zero-based index into the day-buckets, or `DayOutOfRange`
///
/// # Example
/// ```
/// use event_calendar_core::core::time::day_index;
///
/// assert_eq!(day_index(1, 7).unwrap(), 0);
/// assert_eq!(day_index(7, 7).unwrap(), 6);
/// assert!(day_index(0, 7).is_err());
/// assert!(day_index(8, 7).is_err());
/// ```
pub fn day_index(day: usize, days: usize) -> Result<usize, CalendarError> {
    if day == 0 || day > days {
        return Err(CalendarError::DayOutOfRange { day, days });
    }
    Ok(day - 1)
}
