use crate::error::{other_error, AppResult, Error};
use crate::gateway::models::EventTime;
use chrono::{DateTime, LocalResult, NaiveDate, NaiveDateTime, TimeZone};
use chrono_tz::Tz;

/// Parse time string in HH:MM format
pub fn parse_time(time_str: &str) -> Option<(u32, u32)> {
    let parts: Vec<&str> = time_str.split(':').collect();
    if parts.len() != 2 {
        return None;
    }
    let hour = parts[0].parse::<u32>().ok()?;
    let minute = parts[1].parse::<u32>().ok()?;
    if hour > 23 || minute > 59 {
        return None;
    }
    Some((hour, minute))
}

/// Resolve an IANA timezone name
pub fn resolve_timezone(name: &str) -> AppResult<Tz> {
    name.parse::<Tz>()
        .map_err(|_| Error::UnknownTimezone(name.to_string()))
}

/// Interpret a naive local time in the given timezone
pub fn localize(tz: Tz, naive: NaiveDateTime) -> AppResult<DateTime<Tz>> {
    match tz.from_local_datetime(&naive) {
        LocalResult::Single(dt) => Ok(dt),
        LocalResult::Ambiguous(_, _) => Err(other_error(&format!("Ambiguous local time: {}", naive))),
        LocalResult::None => Err(other_error(&format!("Invalid local time: {}", naive))),
    }
}

/// Normalize an event boundary into a timezone-aware instant.
///
/// A precise timestamp is parsed as RFC 3339 (a trailing `Z` is zero offset)
/// and converted into the target timezone. A date-only boundary marks an
/// all-day event and is interpreted as midnight in the target timezone.
pub fn event_boundary(time: &EventTime, tz: Tz) -> AppResult<DateTime<Tz>> {
    if let Some(date_time) = &time.date_time {
        let parsed = DateTime::parse_from_rfc3339(date_time).map_err(|e| {
            Error::InvalidEventTime(format!("Failed to parse datetime '{}': {}", date_time, e))
        })?;
        Ok(parsed.with_timezone(&tz))
    } else if let Some(date) = &time.date {
        let day = NaiveDate::parse_from_str(date, "%Y-%m-%d").map_err(|e| {
            Error::InvalidEventTime(format!("Failed to parse date '{}': {}", date, e))
        })?;
        let midnight = day
            .and_hms_opt(0, 0, 0)
            .ok_or_else(|| Error::InvalidEventTime(format!("Failed to create datetime for '{}'", date)))?;
        match tz.from_local_datetime(&midnight) {
            LocalResult::Single(dt) => Ok(dt),
            LocalResult::Ambiguous(_, _) => Err(Error::InvalidEventTime(format!(
                "Ambiguous local midnight for '{}'",
                date
            ))),
            LocalResult::None => Err(Error::InvalidEventTime(format!(
                "Nonexistent local midnight for '{}'",
                date
            ))),
        }
    } else {
        Err(Error::InvalidEventTime(
            "Event boundary has neither dateTime nor date".to_string(),
        ))
    }
}
