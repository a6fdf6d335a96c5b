use crate::error::{config_error, AppResult};
use crate::slots::time::parse_time;
use chrono::{DateTime, NaiveDate, NaiveTime};
use chrono_tz::Tz;
use serde::{Serialize, Serializer};

/// A recurring daily candidate window, defined by time of day only
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimePocket {
    pub start: NaiveTime,
    pub end: NaiveTime,
}

impl TimePocket {
    /// Parse a pocket from HH:MM strings, requiring start < end
    pub fn parse(start: &str, end: &str) -> AppResult<Self> {
        let (start_hour, start_minute) = parse_time(start)
            .ok_or_else(|| config_error(&format!("Invalid pocket start time: {}", start)))?;
        let (end_hour, end_minute) = parse_time(end)
            .ok_or_else(|| config_error(&format!("Invalid pocket end time: {}", end)))?;

        let start = NaiveTime::from_hms_opt(start_hour, start_minute, 0)
            .ok_or_else(|| config_error(&format!("Invalid pocket start time: {}", start)))?;
        let end = NaiveTime::from_hms_opt(end_hour, end_minute, 0)
            .ok_or_else(|| config_error(&format!("Invalid pocket end time: {}", end)))?;

        if start >= end {
            return Err(config_error(&format!(
                "Pocket start {} must be before end {}",
                start.format("%H:%M"),
                end.format("%H:%M")
            )));
        }

        Ok(Self { start, end })
    }
}

/// An event normalized into the target timezone, start <= end
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BusyPeriod {
    pub start: DateTime<Tz>,
    pub end: DateTime<Tz>,
}

/// A pocket on a specific date with no overlapping events
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FreeSlot {
    #[serde(serialize_with = "serialize_date")]
    pub date: NaiveDate,
    #[serde(serialize_with = "serialize_hhmm")]
    pub start: NaiveTime,
    #[serde(serialize_with = "serialize_hhmm")]
    pub end: NaiveTime,
}

fn serialize_date<S: Serializer>(date: &NaiveDate, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.collect_str(&date.format("%Y-%m-%d"))
}

fn serialize_hhmm<S: Serializer>(time: &NaiveTime, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.collect_str(&time.format("%H:%M"))
}
