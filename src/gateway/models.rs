use serde::{Deserialize, Serialize};

/// Calendar event as returned by the events list call
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct CalendarEvent {
    #[serde(default)]
    pub id: String,
    pub summary: Option<String>,
    pub description: Option<String>,
    #[serde(default)]
    pub start: EventTime,
    #[serde(default)]
    pub end: EventTime,
}

/// Event boundary: a precise timestamp or a whole-day date
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct EventTime {
    #[serde(rename = "dateTime", skip_serializing_if = "Option::is_none")]
    pub date_time: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
}

/// Response body of the events list call
#[derive(Debug, Deserialize)]
pub struct EventsResponse {
    pub items: Option<Vec<CalendarEvent>>,
}
