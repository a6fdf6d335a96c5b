use crate::error::{config_error, env_error, AppResult};
use crate::slots::TimePocket;
use dotenvy::dotenv;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use toml;

/// Default daily time pockets used when no pockets file is present
pub const DEFAULT_POCKETS: &[(&str, &str)] = &[("09:00", "12:00"), ("14:00", "17:00")];

/// Default length of the search window in days
pub const DEFAULT_SEARCH_DAYS: i64 = 7;

/// A single candidate window as configured (HH:MM strings)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PocketEntry {
    pub start: String,
    pub end: String,
}

/// Shape of the optional config/pockets.toml file
#[derive(Debug, Clone, Deserialize)]
struct PocketsFile {
    pocket: Vec<PocketEntry>,
}

/// Main configuration structure for the application
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Google Calendar API client ID
    pub google_client_id: String,
    /// Google Calendar API client secret
    pub google_client_secret: String,
    /// Google Calendar ID to query
    pub google_calendar_id: String,
    /// Timezone for slot evaluation
    pub timezone: String,
    /// Path of the on-disk OAuth token store
    pub token_path: String,
    /// Explicit search window start (YYYY-MM-DD), if set
    pub search_start_date: Option<String>,
    /// Explicit search window end (YYYY-MM-DD, exclusive), if set
    pub search_end_date: Option<String>,
    /// Length of the default search window in days
    pub search_days_ahead: i64,
    /// Candidate daily windows to test for free time
    pub pockets: Vec<PocketEntry>,
}

impl Config {
    /// Load configuration from environment and config file
    pub fn load() -> AppResult<Self> {
        // Load .env file if it exists
        dotenv().ok();

        // Required environment variables
        let google_client_id =
            env::var("GOOGLE_CLIENT_ID").map_err(|_| env_error("GOOGLE_CLIENT_ID"))?;
        let google_client_secret =
            env::var("GOOGLE_CLIENT_SECRET").map_err(|_| env_error("GOOGLE_CLIENT_SECRET"))?;
        let google_calendar_id =
            env::var("GOOGLE_CALENDAR_ID").map_err(|_| env_error("GOOGLE_CALENDAR_ID"))?;

        // Default timezone
        let timezone = env::var("TIMEZONE").unwrap_or_else(|_| String::from("UTC"));

        // Token store location
        let token_path = env::var("TOKEN_PATH").unwrap_or_else(|_| String::from("token.json"));

        // Optional explicit search window
        let search_start_date = env::var("SEARCH_START_DATE").ok();
        let search_end_date = env::var("SEARCH_END_DATE").ok();

        let search_days_ahead = match env::var("SEARCH_DAYS_AHEAD") {
            Ok(value) => value
                .parse::<i64>()
                .map_err(|_| env_error("Invalid SEARCH_DAYS_AHEAD format"))?,
            Err(_) => DEFAULT_SEARCH_DAYS,
        };

        // Built-in pockets, replaced by config/pockets.toml if it exists
        let mut pockets: Vec<PocketEntry> = DEFAULT_POCKETS
            .iter()
            .map(|(start, end)| PocketEntry {
                start: (*start).to_string(),
                end: (*end).to_string(),
            })
            .collect();

        if let Ok(content) = fs::read_to_string("config/pockets.toml") {
            if let Ok(file_pockets) = toml::from_str::<PocketsFile>(&content) {
                pockets = file_pockets.pocket;
            }
        }

        Ok(Config {
            google_client_id,
            google_client_secret,
            google_calendar_id,
            timezone,
            token_path,
            search_start_date,
            search_end_date,
            search_days_ahead,
            pockets,
        })
    }

    /// Validate the configured pockets and convert them to typed windows
    pub fn time_pockets(&self) -> AppResult<Vec<TimePocket>> {
        if self.pockets.is_empty() {
            return Err(config_error("No time pockets configured"));
        }

        self.pockets
            .iter()
            .map(|entry| TimePocket::parse(&entry.start, &entry.end))
            .collect()
    }
}
