use crate::config::Config;
use crate::error::{google_calendar_error, AppResult};
use async_trait::async_trait;
use chrono::DateTime;
use chrono_tz::Tz;
use reqwest::Client;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::debug;
use url::Url;

pub mod models;
pub mod token;

use models::{CalendarEvent, EventsResponse};
use token::TokenManager;

/// Calendar access as seen by the free-slot core. Implementations handle
/// authentication and transport; the core only consumes the event list.
#[async_trait]
pub trait CalendarGateway: Send + Sync {
    /// List events within the given window, ordered by start time, with
    /// recurring events already expanded to single occurrences.
    async fn list_events(
        &self,
        calendar_id: &str,
        time_min: DateTime<Tz>,
        time_max: DateTime<Tz>,
    ) -> AppResult<Vec<CalendarEvent>>;
}

/// Gateway backed by the Google Calendar v3 API
pub struct GoogleCalendarGateway {
    token_manager: TokenManager,
    client: Client,
}

impl GoogleCalendarGateway {
    pub fn new(config: Arc<RwLock<Config>>) -> Self {
        Self {
            token_manager: TokenManager::new(config),
            client: Client::new(),
        }
    }
}

#[async_trait]
impl CalendarGateway for GoogleCalendarGateway {
    async fn list_events(
        &self,
        calendar_id: &str,
        time_min: DateTime<Tz>,
        time_max: DateTime<Tz>,
    ) -> AppResult<Vec<CalendarEvent>> {
        // Get authentication token
        let token = self.token_manager.get_token().await?;
        let access_token = token
            .get("access_token")
            .and_then(|t| t.as_str())
            .ok_or_else(|| google_calendar_error("No access token available"))?;

        // Build URL with query parameters
        let url_str = format!(
            "https://www.googleapis.com/calendar/v3/calendars/{}/events",
            calendar_id
        );

        let mut url = Url::parse(&url_str)
            .map_err(|e| google_calendar_error(&format!("Failed to parse URL: {}", e)))?;

        url.query_pairs_mut()
            .append_pair("timeMin", &time_min.to_rfc3339())
            .append_pair("timeMax", &time_max.to_rfc3339())
            .append_pair("singleEvents", "true")
            .append_pair("orderBy", "startTime");

        debug!("Fetching events from {}", url);

        // Make API request
        let response = self
            .client
            .get(url)
            .header("Authorization", format!("Bearer {}", access_token))
            .send()
            .await
            .map_err(|e| google_calendar_error(&format!("Failed to fetch events: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let error_body = response
                .text()
                .await
                .unwrap_or_else(|_| "Could not read error response".to_string());
            return Err(google_calendar_error(&format!(
                "Failed to fetch events: HTTP {} - {}",
                status, error_body
            )));
        }

        let response_data: EventsResponse = response
            .json()
            .await
            .map_err(|e| google_calendar_error(&format!("Failed to parse events response: {}", e)))?;

        Ok(response_data.items.unwrap_or_default())
    }
}
