use crate::config::Config;
use crate::error::Error;
use crate::gateway::GoogleCalendarGateway;
use crate::slots::FreeSlotFinder;
use crate::utils::time::upcoming_date_range;
use chrono::Local;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::{error, info};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

/// Initialize logging with environment-based configuration
pub fn init_logging() -> miette::Result<()> {
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .finish();

    tracing::subscriber::set_global_default(subscriber)
        .map_err(|e| Error::Other(format!("Failed to set up logging: {}", e)))?;

    Ok(())
}

/// Load and initialize the application config
pub async fn load_config() -> miette::Result<Arc<RwLock<Config>>> {
    match Config::load() {
        Ok(config) => Ok(Arc::new(RwLock::new(config))),
        Err(e) => {
            error!("Failed to load configuration: {:?}", e);
            Err(e.into())
        }
    }
}

/// Run one free-slot query over the configured window and print the results
pub async fn run(config: Arc<RwLock<Config>>) -> miette::Result<()> {
    let (calendar_id, timezone, pockets, start_date, end_date) = {
        let config_read = config.read().await;

        let (default_start, default_end) =
            upcoming_date_range(&Local::now(), config_read.search_days_ahead);

        (
            config_read.google_calendar_id.clone(),
            config_read.timezone.clone(),
            config_read.time_pockets()?,
            config_read
                .search_start_date
                .clone()
                .unwrap_or(default_start),
            config_read.search_end_date.clone().unwrap_or(default_end),
        )
    };

    let gateway = Arc::new(GoogleCalendarGateway::new(Arc::clone(&config)));
    let finder = FreeSlotFinder::new(gateway, calendar_id);

    info!(
        "Searching free slots between {} and {} in {}",
        start_date, end_date, timezone
    );

    let free_slots = match finder
        .find_free_slots(&start_date, &end_date, &pockets, &timezone)
        .await
    {
        Ok(slots) => slots,
        Err(e) => {
            error!("Free slot search failed: {:?}", e);
            return Err(e.into());
        }
    };

    info!("Found {} free slots", free_slots.len());

    let output = serde_json::to_string_pretty(&free_slots)
        .map_err(|e| Error::Serialization(e.to_string()))?;
    println!("{}", output);

    Ok(())
}
