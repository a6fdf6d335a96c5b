mod config;
mod error;
mod gateway;
mod slots;
mod startup;
mod utils;

use tracing::info;

#[tokio::main]
async fn main() -> miette::Result<()> {
    // Initialize logging
    startup::init_logging()?;

    info!("Starting aikaikkuna");

    // Load configuration
    let config = startup::load_config().await?;

    // Run the free-slot search
    startup::run(config).await
}
