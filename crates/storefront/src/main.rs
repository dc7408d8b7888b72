use anyhow::{Context, Result};
use dotenv::dotenv;
use shared::{config::Config, utils::init_logger};
use storefront::{handler::AppRouter, state::AppState};
use tracing::info;

fn env_flag(key: &str) -> bool {
    std::env::var(key)
        .map(|v| v == "true" || v == "1")
        .unwrap_or(false)
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenv().ok();

    let is_dev = env_flag("DEV_MODE");
    let is_enable_file = env_flag("ENABLE_FILE_LOG");

    let _guard = init_logger("storefront", is_dev, is_enable_file);

    let config = Config::init().context("Failed to load configuration")?;
    let port = config.port;

    let state = AppState::new(&config)
        .await
        .context("Failed to create AppState")?;

    info!("🚀 Storefront started successfully");

    AppRouter::serve(port, state)
        .await
        .context("Failed to start server")?;

    info!("Shutting down storefront...");

    Ok(())
}
