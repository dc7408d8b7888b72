use anyhow::{Context, Result};
use dotenv::dotenv;
use prometheus_client::registry::Registry;
use shared::{
    abstract_trait::DynSeederService,
    config::{CatalogueBackend, Config, ConnectionManager},
    repository::InMemoryCatalogue,
    service::{SeedPlan, SeederService},
    utils::init_logger,
};
use std::sync::Arc;
use storefront::di::CatalogueRepositories;
use tokio::sync::Mutex;
use tracing::{info, warn};

#[tokio::main]
async fn main() -> Result<()> {
    dotenv().ok();

    let is_dev = std::env::var("DEV_MODE")
        .map(|v| v == "true" || v == "1")
        .unwrap_or(false);
    let _guard = init_logger("seed_products", is_dev, false);

    let config = Config::init().context("Failed to load configuration")?;

    let repositories = match config.catalogue_backend {
        CatalogueBackend::Postgres => {
            let db = config
                .database
                .as_ref()
                .context("Missing database configuration")?;
            let pool = ConnectionManager::new_pool(&db.url, db.max_connections)
                .await
                .context("Failed to connect to database")?;
            if db.run_migrations {
                ConnectionManager::run_migrations(&pool).await?;
            }
            CatalogueRepositories::postgres(pool)
        }
        CatalogueBackend::Memory => {
            warn!("⚠️ Seeding the in-memory catalogue; nothing outlives this process");
            CatalogueRepositories::memory(InMemoryCatalogue::new())
        }
    };

    let registry = Arc::new(Mutex::new(Registry::default()));
    let seeder: DynSeederService = Arc::new(
        SeederService::new(repositories.command, repositories.comments, registry).await,
    );

    let plan = SeedPlan::generate(&mut rand::rng());
    let report = seeder.run(plan).await.context("Failed to seed products")?;

    info!(
        "✅ Removed {} products, created {} products and {} comments",
        report.removed, report.products, report.comments
    );
    println!(
        "Seeded {} products with {} comments",
        report.products, report.comments
    );

    Ok(())
}
