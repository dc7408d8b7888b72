use crate::di::{CatalogueRepositories, DependenciesInject};
use anyhow::{Context, Result};
use prometheus_client::registry::Registry;
use shared::{
    abstract_trait::DynSessionStore,
    cache::{MemorySessionStore, RedisSessionStore},
    config::{CatalogueBackend, Config, ConnectionManager, SessionBackend},
    repository::InMemoryCatalogue,
};
use std::{fmt, sync::Arc};
use tokio::sync::Mutex;
use tracing::{info, warn};

#[derive(Clone)]
pub struct AppState {
    pub di_container: DependenciesInject,
    pub registry: Arc<Mutex<Registry>>,
    pub admin_enabled: bool,
}

impl fmt::Debug for AppState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AppState")
            .field("di_container", &self.di_container)
            .field("admin_enabled", &self.admin_enabled)
            .finish()
    }
}

impl AppState {
    pub async fn new(config: &Config) -> Result<Self> {
        let repositories = match config.catalogue_backend {
            CatalogueBackend::Postgres => {
                let db = config
                    .database
                    .as_ref()
                    .context("Missing database configuration")?;

                info!("Connecting to PostgreSQL catalogue");
                let pool = ConnectionManager::new_pool(&db.url, db.max_connections)
                    .await
                    .context("Failed to connect to database")?;

                if db.run_migrations {
                    ConnectionManager::run_migrations(&pool).await?;
                }

                CatalogueRepositories::postgres(pool)
            }
            CatalogueBackend::Memory => {
                warn!("⚠️ Using the in-memory catalogue; data is lost on restart");
                CatalogueRepositories::memory(InMemoryCatalogue::new())
            }
        };

        let session: DynSessionStore = match config.session.backend {
            SessionBackend::Redis => {
                info!("Initializing Redis session store");
                let pool = config
                    .session
                    .redis
                    .create_pool()
                    .await
                    .context("Failed to connect to Redis")?;
                Arc::new(RedisSessionStore::new(pool, config.session.ttl_secs))
            }
            SessionBackend::Memory => Arc::new(MemorySessionStore::new()),
        };

        Ok(Self::from_parts(repositories, session, config.admin_enabled).await)
    }

    pub async fn from_parts(
        repositories: CatalogueRepositories,
        session: DynSessionStore,
        admin_enabled: bool,
    ) -> Self {
        let registry = Arc::new(Mutex::new(Registry::default()));
        let di_container = DependenciesInject::new(repositories, session, registry.clone()).await;

        Self {
            di_container,
            registry,
            admin_enabled,
        }
    }

    /// Fully in-process state: memory catalogue and memory sessions.
    pub async fn in_memory(admin_enabled: bool) -> Self {
        Self::from_parts(
            CatalogueRepositories::memory(InMemoryCatalogue::new()),
            Arc::new(MemorySessionStore::new()),
            admin_enabled,
        )
        .await
    }
}
