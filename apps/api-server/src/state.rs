//! Application state - shared across all handlers.

use std::sync::Arc;

use fitblog_core::RepoError;
use fitblog_core::ports::{BlogRepository, StoreProbe};
use fitblog_infra::{DatabaseConfig, InMemoryBlogRepository};

#[cfg(feature = "mongo")]
use fitblog_infra::MongoStore;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub blogs: Arc<dyn BlogRepository>,
    /// `None` when no document store is in use.
    pub probe: Option<Arc<dyn StoreProbe>>,
    /// Whether a connection string was configured at all.
    pub database_url_set: bool,
}

impl AppState {
    /// Build the application state with appropriate implementations.
    ///
    /// Without a configured store the service runs on the in-memory
    /// repository. A configured store that cannot be reached is an error.
    pub async fn new(db_config: Option<&DatabaseConfig>) -> Result<Self, RepoError> {
        #[cfg(feature = "mongo")]
        let state = match db_config {
            Some(config) => {
                let store = Arc::new(MongoStore::connect(config).await.inspect_err(|e| {
                    tracing::error!("Failed to connect to document store: {}", e);
                })?);
                let probe: Arc<dyn StoreProbe> = store.clone();
                Self {
                    blogs: Arc::new(store.blogs()),
                    probe: Some(probe),
                    database_url_set: true,
                }
            }
            None => {
                tracing::warn!("DATABASE_URL not set. Running without database (in-memory mode).");
                Self::in_memory()
            }
        };

        #[cfg(not(feature = "mongo"))]
        let state = {
            tracing::info!("Running without mongo feature - using in-memory repository");
            Self {
                database_url_set: db_config.is_some(),
                ..Self::in_memory()
            }
        };

        tracing::info!("Application state initialized");
        Ok(state)
    }

    /// State backed by the in-memory store, with no store to probe.
    pub fn in_memory() -> Self {
        Self {
            blogs: Arc::new(InMemoryBlogRepository::new()),
            probe: None,
            database_url_set: false,
        }
    }

    #[cfg(test)]
    pub fn with_probe(mut self, probe: Arc<dyn StoreProbe>) -> Self {
        self.probe = Some(probe);
        self
    }
}
