use std::time::Duration;

#[cfg(feature = "mongo")]
use async_trait::async_trait;
#[cfg(feature = "mongo")]
use bson::doc;
#[cfg(feature = "mongo")]
use mongodb::{Client, Database, options::ClientOptions};

#[cfg(feature = "mongo")]
use fitblog_core::RepoError;
#[cfg(feature = "mongo")]
use fitblog_core::ports::{MAX_REPORTED_COLLECTIONS, StoreProbe, StoreStatus};

#[cfg(feature = "mongo")]
use super::mongo_repo::MongoBlogRepository;

/// Database used when neither the configuration nor the URI names one.
pub const DEFAULT_DATABASE_NAME: &str = "app";

/// Configuration for the document store.
#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    pub url: String,
    /// Overrides the default database of the connection string.
    pub database_name: Option<String>,
    pub max_pool_size: u32,
    pub min_pool_size: u32,
    pub connect_timeout: Duration,
    pub app_name: String,
}

impl DatabaseConfig {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            database_name: None,
            max_pool_size: 20,
            min_pool_size: 1,
            connect_timeout: Duration::from_secs(10),
            app_name: "fitblog".to_string(),
        }
    }
}

/// Process-wide handle on the document store.
///
/// Created once at startup and shared read-only; the driver pools
/// connections internally.
#[cfg(feature = "mongo")]
#[derive(Clone)]
pub struct MongoStore {
    db: Database,
}

#[cfg(feature = "mongo")]
impl MongoStore {
    /// Connect, select the database and verify the server answers a ping.
    pub async fn connect(config: &DatabaseConfig) -> Result<Self, RepoError> {
        tracing::info!("Connecting to document store...");

        let mut options = ClientOptions::parse(&config.url)
            .await
            .map_err(|e| RepoError::Connection(e.to_string()))?;
        options.app_name = Some(config.app_name.clone());
        options.max_pool_size = Some(config.max_pool_size);
        options.min_pool_size = Some(config.min_pool_size);
        options.connect_timeout = Some(config.connect_timeout);
        options.server_selection_timeout = Some(config.connect_timeout);

        let database_name = config
            .database_name
            .clone()
            .or_else(|| options.default_database.clone())
            .unwrap_or_else(|| DEFAULT_DATABASE_NAME.to_string());

        let client =
            Client::with_options(options).map_err(|e| RepoError::Connection(e.to_string()))?;
        let db = client.database(&database_name);

        db.run_command(doc! { "ping": 1 })
            .await
            .map_err(|e| RepoError::Connection(e.to_string()))?;

        tracing::info!(
            database = %database_name,
            pool = config.max_pool_size,
            "Document store connected"
        );

        Ok(Self { db })
    }

    pub fn database(&self) -> &Database {
        &self.db
    }

    /// Repository over the blog collection of this store.
    pub fn blogs(&self) -> MongoBlogRepository {
        MongoBlogRepository::new(&self.db)
    }
}

#[cfg(feature = "mongo")]
#[async_trait]
impl StoreProbe for MongoStore {
    async fn probe(&self) -> Result<StoreStatus, RepoError> {
        let mut collections = self
            .db
            .list_collection_names()
            .await
            .map_err(|e| RepoError::Query(e.to_string()))?;
        collections.truncate(MAX_REPORTED_COLLECTIONS);

        Ok(StoreStatus {
            database_name: self.db.name().to_string(),
            collections,
        })
    }
}
