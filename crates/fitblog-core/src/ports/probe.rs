use async_trait::async_trait;

use crate::error::RepoError;

/// Upper bound on collection names reported by a probe.
pub const MAX_REPORTED_COLLECTIONS: usize = 10;

/// Connectivity snapshot of the backing store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreStatus {
    pub database_name: String,
    pub collections: Vec<String>,
}

/// Store diagnostics used by the liveness endpoint.
#[async_trait]
pub trait StoreProbe: Send + Sync {
    /// Round-trip to the store and report what it holds.
    async fn probe(&self) -> Result<StoreStatus, RepoError>;
}
