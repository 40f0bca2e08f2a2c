//! Ports - trait definitions for external dependencies.
//! These are the "interfaces" that infrastructure must implement.

mod probe;
mod repository;

pub use probe::{StoreProbe, StoreStatus, MAX_REPORTED_COLLECTIONS};
pub use repository::{BaseRepository, BlogRepository, DEFAULT_LIST_LIMIT};
