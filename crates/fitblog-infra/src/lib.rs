//! # Fitblog Infrastructure
//!
//! Concrete implementations of the ports defined in `fitblog-core`.
//!
//! ## Feature Flags
//!
//! - `mongo` (default) - MongoDB document store via the official driver
//! - `minimal` - No external dependencies, in-memory store only

pub mod database;

pub use database::{DatabaseConfig, InMemoryBlogRepository};

#[cfg(feature = "mongo")]
pub use database::{MongoBlogRepository, MongoStore};
