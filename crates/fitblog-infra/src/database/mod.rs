//! Document store access.

mod connections;
mod memory;

#[cfg(feature = "mongo")]
pub mod document;
#[cfg(feature = "mongo")]
mod mongo_repo;

pub use connections::{DEFAULT_DATABASE_NAME, DatabaseConfig};
pub use memory::InMemoryBlogRepository;

#[cfg(feature = "mongo")]
pub use connections::MongoStore;
#[cfg(feature = "mongo")]
pub use mongo_repo::MongoBlogRepository;
