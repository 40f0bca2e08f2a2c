use async_trait::async_trait;

use crate::domain::{BlogId, BlogPatch, BlogPost, NewBlogPost};
use crate::error::RepoError;

/// Number of posts returned by a listing when the caller gives no limit.
pub const DEFAULT_LIST_LIMIT: u32 = 50;

/// Generic repository trait defining the id-addressed operations.
#[async_trait]
pub trait BaseRepository<T, ID>: Send + Sync {
    /// Find an entity by its unique ID.
    async fn find_by_id(&self, id: ID) -> Result<Option<T>, RepoError>;

    /// Delete an entity by its ID. Fails with [`RepoError::NotFound`] when nothing matched.
    async fn delete(&self, id: ID) -> Result<(), RepoError>;
}

/// Blog repository over the `blog` collection.
#[async_trait]
pub trait BlogRepository: BaseRepository<BlogPost, BlogId> {
    /// List posts in the store's natural order. `None` or `Some(0)` means no limit.
    async fn list(&self, limit: Option<u32>) -> Result<Vec<BlogPost>, RepoError>;

    /// Store a new post; the store assigns the id.
    async fn insert(&self, draft: NewBlogPost) -> Result<BlogPost, RepoError>;

    /// Merge `patch` into the stored post, stamping `updated_at`.
    /// Fails with [`RepoError::NotFound`] when no post has this id.
    async fn update(&self, id: BlogId, patch: BlogPatch) -> Result<BlogPost, RepoError>;
}
