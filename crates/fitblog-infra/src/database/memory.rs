//! In-memory blog store - used when no document store is configured.

use async_trait::async_trait;
use tokio::sync::RwLock;

use fitblog_core::RepoError;
use fitblog_core::domain::{BlogId, BlogPatch, BlogPost, NewBlogPost, timestamp_now};
use fitblog_core::ports::{BaseRepository, BlogRepository};

/// Blog repository backed by a `Vec` behind an async `RwLock`.
///
/// Keeps insertion order, like a collection scan without a sort.
/// Note: Data is lost on process restart.
pub struct InMemoryBlogRepository {
    posts: RwLock<Vec<BlogPost>>,
}

impl InMemoryBlogRepository {
    pub fn new() -> Self {
        Self {
            posts: RwLock::new(Vec::new()),
        }
    }
}

impl Default for InMemoryBlogRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl BaseRepository<BlogPost, BlogId> for InMemoryBlogRepository {
    async fn find_by_id(&self, id: BlogId) -> Result<Option<BlogPost>, RepoError> {
        let posts = self.posts.read().await;
        Ok(posts.iter().find(|p| p.id == id).cloned())
    }

    async fn delete(&self, id: BlogId) -> Result<(), RepoError> {
        let mut posts = self.posts.write().await;
        let index = posts
            .iter()
            .position(|p| p.id == id)
            .ok_or(RepoError::NotFound)?;
        posts.remove(index);
        Ok(())
    }
}

#[async_trait]
impl BlogRepository for InMemoryBlogRepository {
    async fn list(&self, limit: Option<u32>) -> Result<Vec<BlogPost>, RepoError> {
        let posts = self.posts.read().await;
        let take = match limit {
            Some(n) if n > 0 => n as usize,
            _ => posts.len(),
        };
        Ok(posts.iter().take(take).cloned().collect())
    }

    async fn insert(&self, draft: NewBlogPost) -> Result<BlogPost, RepoError> {
        let post = BlogPost::from_new(BlogId::generate(), draft, timestamp_now());
        self.posts.write().await.push(post.clone());
        Ok(post)
    }

    async fn update(&self, id: BlogId, patch: BlogPatch) -> Result<BlogPost, RepoError> {
        let mut posts = self.posts.write().await;
        let post = posts
            .iter_mut()
            .find(|p| p.id == id)
            .ok_or(RepoError::NotFound)?;
        post.apply(patch, timestamp_now());
        Ok(post.clone())
    }
}
