//! MongoDB repository implementations.

use async_trait::async_trait;
use bson::doc;
use futures::TryStreamExt;
use mongodb::error::{Error as MongoError, ErrorKind};
use mongodb::{Collection, Database};

use fitblog_core::RepoError;
use fitblog_core::domain::{BlogId, BlogPatch, BlogPost, NewBlogPost, timestamp_now};
use fitblog_core::ports::{BaseRepository, BlogRepository};

use super::document::{BLOG_COLLECTION, BlogDocument, by_id, set_fields};

fn store_error(err: MongoError) -> RepoError {
    match err.kind.as_ref() {
        ErrorKind::ServerSelection { .. }
        | ErrorKind::Io(_)
        | ErrorKind::ConnectionPoolCleared { .. } => RepoError::Connection(err.to_string()),
        ErrorKind::BsonDeserialization(_) | ErrorKind::BsonSerialization(_) => {
            RepoError::Serialization(err.to_string())
        }
        _ => RepoError::Query(err.to_string()),
    }
}

/// Blog repository over the `blog` collection.
#[derive(Clone)]
pub struct MongoBlogRepository {
    collection: Collection<BlogDocument>,
}

impl MongoBlogRepository {
    pub fn new(db: &Database) -> Self {
        Self {
            collection: db.collection(BLOG_COLLECTION),
        }
    }
}

#[async_trait]
impl BaseRepository<BlogPost, BlogId> for MongoBlogRepository {
    async fn find_by_id(&self, id: BlogId) -> Result<Option<BlogPost>, RepoError> {
        let found = self
            .collection
            .find_one(by_id(id.as_object_id()))
            .await
            .map_err(store_error)?;

        found.map(BlogPost::try_from).transpose()
    }

    async fn delete(&self, id: BlogId) -> Result<(), RepoError> {
        let result = self
            .collection
            .delete_one(by_id(id.as_object_id()))
            .await
            .map_err(store_error)?;

        if result.deleted_count == 0 {
            return Err(RepoError::NotFound);
        }

        tracing::debug!(blog_id = %id, "Blog deleted");
        Ok(())
    }
}

#[async_trait]
impl BlogRepository for MongoBlogRepository {
    async fn list(&self, limit: Option<u32>) -> Result<Vec<BlogPost>, RepoError> {
        let mut find = self.collection.find(doc! {});
        if let Some(limit) = limit.filter(|n| *n > 0) {
            find = find.limit(i64::from(limit));
        }

        let docs: Vec<BlogDocument> = find
            .await
            .map_err(store_error)?
            .try_collect()
            .await
            .map_err(store_error)?;

        docs.into_iter().map(BlogPost::try_from).collect()
    }

    async fn insert(&self, draft: NewBlogPost) -> Result<BlogPost, RepoError> {
        let result = self
            .collection
            .insert_one(BlogDocument::for_insert(draft, timestamp_now()))
            .await
            .map_err(store_error)?;

        let id: BlogId = result
            .inserted_id
            .as_object_id()
            .ok_or_else(|| RepoError::Serialization("inserted id is not an ObjectId".to_string()))?
            .into();
        tracing::debug!(blog_id = %id, "Blog inserted");

        // Read back what the store actually holds.
        self.find_by_id(id).await?.ok_or(RepoError::NotFound)
    }

    async fn update(&self, id: BlogId, patch: BlogPatch) -> Result<BlogPost, RepoError> {
        let set = set_fields(patch, timestamp_now());
        let result = self
            .collection
            .update_one(by_id(id.as_object_id()), doc! { "$set": set })
            .await
            .map_err(store_error)?;

        if result.matched_count == 0 {
            return Err(RepoError::NotFound);
        }

        tracing::debug!(blog_id = %id, modified = result.modified_count, "Blog updated");
        self.find_by_id(id).await?.ok_or(RepoError::NotFound)
    }
}
