//! BSON mapping of the `blog` collection.

use bson::oid::ObjectId;
use bson::{Document, doc};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use fitblog_core::RepoError;
use fitblog_core::domain::{BlogPatch, BlogPost, NewBlogPost};

/// Name of the collection holding blog posts.
pub const BLOG_COLLECTION: &str = "blog";

/// Stored shape of a blog post.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BlogDocument {
    /// Absent on insert so the driver assigns it.
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    pub title: String,
    pub summary: String,
    #[serde(default)]
    pub content: Option<String>,
    #[serde(default)]
    pub tag: Option<String>,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub affiliate_label: Option<String>,
    #[serde(default)]
    pub affiliate_url: Option<String>,
    #[serde(default)]
    pub featured: bool,
    #[serde(default)]
    pub created_at: Option<bson::DateTime>,
    #[serde(default)]
    pub updated_at: Option<bson::DateTime>,
}

impl BlogDocument {
    /// Document for `insert_one`, stamped with both timestamps.
    pub fn for_insert(draft: NewBlogPost, now: DateTime<Utc>) -> Self {
        let stamp = bson::DateTime::from_chrono(now);
        Self {
            id: None,
            title: draft.title,
            summary: draft.summary,
            content: draft.content,
            tag: draft.tag,
            image: draft.image,
            affiliate_label: draft.affiliate_label,
            affiliate_url: draft.affiliate_url,
            featured: draft.featured,
            created_at: Some(stamp),
            updated_at: Some(stamp),
        }
    }
}

impl TryFrom<BlogDocument> for BlogPost {
    type Error = RepoError;

    fn try_from(doc: BlogDocument) -> Result<Self, Self::Error> {
        let id = doc
            .id
            .ok_or_else(|| RepoError::Serialization("document has no _id".to_string()))?;
        Ok(Self {
            id: id.into(),
            title: doc.title,
            summary: doc.summary,
            content: doc.content,
            tag: doc.tag,
            image: doc.image,
            affiliate_label: doc.affiliate_label,
            affiliate_url: doc.affiliate_url,
            featured: doc.featured,
            created_at: doc.created_at.map(bson::DateTime::to_chrono),
            updated_at: doc.updated_at.map(bson::DateTime::to_chrono),
        })
    }
}

/// Filter matching a single post by id.
pub fn by_id(id: ObjectId) -> Document {
    doc! { "_id": id }
}

/// `$set` body for a patch: only present fields, plus `updated_at`.
pub fn set_fields(patch: BlogPatch, now: DateTime<Utc>) -> Document {
    let mut set = Document::new();
    if let Some(title) = patch.title {
        set.insert("title", title);
    }
    if let Some(summary) = patch.summary {
        set.insert("summary", summary);
    }
    if let Some(content) = patch.content {
        set.insert("content", content);
    }
    if let Some(tag) = patch.tag {
        set.insert("tag", tag);
    }
    if let Some(image) = patch.image {
        set.insert("image", image);
    }
    if let Some(label) = patch.affiliate_label {
        set.insert("affiliate_label", label);
    }
    if let Some(url) = patch.affiliate_url {
        set.insert("affiliate_url", url);
    }
    if let Some(featured) = patch.featured {
        set.insert("featured", featured);
    }
    set.insert("updated_at", bson::DateTime::from_chrono(now));
    set
}
