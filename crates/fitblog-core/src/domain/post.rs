use chrono::{DateTime, SubsecRound, Utc};
use serde::{Deserialize, Serialize};

use super::BlogId;

/// Current time truncated to milliseconds, the resolution of the document store.
pub fn timestamp_now() -> DateTime<Utc> {
    Utc::now().trunc_subsecs(3)
}

/// Blog post entity - the single record type of the `blog` collection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BlogPost {
    pub id: BlogId,
    pub title: String,
    pub summary: String,
    pub content: Option<String>,
    pub tag: Option<String>,
    pub image: Option<String>,
    pub affiliate_label: Option<String>,
    pub affiliate_url: Option<String>,
    pub featured: bool,
    /// Records written outside this service may lack timestamps.
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}

/// A validated blog post that has not been stored yet.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct NewBlogPost {
    pub title: String,
    pub summary: String,
    pub content: Option<String>,
    pub tag: Option<String>,
    pub image: Option<String>,
    pub affiliate_label: Option<String>,
    pub affiliate_url: Option<String>,
    pub featured: bool,
}

/// Partial update with patch semantics.
///
/// `None` leaves a field untouched. For nullable fields `Some(None)` clears
/// the stored value and `Some(Some(v))` overwrites it, empty strings included.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct BlogPatch {
    pub title: Option<String>,
    pub summary: Option<String>,
    pub content: Option<Option<String>>,
    pub tag: Option<Option<String>>,
    pub image: Option<Option<String>>,
    pub affiliate_label: Option<Option<String>>,
    pub affiliate_url: Option<Option<String>>,
    pub featured: Option<bool>,
}

impl BlogPost {
    /// Build the stored record for a freshly inserted post.
    pub fn from_new(id: BlogId, draft: NewBlogPost, now: DateTime<Utc>) -> Self {
        Self {
            id,
            title: draft.title,
            summary: draft.summary,
            content: draft.content,
            tag: draft.tag,
            image: draft.image,
            affiliate_label: draft.affiliate_label,
            affiliate_url: draft.affiliate_url,
            featured: draft.featured,
            created_at: Some(now),
            updated_at: Some(now),
        }
    }

    /// Merge a patch into this record and stamp `updated_at`.
    pub fn apply(&mut self, patch: BlogPatch, now: DateTime<Utc>) {
        if let Some(title) = patch.title {
            self.title = title;
        }
        if let Some(summary) = patch.summary {
            self.summary = summary;
        }
        if let Some(content) = patch.content {
            self.content = content;
        }
        if let Some(tag) = patch.tag {
            self.tag = tag;
        }
        if let Some(image) = patch.image {
            self.image = image;
        }
        if let Some(label) = patch.affiliate_label {
            self.affiliate_label = label;
        }
        if let Some(url) = patch.affiliate_url {
            self.affiliate_url = url;
        }
        if let Some(featured) = patch.featured {
            self.featured = featured;
        }
        self.updated_at = Some(now);
    }
}

impl BlogPatch {
    /// True when the patch would change nothing but the timestamp.
    pub fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.summary.is_none()
            && self.content.is_none()
            && self.tag.is_none()
            && self.image.is_none()
            && self.affiliate_label.is_none()
            && self.affiliate_url.is_none()
            && self.featured.is_none()
    }
}
