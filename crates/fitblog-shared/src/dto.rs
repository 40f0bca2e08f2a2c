//! Data Transfer Objects - request/response types for the API.

use std::borrow::Cow;

use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use url::Url;
use validator::{Validate, ValidationError};

use fitblog_core::domain::{BlogPatch, BlogPost, NewBlogPost};

/// Accepts absolute `http`/`https` URLs that name a host.
pub fn validate_http_url(value: &str) -> Result<(), ValidationError> {
    match Url::parse(value) {
        Ok(url) if matches!(url.scheme(), "http" | "https") && url.host().is_some() => Ok(()),
        _ => Err(ValidationError::new("url")
            .with_message(Cow::Borrowed("must be a valid http or https URL"))),
    }
}

/// Marks a field as present, keeping an explicit `null` apart from a missing key.
fn present<'de, D, T>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}

/// Request to create a blog post.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateBlogRequest {
    #[validate(length(min = 3, max = 160, message = "must be between 3 and 160 characters"))]
    pub title: String,
    #[validate(length(min = 10, max = 500, message = "must be between 10 and 500 characters"))]
    pub summary: String,
    /// Full body in markdown or HTML.
    pub content: Option<String>,
    /// Category label such as Training, Nutrition or Gear.
    pub tag: Option<String>,
    #[validate(custom(function = "validate_http_url"))]
    pub image: Option<String>,
    /// Call-to-action button text.
    pub affiliate_label: Option<String>,
    #[validate(custom(function = "validate_http_url"))]
    pub affiliate_url: Option<String>,
    #[serde(default)]
    pub featured: bool,
}

impl From<CreateBlogRequest> for NewBlogPost {
    fn from(req: CreateBlogRequest) -> Self {
        Self {
            title: req.title,
            summary: req.summary,
            content: req.content,
            tag: req.tag,
            image: req.image,
            affiliate_label: req.affiliate_label,
            affiliate_url: req.affiliate_url,
            featured: req.featured,
        }
    }
}

/// Partial update of a blog post. Missing keys are left untouched.
///
/// Present values are not length-checked; only URLs are validated.
/// An explicit `null` clears the nullable fields. On `title`, `summary` and
/// `featured` it is treated as a missing key, since a stored post always
/// carries them.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdateBlogRequest {
    pub title: Option<String>,
    pub summary: Option<String>,
    #[serde(default, deserialize_with = "present")]
    pub content: Option<Option<String>>,
    #[serde(default, deserialize_with = "present")]
    pub tag: Option<Option<String>>,
    #[serde(default, deserialize_with = "present")]
    #[validate(custom(function = "validate_http_url"))]
    pub image: Option<Option<String>>,
    #[serde(default, deserialize_with = "present")]
    pub affiliate_label: Option<Option<String>>,
    #[serde(default, deserialize_with = "present")]
    #[validate(custom(function = "validate_http_url"))]
    pub affiliate_url: Option<Option<String>>,
    pub featured: Option<bool>,
}

impl From<UpdateBlogRequest> for BlogPatch {
    fn from(req: UpdateBlogRequest) -> Self {
        Self {
            title: req.title,
            summary: req.summary,
            content: req.content,
            tag: req.tag,
            image: req.image,
            affiliate_label: req.affiliate_label,
            affiliate_url: req.affiliate_url,
            featured: req.featured,
        }
    }
}

/// Query string of the listing endpoint.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ListBlogsQuery {
    pub limit: Option<u32>,
}

/// External representation of a stored blog post.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BlogResponse {
    pub id: String,
    pub title: String,
    pub summary: String,
    pub content: Option<String>,
    pub tag: Option<String>,
    pub image: Option<String>,
    pub affiliate_label: Option<String>,
    pub affiliate_url: Option<String>,
    pub featured: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
}

fn iso8601(ts: DateTime<Utc>) -> String {
    ts.to_rfc3339_opts(SecondsFormat::Millis, true)
}

impl From<BlogPost> for BlogResponse {
    fn from(post: BlogPost) -> Self {
        Self {
            id: post.id.to_string(),
            title: post.title,
            summary: post.summary,
            content: post.content,
            tag: post.tag,
            image: post.image,
            affiliate_label: post.affiliate_label,
            affiliate_url: post.affiliate_url,
            featured: post.featured,
            created_at: post.created_at.map(iso8601),
            updated_at: post.updated_at.map(iso8601),
        }
    }
}

/// Plain liveness message.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Store connectivity report of the diagnostics endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DiagnosticsResponse {
    pub backend: String,
    pub database: String,
    pub database_url: Option<String>,
    pub database_name: Option<String>,
    pub connection_status: String,
    pub collections: Vec<String>,
}

impl Default for DiagnosticsResponse {
    fn default() -> Self {
        Self {
            backend: "✅ Running".to_string(),
            database: "❌ Not Available".to_string(),
            database_url: None,
            database_name: None,
            connection_status: "Not Connected".to_string(),
            collections: Vec::new(),
        }
    }
}
