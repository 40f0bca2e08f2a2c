//! # Fitblog Shared
//!
//! Wire types of the HTTP API: request payloads with their validation
//! rules, the blog serializer and RFC 7807 error bodies.

pub mod dto;
pub mod response;

pub use dto::{BlogResponse, CreateBlogRequest, UpdateBlogRequest};
pub use response::{ErrorResponse, FieldError};
