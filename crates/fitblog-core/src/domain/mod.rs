//! Domain entities - the core business objects.

mod id;
mod post;

pub use id::BlogId;
pub use post::{BlogPatch, BlogPost, NewBlogPost, timestamp_now};
