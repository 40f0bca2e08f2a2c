//! # Fitblog Core
//!
//! The domain layer of the blog service.
//! This crate contains the blog entity, its identifiers and the ports the
//! infrastructure layer implements. It performs no I/O.

pub mod domain;
pub mod error;
pub mod ports;

pub use error::{DomainError, RepoError};
