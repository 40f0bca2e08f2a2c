use std::fmt;
use std::str::FromStr;

use bson::oid::ObjectId;
use serde::{Deserialize, Serialize};

use crate::error::DomainError;

/// Opaque blog identifier, backed by the document store's 12-byte object id.
///
/// The external form is the 24-character lowercase hex string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BlogId(ObjectId);

impl BlogId {
    /// Generate a fresh identifier.
    pub fn generate() -> Self {
        Self(ObjectId::new())
    }

    /// Parse the external string form. Fails with [`DomainError::InvalidId`],
    /// never with `NotFound`.
    pub fn parse(raw: &str) -> Result<Self, DomainError> {
        ObjectId::parse_str(raw)
            .map(Self)
            .map_err(|_| DomainError::InvalidId(raw.to_string()))
    }

    pub fn as_object_id(&self) -> ObjectId {
        self.0
    }
}

impl From<ObjectId> for BlogId {
    fn from(oid: ObjectId) -> Self {
        Self(oid)
    }
}

impl FromStr for BlogId {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for BlogId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.to_hex())
    }
}
