//! Errors raised while loading static organizations.

use thiserror::Error;
use uuid::Uuid;

/// The configured organizations violate a store invariant.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum StaticStoreError {
    #[error("organization {id} has an empty name")]
    EmptyName { id: Uuid },

    #[error("organization name '{name}' is used more than once")]
    DuplicateName { name: String },

    #[error("organization id {id} is used more than once")]
    DuplicateId { id: Uuid },

    #[error("custom domain '{domain}' is claimed by both '{first}' and '{second}'")]
    DuplicateCustomDomain {
        domain: String,
        first: String,
        second: String,
    },
}
