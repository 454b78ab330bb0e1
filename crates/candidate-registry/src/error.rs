//! Errors raised while building a registry or reading its configuration.
//!
//! Parsing candidates never produces these; an invalid candidate is simply
//! `None`. They only surface when a registry snapshot or an environment
//! override is malformed.

use thiserror::Error;

/// Errors that can occur while constructing a [`Registry`](crate::Registry).
#[derive(Debug, Error)]
pub enum RegistryError {
    /// The snapshot was not valid JSON or did not match the expected shape.
    #[error("invalid registry snapshot: {0}")]
    Json(#[from] serde_json::Error),

    /// A utility or variant was declared with a blank name.
    #[error("empty {what} name in registry snapshot")]
    EmptyName {
        /// Which table the blank name was found in.
        what: &'static str,
    },

    /// A variant was declared twice with different kinds or compounding.
    #[error("variant `{0}` declared with conflicting definitions")]
    ConflictingVariant(String),

    /// An invalid configuration value was provided.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}
