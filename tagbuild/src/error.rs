//! Error types for element building.

use thiserror::Error;

/// Error type for building elements.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BuildError {
    /// No document could be resolved to create the element in.
    #[error("no document available to create a `<{tag}>` element in")]
    NoDocument {
        /// The tag that was being built.
        tag: String,
    },
    /// The tag name is not a valid element name.
    #[error("`{tag}` is not a valid tag name")]
    InvalidTag {
        /// The rejected tag name.
        tag: String,
    },
}

/// Result type for building elements.
pub type Result<T> = std::result::Result<T, BuildError>;
