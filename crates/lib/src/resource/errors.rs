//! Error types for typed resource wrappers.

use thiserror::Error;

/// Errors raised while wrapping a document as a resource.
#[non_exhaustive]
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ResourceError {
    /// The document root is not a mapping
    #[error("resource must be an object, got {actual}")]
    NotAnObject { actual: &'static str },

    /// The document has a different kind than the wrapper expects
    #[error("expected kind {expected}, got '{actual}'")]
    UnexpectedKind { expected: &'static str, actual: String },
}

impl ResourceError {
    /// Check if the document was the wrong shape or kind
    pub fn is_shape_error(&self) -> bool {
        matches!(
            self,
            ResourceError::NotAnObject { .. } | ResourceError::UnexpectedKind { .. }
        )
    }
}

impl From<ResourceError> for crate::Error {
    fn from(err: ResourceError) -> Self {
        crate::Error::Resource(err)
    }
}
