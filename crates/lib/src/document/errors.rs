//! Error types for document access.
//!
//! Path parsing and tree walking report through a single enum so callers can
//! tell a malformed path apart from a structurally invalid one.

use thiserror::Error;

/// Structured error types for path parsing and document access.
#[non_exhaustive]
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum DocumentError {
    /// The path string could not be parsed
    #[error("{reason}")]
    InvalidPath { path: String, reason: String },

    /// A step expected a container kind the current node does not have
    #[error("cannot index '{path}': expected {expected} but got {actual}")]
    TypeMismatch {
        path: String,
        expected: &'static str,
        actual: &'static str,
    },

    /// Padding a sequence up to an index would overflow or exhaust memory
    #[error("cannot extend '{path}' to index {index}: sequence too large")]
    IndexTooLarge { path: String, index: usize },

    /// An intermediate segment of a remove path does not exist
    #[error("path not resolvable: '{path}' does not exist")]
    PathNotResolvable { path: String },

    /// No value exists at the requested path
    #[error("path {path} not found")]
    NotFound { path: String },
}

impl DocumentError {
    pub(crate) fn invalid_path(path: &str, reason: impl Into<String>) -> Self {
        DocumentError::InvalidPath {
            path: path.to_string(),
            reason: reason.into(),
        }
    }

    /// Check if the path itself was malformed
    pub fn is_invalid_path(&self) -> bool {
        matches!(self, DocumentError::InvalidPath { .. })
    }

    /// Check if this error is a container kind mismatch
    pub fn is_type_error(&self) -> bool {
        matches!(self, DocumentError::TypeMismatch { .. })
    }

    /// Check if an index was too large to extend a sequence to
    pub fn is_index_too_large(&self) -> bool {
        matches!(self, DocumentError::IndexTooLarge { .. })
    }

    /// Check if an intermediate path segment was missing
    pub fn is_not_resolvable(&self) -> bool {
        matches!(self, DocumentError::PathNotResolvable { .. })
    }

    /// Check if this error indicates a value was not found
    pub fn is_not_found(&self) -> bool {
        matches!(self, DocumentError::NotFound { .. })
    }

    /// Get the path this error refers to
    pub fn path(&self) -> &str {
        match self {
            DocumentError::InvalidPath { path, .. }
            | DocumentError::TypeMismatch { path, .. }
            | DocumentError::IndexTooLarge { path, .. }
            | DocumentError::PathNotResolvable { path }
            | DocumentError::NotFound { path } => path,
        }
    }
}

// Conversion from DocumentError to the main Error type
impl From<DocumentError> for crate::Error {
    fn from(err: DocumentError) -> Self {
        crate::Error::Document(err)
    }
}
