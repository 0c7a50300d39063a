//!
//! Kratix SDK: path-addressable documents and workflow pipeline helpers.
//!
//! Pipelines receive Kubernetes-style objects as YAML and need to read and
//! rewrite arbitrary nested fields of them. This crate provides:
//!
//! - [`document`]: a dynamically typed document tree, a path grammar such as
//!   `pods[0].containers[1].ready`, and `get`/`set`/`remove`/merge on top.
//! - [`resource`]: typed wrappers (`Resource`, `Promise`, `Status`) exposing
//!   identity metadata and delegating field access to the document layer.
//! - [`sdk`]: the pipeline file layout (input object, status, destination
//!   selectors, output) and status publication through a caller-supplied
//!   persistence hook.

pub mod constants;
pub mod document;
pub mod resource;
pub mod sdk;

pub use document::{DocumentError, PathExpr, Value};
pub use resource::{Promise, Resource, Status};
pub use sdk::{Sdk, SdkConfig};

/// Result type used throughout the crate
pub type Result<T> = std::result::Result<T, Error>;

/// Crate-level error, wrapping the error type of each module.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error(transparent)]
    Document(document::DocumentError),

    #[error(transparent)]
    Resource(resource::ResourceError),

    #[error(transparent)]
    Sdk(sdk::SdkError),
}

impl Error {
    /// Name of the module the error originated in
    pub fn module(&self) -> &'static str {
        match self {
            Error::Io(_) => "io",
            Error::Json(_) => "json",
            Error::Yaml(_) => "yaml",
            Error::Document(_) => "document",
            Error::Resource(_) => "resource",
            Error::Sdk(_) => "sdk",
        }
    }

    pub fn is_not_found(&self) -> bool {
        match self {
            Error::Document(err) => err.is_not_found(),
            Error::Sdk(err) => err.is_not_found(),
            Error::Io(err) => err.kind() == std::io::ErrorKind::NotFound,
            _ => false,
        }
    }

    pub fn is_invalid_path(&self) -> bool {
        match self {
            Error::Document(err) => err.is_invalid_path(),
            Error::Sdk(err) => matches!(err, sdk::SdkError::InvalidOutputPath { .. }),
            _ => false,
        }
    }

    pub fn is_type_error(&self) -> bool {
        match self {
            Error::Document(err) => err.is_type_error(),
            Error::Resource(err) => err.is_shape_error(),
            _ => false,
        }
    }

    pub fn is_io_error(&self) -> bool {
        match self {
            Error::Io(_) => true,
            Error::Sdk(err) => err.is_io_error(),
            _ => false,
        }
    }

    /// Check if the error came from encoding or decoding a document
    pub fn is_serialization_error(&self) -> bool {
        match self {
            Error::Json(_) | Error::Yaml(_) => true,
            Error::Sdk(err) => err.is_decode_error(),
            _ => false,
        }
    }

    pub fn is_document_error(&self) -> bool {
        matches!(self, Error::Document(_))
    }

    pub fn is_resource_error(&self) -> bool {
        matches!(self, Error::Resource(_))
    }

    pub fn is_sdk_error(&self) -> bool {
        matches!(self, Error::Sdk(_))
    }
}
