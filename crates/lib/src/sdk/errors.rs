//! Error types for pipeline file I/O and status publication.

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised by [`crate::sdk::Sdk`] operations.
#[non_exhaustive]
#[derive(Debug, Error)]
pub enum SdkError {
    /// A pipeline file could not be read.
    #[error("failed to read {}", path.display())]
    Read {
        /// File that was being read
        path: PathBuf,
        /// The underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// A pipeline file or its parent directory could not be written.
    #[error("failed to write {}", path.display())]
    Write {
        /// File that was being written
        path: PathBuf,
        /// The underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// A pipeline file held malformed YAML.
    #[error("failed to decode {}", path.display())]
    Decode {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    /// An output path escapes the output directory.
    #[error("output path '{path}' must be relative and stay inside the output directory")]
    InvalidOutputPath { path: String },

    /// Publishing was requested but no [`crate::sdk::StatusUpdater`] is configured.
    #[error("no status updater configured")]
    NoStatusUpdater,

    /// The status updater rejected the update.
    #[error("failed to update status of {target}: {reason}")]
    UpdateFailed { target: String, reason: String },
}

impl SdkError {
    /// Check if this error came from the file system
    pub fn is_io_error(&self) -> bool {
        matches!(self, SdkError::Read { .. } | SdkError::Write { .. })
    }

    /// Check if a file was missing
    pub fn is_not_found(&self) -> bool {
        match self {
            SdkError::Read { source, .. } => source.kind() == std::io::ErrorKind::NotFound,
            _ => false,
        }
    }

    /// Check if this error came from decoding a file
    pub fn is_decode_error(&self) -> bool {
        matches!(self, SdkError::Decode { .. })
    }

    /// Check if status publication failed
    pub fn is_publish_error(&self) -> bool {
        matches!(
            self,
            SdkError::NoStatusUpdater | SdkError::UpdateFailed { .. }
        )
    }
}

impl From<SdkError> for crate::Error {
    fn from(err: SdkError) -> Self {
        crate::Error::Sdk(err)
    }
}
