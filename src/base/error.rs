//! Error types for project and solution operations.

use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors that can occur while resolving paths or describing a project.
///
/// Lookups never return these: file-system failures during a query are turned
/// into `None`/`false` at the call site. Only construction and artifact
/// queries on a malformed project surface an error to the caller.
#[derive(Debug, Error)]
pub enum ProjectError {
    /// A path could not be canonicalized or a directory could not be listed.
    #[error("IO error on {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The project is missing data it needs, or was built from unusable input.
    #[error("Invalid project state: {0}")]
    InvalidState(String),

    /// A manifest could not produce the file list of a descriptor.
    #[error("Manifest error in {}: {message}", .path.display())]
    Manifest { path: PathBuf, message: String },
}

impl ProjectError {
    /// Create an IO error attached to `path`.
    pub fn io(path: impl AsRef<Path>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.as_ref().to_path_buf(),
            source,
        }
    }

    /// Create an invalid state error.
    pub fn invalid_state(message: impl Into<String>) -> Self {
        Self::InvalidState(message.into())
    }

    /// Create a manifest error for the descriptor at `path`.
    pub fn manifest(path: impl AsRef<Path>, message: impl Into<String>) -> Self {
        Self::Manifest {
            path: path.as_ref().to_path_buf(),
            message: message.into(),
        }
    }
}
