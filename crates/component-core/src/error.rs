//! Error types for component scaffolding

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Errors produced while validating input or writing a component to disk
#[derive(Error, Debug)]
pub enum ComponentError {
    /// The proposed component name failed validation.
    ///
    /// Raised before any filesystem action; nothing is generated.
    #[error("Invalid component name '{input}': {reason}")]
    InvalidName {
        /// Raw user input
        input: String,
        /// Human-readable rule that was broken
        reason: &'static str,
    },

    /// The target location is not an existing directory.
    #[error("{} is not a valid directory", path.display())]
    DestinationNotDirectory { path: PathBuf },

    /// The target directory cannot be written to by the current user.
    #[error("{} is not a writable directory: {source}", path.display())]
    DestinationNotWritable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Creating a single directory or file failed mid-sequence.
    ///
    /// Entries created before the failing step are left on disk.
    #[error("Failed to create {}: {source}", path.display())]
    FilesystemWrite {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl ComponentError {
    /// Path the error refers to, if any
    pub fn path(&self) -> Option<&PathBuf> {
        match self {
            ComponentError::InvalidName { .. } => None,
            ComponentError::DestinationNotDirectory { path }
            | ComponentError::DestinationNotWritable { path, .. }
            | ComponentError::FilesystemWrite { path, .. } => Some(path),
        }
    }
}

/// Result alias used throughout the core library
pub type Result<T> = std::result::Result<T, ComponentError>;
