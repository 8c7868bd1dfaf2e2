//! Error types for py3ready operations.
//!
//! This module defines [`Py3ReadyError`], the primary error type used
//! throughout the application, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - Malformed requirement/metadata lines are never errors; they are skipped
//!   with a warning where they are parsed
//! - A failed index lookup aborts the whole run: a partial blocker list
//!   would read as a complete one
//! - Use `anyhow::Error` (via `Py3ReadyError::Other`) for unexpected errors

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for py3ready operations.
#[derive(Debug, Error)]
pub enum Py3ReadyError {
    /// No project names were supplied through any seed source.
    #[error("Missing 'requirements', 'metadata', or 'projects'")]
    NoProjects,

    /// A compatibility lookup failed (network or malformed response).
    #[error("Failed to look up '{project}': {message}")]
    LookupFailed { project: String, message: String },

    /// A seed file could not be read.
    #[error("Failed to read {path}: {source}")]
    SeedFileUnreadable {
        path: PathBuf,
        source: std::io::Error,
    },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias for py3ready operations.
pub type Result<T> = std::result::Result<T, Py3ReadyError>;
