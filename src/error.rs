//! Error types for the scripture viewer.
//!
//! This module provides a unified error handling approach using `thiserror`.
//! Only load failures ever reach the reader of a rendered page; the remaining
//! variants are reported to callers of the library and the CLI.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for viewer operations.
pub type Result<T> = std::result::Result<T, ViewerError>;

/// Errors that can occur while loading or driving a viewer.
#[derive(Debug, Error)]
pub enum ViewerError {
    /// Failed to open a local data file.
    #[error("Failed to open file: {path}")]
    FileOpen {
        /// Path that could not be opened.
        path: PathBuf,
        /// Underlying IO error.
        #[source]
        source: std::io::Error,
    },

    /// Failed to fetch a remote data file.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Remote server answered with a non-success status.
    #[error("HTTP status {status} for {url}")]
    HttpStatus {
        /// Requested URL.
        url: String,
        /// Status code returned.
        status: u16,
    },

    /// The data file is not valid JSON for the expected document shape.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// A data source string could not be understood.
    #[error("Invalid data source: {0}")]
    InvalidSource(String),

    /// A textual action could not be parsed.
    #[error("Invalid action: {0}")]
    InvalidAction(String),

    /// No clickable region with this id exists in the current render.
    #[error("No region bound to id {id}")]
    UnboundRegion {
        /// Region id that was dispatched.
        id: String,
    },

    /// Navigation was attempted on a viewer whose document never loaded.
    #[error("Document not loaded")]
    NotLoaded,

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl ViewerError {
    /// Create a FileOpen error.
    pub fn file_open(path: PathBuf, source: std::io::Error) -> Self {
        Self::FileOpen { path, source }
    }

    /// Create an UnboundRegion error.
    pub fn unbound_region(id: impl Into<String>) -> Self {
        Self::UnboundRegion { id: id.into() }
    }

    /// Whether this error happened while loading a document.
    pub fn is_load_failure(&self) -> bool {
        matches!(
            self,
            Self::FileOpen { .. } | Self::Http(_) | Self::HttpStatus { .. } | Self::Json(_)
        )
    }
}
