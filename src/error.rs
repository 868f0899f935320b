//! Error types for the journal library.
//!
//! Commands at the CLI layer wrap these in `anyhow::Result`; the library
//! itself always returns typed errors.

use std::path::PathBuf;

use thiserror::Error;

/// Errors produced by the journal library
#[derive(Debug, Error)]
pub enum JournalError {
    /// Durable storage could not be read or written
    #[error("storage error: {0}")]
    Storage(#[from] std::io::Error),

    /// Answer map could not be serialized
    #[error("serialization error: {0}")]
    Serialize(#[from] serde_json::Error),

    /// Question id not present in the static question table
    #[error("unknown question id: {0}")]
    UnknownQuestion(String),

    /// Saving a section whose answers are all blank
    #[error("every answer in the {0} section is empty; answer at least one question before saving")]
    EmptySection(String),

    /// A second export was requested while one is in flight
    #[error("an export is already in progress")]
    ExportInFlight,

    /// The rasterizer rejected the document
    #[error("rasterization failed: {0}")]
    Rasterize(String),

    /// The rasterizer font could not be loaded
    #[error("could not load font from {path}: {reason}")]
    FontUnavailable { path: PathBuf, reason: String },

    /// PDF assembly rejected the paginated images
    #[error("PDF assembly failed: {0}")]
    Assembly(String),
}

/// Library result alias
pub type Result<T> = std::result::Result<T, JournalError>;
