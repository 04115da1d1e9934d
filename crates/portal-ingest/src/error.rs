//! Error types for results file ingestion.

use thiserror::Error;

/// Errors produced while decoding uploaded bytes into a dataset.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecodeError {
    /// Input is empty or contains only whitespace.
    #[error("CSV file is empty")]
    EmptyInput,

    /// No encoding/delimiter combination produced a header and a data row.
    #[error("could not process CSV with any encoding or delimiter combination")]
    Unparseable,
}

/// Errors produced while accepting an uploaded file.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UploadError {
    /// File name does not carry an allowed extension.
    #[error("only {allowed} files are allowed, got '{file_name}'")]
    UnsupportedExtension { file_name: String, allowed: String },

    /// File content could not be decoded.
    #[error(transparent)]
    Decode(#[from] DecodeError),
}

/// Result type for ingestion operations.
pub type Result<T> = std::result::Result<T, DecodeError>;
