//! Error types for the portal core.

use std::path::PathBuf;

use portal_ingest::{DecodeError, UploadError};
use thiserror::Error;

/// Reasons a seat number search produces no result.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LookupError {
    #[error("No data available. Please upload a CSV file first.")]
    NoDataset,

    #[error("Seat number required")]
    EmptyKey,

    #[error("Could not find seat number column in the CSV")]
    NoSeatColumn,

    #[error("Student with seat number '{key}' not found")]
    NotFound { key: String },
}

/// Failures reading or writing the persisted dataset file.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("failed to access dataset file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("dataset file {path} is not a usable CSV: {source}")]
    Decode {
        path: PathBuf,
        #[source]
        source: DecodeError,
    },
}

impl StoreError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

/// Failures loading `portal.toml`.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config {path}: {source}")]
    Toml {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

/// Any failure surfaced by [`Portal`](crate::Portal) operations.
#[derive(Debug, Error)]
pub enum PortalError {
    #[error(transparent)]
    Upload(#[from] UploadError),

    #[error(transparent)]
    Lookup(#[from] LookupError),

    #[error(transparent)]
    Store(#[from] StoreError),

    #[error(transparent)]
    Config(#[from] ConfigError),
}
