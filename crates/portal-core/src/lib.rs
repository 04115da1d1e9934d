//! Results portal core.
//!
//! Ties decoding, column resolution and certificate rendering together
//! around a single active dataset:
//!
//! - [`lookup`]: seat number search over a dataset
//! - [`RecordStore`]: the active dataset, replaced wholesale on upload
//! - [`DatasetFile`]: the single persisted copy of the last good upload
//! - [`Portal`]: the upload / search / certificate / stats operations

pub mod config;
pub mod error;
pub mod hash;
pub mod lookup;
pub mod persist;
pub mod portal;
pub mod response;
pub mod stats;
pub mod store;

pub use config::{CONFIG_FILE_NAME, DEFAULT_DATA_FILE, DEFAULT_SAMPLE_SIZE, PortalConfig};
pub use error::{ConfigError, LookupError, PortalError, StoreError};
pub use lookup::{
    DEFAULT_PASS_THRESHOLD, LookupOptions, NAME_NOT_AVAILABLE, SCORE_NOT_AVAILABLE, display_name,
    lookup, lookup_with_options, parse_score,
};
pub use persist::DatasetFile;
pub use portal::{Certificate, ColumnReport, Portal, UploadSummary};
pub use response::{ErrorResponse, UploadResponse};
pub use stats::DatasetStats;
pub use store::RecordStore;

pub use portal_ingest::{DecodeError, UploadError};
