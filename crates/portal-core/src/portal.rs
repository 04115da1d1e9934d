//! Upload, search, certificate and stats operations over one data directory.

use std::path::Path;
use std::sync::{Arc, Mutex, PoisonError};

use chrono::NaiveDateTime;
use portal_ingest::{DecodeOptions, Delimiter, TextEncoding, prepare_upload};
use portal_map::{ResolvedColumns, resolve_columns};
use portal_model::{Dataset, LookupResult};
use portal_report::{attachment_file_name, format_certificate_with_options};
use serde::Serialize;
use tracing::{info, warn};

use crate::config::PortalConfig;
use crate::error::{LookupError, PortalError, StoreError};
use crate::lookup::lookup_with_options;
use crate::persist::DatasetFile;
use crate::response::UploadResponse;
use crate::stats::DatasetStats;
use crate::store::RecordStore;

/// Result of an accepted upload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadSummary {
    /// Name the upload was stored under.
    pub file_name: String,
    pub rows: usize,
    pub columns: Vec<String>,
    pub encoding: TextEncoding,
    pub delimiter: Delimiter,
}

impl UploadSummary {
    pub fn to_response(&self) -> UploadResponse {
        UploadResponse::accepted(&self.file_name, self.rows, self.columns.clone())
    }
}

/// A rendered certificate ready to be saved or sent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Certificate {
    pub file_name: String,
    pub text: String,
}

/// Header of the active dataset and the column chosen for each role.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ColumnReport {
    pub header: Vec<String>,
    pub resolved: ResolvedColumns,
}

/// The results portal bound to one dataset file.
///
/// Clones share the active dataset and serialize their uploads, so the
/// dataset file always holds the active dataset's bytes.
#[derive(Debug, Clone)]
pub struct Portal {
    config: PortalConfig,
    file: DatasetFile,
    store: RecordStore,
    decode_options: DecodeOptions,
    upload_lock: Arc<Mutex<()>>,
}

impl Portal {
    /// Opens the portal and loads the persisted dataset, if any.
    ///
    /// A dataset file that no longer decodes leaves the store empty.
    pub fn open(data_dir: &Path, config: PortalConfig) -> Result<Self, PortalError> {
        let file = DatasetFile::new(data_dir.join(&config.data_file));
        let portal = Self {
            config,
            file,
            store: RecordStore::new(),
            decode_options: DecodeOptions::default(),
            upload_lock: Arc::new(Mutex::new(())),
        };

        match portal.file.load(&portal.decode_options) {
            Ok(Some(decoded)) => {
                info!(
                    path = %portal.file.path().display(),
                    encoding = %decoded.encoding,
                    delimiter = %decoded.delimiter,
                    "loaded persisted dataset"
                );
                portal.store.replace(decoded.dataset);
            }
            Ok(None) => {}
            Err(err @ StoreError::Decode { .. }) => {
                warn!(error = %err, "persisted dataset ignored");
            }
            Err(err) => return Err(err.into()),
        }
        Ok(portal)
    }

    pub fn store(&self) -> &RecordStore {
        &self.store
    }

    pub fn dataset_file(&self) -> &DatasetFile {
        &self.file
    }

    pub fn dataset(&self) -> Option<Arc<Dataset>> {
        self.store.snapshot()
    }

    /// Validates, decodes and persists an upload, then makes it active.
    ///
    /// Nothing is written and the active dataset is kept when validation
    /// or decoding fails.
    pub fn upload(&self, file_name: &str, bytes: &[u8]) -> Result<UploadSummary, PortalError> {
        let decoded = prepare_upload(
            file_name,
            bytes,
            &self.config.allowed_extensions,
            &self.decode_options,
        )?;

        let _guard = self
            .upload_lock
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        self.file.save(bytes)?;

        let summary = UploadSummary {
            file_name: self.config.data_file.clone(),
            rows: decoded.dataset.len(),
            columns: decoded.dataset.header().to_vec(),
            encoding: decoded.encoding,
            delimiter: decoded.delimiter,
        };
        info!(
            upload = file_name,
            rows = summary.rows,
            encoding = %summary.encoding,
            delimiter = %summary.delimiter,
            "upload accepted"
        );
        self.store.replace(decoded.dataset);
        Ok(summary)
    }

    pub fn search(&self, key: &str) -> Result<LookupResult, LookupError> {
        let dataset = self.store.snapshot();
        lookup_with_options(dataset.as_deref(), key, &self.config.lookup_options())
    }

    /// Looks up `key` and renders its certificate.
    pub fn certificate(
        &self,
        key: &str,
        generated_at: NaiveDateTime,
    ) -> Result<Certificate, LookupError> {
        let result = self.search(key)?;
        Ok(Certificate {
            file_name: attachment_file_name(&result.seat_number),
            text: format_certificate_with_options(&result, generated_at, &self.config.certificate),
        })
    }

    pub fn stats(&self) -> Result<DatasetStats, StoreError> {
        let dataset = self.store.snapshot();
        let stats = DatasetStats::new(
            dataset.as_deref(),
            self.file.path().display().to_string(),
            self.file.exists(),
            self.config.sample_size,
        );
        Ok(stats.with_sha256(self.file.sha256()?))
    }

    /// Column resolution for the active dataset.
    pub fn columns(&self) -> Option<ColumnReport> {
        let dataset = self.store.snapshot()?;
        Some(ColumnReport {
            header: dataset.header().to_vec(),
            resolved: resolve_columns(dataset.header()),
        })
    }
}
