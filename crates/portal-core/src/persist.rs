//! The single on-disk copy of the last accepted upload.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use portal_ingest::{DecodeOptions, DecodedDataset, decode_detailed};
use tracing::debug;

use crate::error::StoreError;
use crate::hash::sha256_hex;

/// Location of the persisted results file.
///
/// The file holds the uploaded bytes exactly as received; it is decoded
/// again on load.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DatasetFile {
    path: PathBuf,
}

impl DatasetFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn exists(&self) -> bool {
        self.path.is_file()
    }

    /// Overwrites the file with `bytes`.
    ///
    /// Bytes are written to a sibling temporary file first and renamed into
    /// place, so a reader never sees a half-written file.
    pub fn save(&self, bytes: &[u8]) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(|e| StoreError::io(parent, e))?;
        }
        let temp = self.temp_path();
        std::fs::write(&temp, bytes).map_err(|e| StoreError::io(&temp, e))?;
        std::fs::rename(&temp, &self.path).map_err(|e| StoreError::io(&self.path, e))?;
        debug!(path = %self.path.display(), bytes = bytes.len(), "dataset file written");
        Ok(())
    }

    /// Reads the raw bytes, or `None` when no file has been saved yet.
    pub fn read_bytes(&self) -> Result<Option<Vec<u8>>, StoreError> {
        match std::fs::read(&self.path) {
            Ok(bytes) => Ok(Some(bytes)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(StoreError::io(&self.path, e)),
        }
    }

    /// Reads and decodes the file.
    pub fn load(&self, options: &DecodeOptions) -> Result<Option<DecodedDataset>, StoreError> {
        let Some(bytes) = self.read_bytes()? else {
            return Ok(None);
        };
        decode_detailed(&bytes, options)
            .map(Some)
            .map_err(|source| StoreError::Decode {
                path: self.path.clone(),
                source,
            })
    }

    /// SHA-256 of the file contents, if the file exists.
    pub fn sha256(&self) -> Result<Option<String>, StoreError> {
        Ok(self.read_bytes()?.map(|bytes| sha256_hex(&bytes)))
    }

    fn temp_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(|name| name.to_os_string())
            .unwrap_or_default();
        name.push(".tmp");
        self.path.with_file_name(name)
    }
}
