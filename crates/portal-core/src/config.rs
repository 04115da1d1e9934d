//! Portal settings loaded from `portal.toml`.

use std::path::Path;

use portal_ingest::DEFAULT_ALLOWED_EXTENSIONS;
use portal_model::MAX_SCORE;
use portal_report::CertificateOptions;
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::lookup::{DEFAULT_PASS_THRESHOLD, LookupOptions};

/// Default config file name looked up in the data directory.
pub const CONFIG_FILE_NAME: &str = "portal.toml";

/// Default name of the persisted dataset file.
pub const DEFAULT_DATA_FILE: &str = "results.csv";

/// Number of records shown as a sample in stats.
pub const DEFAULT_SAMPLE_SIZE: usize = 3;

/// Portal settings. Every field has a default, so an empty file is valid.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PortalConfig {
    /// Dataset file name, relative to the data directory.
    pub data_file: String,
    pub allowed_extensions: Vec<String>,
    pub pass_threshold: f64,
    pub max_score: u32,
    pub sample_size: usize,
    pub certificate: CertificateOptions,
}

impl Default for PortalConfig {
    fn default() -> Self {
        Self {
            data_file: DEFAULT_DATA_FILE.to_string(),
            allowed_extensions: DEFAULT_ALLOWED_EXTENSIONS
                .iter()
                .map(|ext| ext.to_string())
                .collect(),
            pass_threshold: DEFAULT_PASS_THRESHOLD,
            max_score: MAX_SCORE,
            sample_size: DEFAULT_SAMPLE_SIZE,
            certificate: CertificateOptions::default(),
        }
    }
}

impl PortalConfig {
    /// Loads settings from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml(&contents).map_err(|source| ConfigError::Toml {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Loads settings from `path` when it exists, otherwise the defaults.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.is_file() {
            Self::load(path)
        } else {
            Ok(Self::default())
        }
    }

    pub fn from_toml(contents: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(contents)
    }

    pub fn lookup_options(&self) -> LookupOptions {
        LookupOptions {
            pass_threshold: self.pass_threshold,
            max_score: self.max_score,
        }
    }
}
