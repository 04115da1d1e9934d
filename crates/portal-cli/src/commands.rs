use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::NaiveDateTime;
use portal_core::{
    CONFIG_FILE_NAME, ColumnReport, DatasetStats, LookupError, Portal, PortalConfig,
    UploadSummary,
};
use portal_model::LookupResult;
use tracing::{debug, info, info_span};

use crate::logging::redact_value;

/// Exit status for a seat number that is not in the dataset.
pub const EXIT_NOT_FOUND: i32 = 2;

/// Loads `config`, or `<data_dir>/portal.toml` when it exists.
pub fn load_config(data_dir: &Path, config: Option<&Path>) -> Result<PortalConfig> {
    let loaded = match config {
        Some(path) => PortalConfig::load(path),
        None => PortalConfig::load_or_default(&data_dir.join(CONFIG_FILE_NAME)),
    };
    loaded.context("load portal config")
}

pub fn open_portal(data_dir: &Path, config: PortalConfig) -> Result<Portal> {
    Portal::open(data_dir, config)
        .with_context(|| format!("open data directory {}", data_dir.display()))
}

pub fn run_upload(portal: &Portal, file: &Path) -> Result<UploadSummary> {
    let span = info_span!("upload", file = %file.display());
    let _guard = span.enter();
    let bytes = std::fs::read(file).with_context(|| format!("read {}", file.display()))?;
    let file_name = file
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default();
    debug!(bytes = bytes.len(), "read upload");
    let summary = portal.upload(&file_name, &bytes)?;
    info!(
        stored = %portal.dataset_file().path().display(),
        rows = summary.rows,
        "dataset stored"
    );
    Ok(summary)
}

pub fn run_search(portal: &Portal, seat: &str) -> Result<LookupResult> {
    let result = portal.search(seat)?;
    debug!(
        seat = redact_value(&result.seat_number),
        name = redact_value(&result.name),
        score = redact_value(&result.total_score),
        rank = result.rank,
        "student found"
    );
    Ok(result)
}

/// Writes the certificate for `seat` and returns the path written.
///
/// Without `output` the file lands in the current directory under its
/// attachment name.
pub fn run_certificate(
    portal: &Portal,
    seat: &str,
    output: Option<&Path>,
    generated_at: NaiveDateTime,
) -> Result<PathBuf> {
    let certificate = portal.certificate(seat, generated_at)?;
    let path = output.map_or_else(|| PathBuf::from(&certificate.file_name), Path::to_path_buf);
    std::fs::write(&path, &certificate.text)
        .with_context(|| format!("write certificate {}", path.display()))?;
    info!(path = %path.display(), seat = redact_value(seat), "certificate written");
    Ok(path)
}

pub fn run_stats(portal: &Portal) -> Result<DatasetStats> {
    portal.stats().context("read dataset file")
}

pub fn run_columns(portal: &Portal) -> Result<ColumnReport> {
    Ok(portal.columns().ok_or(LookupError::NoDataset)?)
}

/// Maps a command failure to the process exit status.
pub fn exit_code(error: &anyhow::Error) -> i32 {
    match error.downcast_ref::<LookupError>() {
        Some(LookupError::NotFound { .. }) => EXIT_NOT_FOUND,
        _ => 1,
    }
}
