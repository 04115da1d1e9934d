//! Upload acceptance checks.

use std::path::Path;

use tracing::warn;

use crate::decode::{DecodeOptions, DecodedDataset, decode_detailed};
use crate::error::UploadError;

/// Extensions accepted for uploaded results files.
pub const DEFAULT_ALLOWED_EXTENSIONS: &[&str] = &["csv", "txt"];

/// Checks that `file_name` ends in one of `allowed` (case-insensitive).
pub fn check_extension<S: AsRef<str>>(file_name: &str, allowed: &[S]) -> Result<(), UploadError> {
    let extension = Path::new(file_name).extension().and_then(|ext| ext.to_str());
    let accepted = extension.is_some_and(|ext| {
        allowed
            .iter()
            .any(|candidate| candidate.as_ref().eq_ignore_ascii_case(ext))
    });
    if accepted {
        return Ok(());
    }
    warn!(file_name, "rejected upload with unsupported extension");
    Err(UploadError::UnsupportedExtension {
        file_name: file_name.to_string(),
        allowed: describe_allowed(allowed),
    })
}

/// Validates and decodes an uploaded file without touching any store.
pub fn prepare_upload<S: AsRef<str>>(
    file_name: &str,
    bytes: &[u8],
    allowed: &[S],
    options: &DecodeOptions,
) -> Result<DecodedDataset, UploadError> {
    check_extension(file_name, allowed)?;
    Ok(decode_detailed(bytes, options)?)
}

fn describe_allowed<S: AsRef<str>>(allowed: &[S]) -> String {
    let names: Vec<String> = allowed
        .iter()
        .map(|ext| ext.as_ref().to_ascii_uppercase())
        .collect();
    match names.as_slice() {
        [] => "no".to_string(),
        [only] => only.clone(),
        [rest @ .., last] => format!("{} and {last}", rest.join(", ")),
    }
}
