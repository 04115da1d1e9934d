//! JSON bodies returned to callers of the upload and search operations.

use serde::Serialize;

/// Outcome of an upload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UploadResponse {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filename: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rows: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub columns: Option<Vec<String>>,
}

impl UploadResponse {
    pub fn accepted(filename: impl Into<String>, rows: usize, columns: Vec<String>) -> Self {
        Self {
            success: true,
            message: Some("CSV file uploaded and processed successfully".to_string()),
            error: None,
            filename: Some(filename.into()),
            rows: Some(rows),
            columns: Some(columns),
        }
    }

    pub fn rejected(error: impl ToString) -> Self {
        Self {
            success: false,
            message: None,
            error: Some(error.to_string()),
            filename: None,
            rows: None,
            columns: None,
        }
    }
}

/// `{ "error": ... }` body for failed searches.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl ErrorResponse {
    pub fn new(error: impl ToString) -> Self {
        Self {
            error: error.to_string(),
        }
    }
}
