use std::fmt;

use serde::{Serialize, Serializer};

use crate::record::Record;

/// Maximum attainable total score reported with every result.
pub const MAX_SCORE: u32 = 500;

/// Pass/fail outcome of a student record.
///
/// `Other` carries a verbatim (upper-cased) value taken from a status
/// column, e.g. `WITHDRAWN` or `ABSENT`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Status {
    Pass,
    Fail,
    Unknown,
    Other(String),
}

impl Status {
    /// Maps a status column value onto a status, upper-casing it first.
    pub fn from_column_value(value: &str) -> Self {
        match value.trim().to_uppercase().as_str() {
            "PASS" => Self::Pass,
            "FAIL" => Self::Fail,
            "UNKNOWN" => Self::Unknown,
            other => Self::Other(other.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Self::Pass => "PASS",
            Self::Fail => "FAIL",
            Self::Unknown => "UNKNOWN",
            Self::Other(value) => value,
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for Status {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

/// A matched student record, formatted for display.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LookupResult {
    pub seat_number: String,
    pub name: String,
    pub total_score: String,
    pub max_score: u32,
    pub status: Status,
    /// 1-based position of the record in upload order.
    pub rank: usize,
    /// 0-based position of the record in upload order.
    pub index: usize,
    #[serde(rename = "allData")]
    pub raw_record: Record,
}
