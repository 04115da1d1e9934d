use std::fmt;

use serde::{Deserialize, Serialize};

const SEAT_KEYWORDS: &[&str] = &["seat", "id", "seating", "number", "رقم"];
const NAME_KEYWORDS: &[&str] = &["name", "arabic", "student", "اسم", "الطالب"];
const SCORE_KEYWORDS: &[&str] = &["total", "score", "degree", "marks", "درجة"];
const STATUS_KEYWORDS: &[&str] = &["status", "result", "pass", "نتيجة"];

/// Semantic role a dataset column can play.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColumnRole {
    /// Seat number, the lookup key.
    Seat,
    Name,
    /// Total score.
    Score,
    /// Explicit pass/fail (or other) outcome.
    Status,
}

impl ColumnRole {
    pub const ALL: [ColumnRole; 4] = [Self::Seat, Self::Name, Self::Score, Self::Status];

    /// Lower-case keywords identifying this role, in preference order.
    #[must_use]
    pub const fn keywords(self) -> &'static [&'static str] {
        match self {
            Self::Seat => SEAT_KEYWORDS,
            Self::Name => NAME_KEYWORDS,
            Self::Score => SCORE_KEYWORDS,
            Self::Status => STATUS_KEYWORDS,
        }
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Seat => "Seat number",
            Self::Name => "Name",
            Self::Score => "Total score",
            Self::Status => "Status",
        }
    }
}

impl fmt::Display for ColumnRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
