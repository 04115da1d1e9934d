use serde::Serialize;

use crate::role::ColumnRole;

/// Finds the first header containing any of `keywords`.
///
/// Headers are scanned in order and each header is tested against every
/// keyword before moving on, so a later header matching an earlier keyword
/// never beats an earlier header matching a later one. Matching is done on
/// the lower-cased header name; keywords are expected in lower case.
pub fn match_column<'a, H, K>(header: &'a [H], keywords: &[K]) -> Option<&'a str>
where
    H: AsRef<str>,
    K: AsRef<str>,
{
    header
        .iter()
        .map(H::as_ref)
        .find(|name| {
            let lowered = name.to_lowercase();
            keywords
                .iter()
                .any(|keyword| lowered.contains(keyword.as_ref()))
        })
}

/// Like [`match_column`], but falls back to the first header.
///
/// Returns `None` only for an empty header.
pub fn resolve_column<'a, H, K>(header: &'a [H], keywords: &[K]) -> Option<&'a str>
where
    H: AsRef<str>,
    K: AsRef<str>,
{
    match_column(header, keywords).or_else(|| header.first().map(H::as_ref))
}

/// Columns chosen for every role of a dataset header.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ResolvedColumns {
    /// Lookup key column; falls back to the first column.
    pub seat: Option<String>,
    pub name: Option<String>,
    pub score: Option<String>,
    pub status: Option<String>,
}

impl ResolvedColumns {
    pub fn get(&self, role: ColumnRole) -> Option<&str> {
        match role {
            ColumnRole::Seat => self.seat.as_deref(),
            ColumnRole::Name => self.name.as_deref(),
            ColumnRole::Score => self.score.as_deref(),
            ColumnRole::Status => self.status.as_deref(),
        }
    }
}

/// Resolves every role against `header`.
///
/// Only the seat role falls back to the first column. The other roles stay
/// unresolved when no header matches, so a missing status or score column
/// is never confused with the key column.
pub fn resolve_columns<H: AsRef<str>>(header: &[H]) -> ResolvedColumns {
    let matched = |role: ColumnRole| match_column(header, role.keywords()).map(str::to_string);
    ResolvedColumns {
        seat: resolve_column(header, ColumnRole::Seat.keywords()).map(str::to_string),
        name: matched(ColumnRole::Name),
        score: matched(ColumnRole::Score),
        status: matched(ColumnRole::Status),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EXAM_HEADER: &[&str] = &["Seating No", "Arabic Name", "Total", "Result"];

    #[test]
    fn resolves_seat_column() {
        assert_eq!(
            resolve_column(EXAM_HEADER, ColumnRole::Seat.keywords()),
            Some("Seating No")
        );
    }

    #[test]
    fn falls_back_to_first_header() {
        let header = ["Foo", "Bar"];
        assert_eq!(resolve_column::<_, &str>(&header, &[]), Some("Foo"));
        assert_eq!(resolve_column(&header, &["zzz"]), Some("Foo"));
        assert_eq!(match_column(&header, &["zzz"]), None);
    }

    #[test]
    fn empty_header_resolves_to_none() {
        let header: [&str; 0] = [];
        assert_eq!(resolve_column(&header, ColumnRole::Seat.keywords()), None);
    }

    #[test]
    fn header_order_beats_keyword_order() {
        // "number" is a later seat keyword than "seat", but its header comes first.
        let header = ["Phone Number", "Seat"];
        assert_eq!(
            resolve_column(&header, ColumnRole::Seat.keywords()),
            Some("Phone Number")
        );
    }

    #[test]
    fn matching_is_case_insensitive_substring() {
        let header = ["STUDENT_NAME", "TOTAL_MARKS"];
        assert_eq!(
            match_column(&header, ColumnRole::Name.keywords()),
            Some("STUDENT_NAME")
        );
        assert_eq!(
            match_column(&header, ColumnRole::Score.keywords()),
            Some("TOTAL_MARKS")
        );
    }

    #[test]
    fn matches_arabic_headers() {
        let header = ["رقم الجلوس", "اسم الطالب", "الدرجة الكلية", "النتيجة"];
        let resolved = resolve_columns(&header);
        assert_eq!(resolved.seat.as_deref(), Some("رقم الجلوس"));
        assert_eq!(resolved.name.as_deref(), Some("اسم الطالب"));
        assert_eq!(resolved.status.as_deref(), Some("النتيجة"));
    }

    #[test]
    fn resolves_all_roles() {
        let resolved = resolve_columns(EXAM_HEADER);
        assert_eq!(resolved.get(ColumnRole::Seat), Some("Seating No"));
        assert_eq!(resolved.get(ColumnRole::Name), Some("Arabic Name"));
        assert_eq!(resolved.get(ColumnRole::Score), Some("Total"));
        assert_eq!(resolved.get(ColumnRole::Status), Some("Result"));
    }

    #[test]
    fn optional_roles_do_not_fall_back() {
        let resolved = resolve_columns(&["Code", "Label"]);
        assert_eq!(resolved.seat.as_deref(), Some("Code"));
        assert_eq!(resolved.name, None);
        assert_eq!(resolved.score, None);
        assert_eq!(resolved.status, None);
    }

    #[test]
    fn resolved_columns_serialize() {
        let json = serde_json::to_value(resolve_columns(EXAM_HEADER)).unwrap();
        assert_eq!(json["seat"], "Seating No");
        assert_eq!(json["status"], "Result");
    }
}
