//! Dataset presence and shape summary.

use portal_model::{Dataset, Record};
use serde::Serialize;

/// What the portal currently holds.
///
/// `columns` and `sample_data` are present only when a dataset is loaded.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DatasetStats {
    pub has_data: bool,
    pub total_students: usize,
    pub csv_file_path: String,
    pub file_exists: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub columns: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sample_data: Option<Vec<Record>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sha256: Option<String>,
}

impl DatasetStats {
    pub fn new(
        dataset: Option<&Dataset>,
        csv_file_path: String,
        file_exists: bool,
        sample_size: usize,
    ) -> Self {
        let dataset = dataset.filter(|dataset| !dataset.is_empty());
        Self {
            has_data: dataset.is_some(),
            total_students: dataset.map_or(0, Dataset::len),
            csv_file_path,
            file_exists,
            columns: dataset.map(|dataset| dataset.header().to_vec()),
            sample_data: dataset.map(|dataset| dataset.sample(sample_size).to_vec()),
            sha256: None,
        }
    }

    pub fn with_sha256(mut self, sha256: Option<String>) -> Self {
        self.sha256 = sha256;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dataset(rows: usize) -> Dataset {
        let records = (0..rows)
            .map(|i| {
                let seat = (100 + i).to_string();
                [("Seat", seat.as_str()), ("Name", "x")].into_iter().collect()
            })
            .collect();
        Dataset::new(vec!["Seat".into(), "Name".into()], records)
    }

    #[test]
    fn empty_stats_omit_columns() {
        let stats = DatasetStats::new(None, "data/results.csv".into(), false, 3);
        let json = serde_json::to_value(&stats).unwrap();
        assert_eq!(json["hasData"], false);
        assert_eq!(json["totalStudents"], 0);
        assert_eq!(json["csvFilePath"], "data/results.csv");
        assert_eq!(json["fileExists"], false);
        assert!(json.get("columns").is_none());
        assert!(json.get("sampleData").is_none());
        assert!(json.get("sha256").is_none());
    }

    #[test]
    fn sample_is_limited() {
        let ds = dataset(5);
        let stats = DatasetStats::new(Some(&ds), "results.csv".into(), true, 3)
            .with_sha256(Some("abc".into()));
        assert!(stats.has_data);
        assert_eq!(stats.total_students, 5);
        assert_eq!(stats.columns.as_deref(), Some(&["Seat".to_string(), "Name".to_string()][..]));
        assert_eq!(stats.sample_data.as_ref().map(Vec::len), Some(3));

        let json = serde_json::to_value(&stats).unwrap();
        assert_eq!(json["sampleData"][0]["Seat"], "100");
        assert_eq!(json["sha256"], "abc");
    }
}
