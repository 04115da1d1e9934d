//! Integration tests for certificate rendering.

use chrono::{NaiveDate, NaiveDateTime};
use portal_model::{LookupResult, MAX_SCORE, Record, Status};
use portal_report::{CertificateOptions, format_certificate, format_certificate_with_options};

const CONGRATULATIONS: &str = "CONGRATULATIONS!";
const NOTICE: &str = "The student did not meet the passing requirements.";
const ADVICE: &str = "Please contact academic advisor for guidance.";

fn generated_at() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2025, 7, 14)
        .unwrap()
        .and_hms_opt(9, 30, 5)
        .unwrap()
}

fn test_result(status: Status) -> LookupResult {
    let raw: Record = [("Seat", "101"), ("Name", "Ali Hassan"), ("Total", "412")]
        .into_iter()
        .collect();
    LookupResult {
        seat_number: "101".to_string(),
        name: "Ali Hassan".to_string(),
        total_score: "412".to_string(),
        max_score: MAX_SCORE,
        status,
        rank: 1,
        index: 0,
        raw_record: raw,
    }
}

#[test]
fn test_pass_certificate_snapshot() {
    let text = format_certificate(&test_result(Status::Pass), generated_at());
    insta::assert_snapshot!(text);
}

#[test]
fn test_pass_includes_only_congratulations() {
    let text = format_certificate(&test_result(Status::Pass), generated_at());
    assert!(text.contains(CONGRATULATIONS));
    assert!(!text.contains(NOTICE));
}

#[test]
fn test_fail_includes_only_notice() {
    let text = format_certificate(&test_result(Status::Fail), generated_at());
    assert!(text.contains(NOTICE));
    assert!(text.contains(ADVICE));
    assert!(!text.contains(CONGRATULATIONS));
}

#[test]
fn test_other_statuses_include_neither_paragraph() {
    for status in [Status::Unknown, Status::Other("WITHDRAWN".to_string())] {
        let text = format_certificate(&test_result(status.clone()), generated_at());
        assert!(!text.contains(CONGRATULATIONS), "status {status}");
        assert!(!text.contains(NOTICE), "status {status}");
        assert!(text.contains(&format!("Status      : {status}")));
    }
}

#[test]
fn test_certificate_contains_student_information() {
    let text = format_certificate(&test_result(Status::Fail), generated_at());
    assert!(text.contains("STUDENT INFORMATION"));
    assert!(text.contains("Seat Number : 101"));
    assert!(text.contains("Name        : Ali Hassan"));
    assert!(text.contains("Total Score : 412 / 500"));
    assert!(text.contains("Rank        : #1"));
    assert!(text.contains("CERTIFICATE DETAILS"));
    assert!(text.contains("Generated On  : 2025-07-14 09:30:05"));
}

#[test]
fn test_default_wording() {
    let text = format_certificate(&test_result(Status::Pass), generated_at());
    assert!(text.contains("Exam          : STEM G12 Final Results"));
    assert!(text.contains("The student has successfully passed the examination."));
    assert!(text.contains("STEM Results Portal - Official Document"));
    assert!(text.contains("This certificate is computer generated and valid."));
}

#[test]
fn test_certificate_is_deterministic() {
    let result = test_result(Status::Pass);
    assert_eq!(
        format_certificate(&result, generated_at()),
        format_certificate(&result, generated_at())
    );
}

#[test]
fn test_custom_options() {
    let options = CertificateOptions {
        title: "Spring Session Results".to_string(),
        academic_year: "2025-2026".to_string(),
        exam_name: "Midterm".to_string(),
    };
    let text =
        format_certificate_with_options(&test_result(Status::Pass), generated_at(), &options);
    assert!(text.contains("Spring Session Results"));
    assert!(text.contains("Academic Year : 2025-2026"));
    assert!(text.contains("Exam          : Midterm"));
}
