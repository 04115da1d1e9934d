//! Fixed-layout plain-text certificate.

use chrono::NaiveDateTime;
use portal_model::{LookupResult, Status};
use serde::{Deserialize, Serialize};

const WIDTH: usize = 60;
const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Static text printed on every certificate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CertificateOptions {
    pub title: String,
    pub academic_year: String,
    pub exam_name: String,
}

impl Default for CertificateOptions {
    fn default() -> Self {
        Self {
            title: "STEM G12 Official Results".to_string(),
            academic_year: "2024-2025".to_string(),
            exam_name: "STEM G12 Final Results".to_string(),
        }
    }
}

/// Renders a certificate with the default options.
pub fn format_certificate(result: &LookupResult, generated_at: NaiveDateTime) -> String {
    format_certificate_with_options(result, generated_at, &CertificateOptions::default())
}

/// Renders a certificate for `result`.
///
/// Output depends only on the arguments. The congratulatory paragraph is
/// printed for [`Status::Pass`] and the advisory paragraph for
/// [`Status::Fail`]; any other status prints neither.
pub fn format_certificate_with_options(
    result: &LookupResult,
    generated_at: NaiveDateTime,
    options: &CertificateOptions,
) -> String {
    let heavy = "=".repeat(WIDTH);
    let light = "-".repeat(WIDTH);
    let mut lines = Vec::new();

    lines.push(heavy.clone());
    lines.push(centered(&options.title));
    lines.push(centered("OFFICIAL RESULT CERTIFICATE"));
    lines.push(heavy.clone());
    lines.push(String::new());

    lines.push("STUDENT INFORMATION".to_string());
    lines.push(light.clone());
    lines.push(format!("Seat Number : {}", result.seat_number));
    lines.push(format!("Name        : {}", result.name));
    lines.push(format!(
        "Total Score : {} / {}",
        result.total_score, result.max_score
    ));
    lines.push(format!("Status      : {}", result.status));
    lines.push(format!("Rank        : #{}", result.rank));
    lines.push(String::new());

    lines.push("CERTIFICATE DETAILS".to_string());
    lines.push(light);
    lines.push(format!(
        "Generated On  : {}",
        generated_at.format(TIMESTAMP_FORMAT)
    ));
    lines.push(format!("Academic Year : {}", options.academic_year));
    lines.push(format!("Exam          : {}", options.exam_name));
    lines.push(String::new());

    match result.status {
        Status::Pass => {
            lines.push("CONGRATULATIONS!".to_string());
            lines.push("The student has successfully passed the examination.".to_string());
            lines.push(String::new());
        }
        Status::Fail => {
            lines.push("The student did not meet the passing requirements.".to_string());
            lines.push("Please contact academic advisor for guidance.".to_string());
            lines.push(String::new());
        }
        Status::Unknown | Status::Other(_) => {}
    }

    lines.push(heavy.clone());
    lines.push(centered("STEM Results Portal - Official Document"));
    lines.push(centered("This certificate is computer generated and valid."));
    lines.push(heavy);

    let mut text = lines.join("\n");
    text.push('\n');
    text
}

/// Download file name for a seat number's certificate.
///
/// Characters other than ASCII letters, digits, `-` and `_` are replaced
/// with `_`.
pub fn attachment_file_name(seat_number: &str) -> String {
    let seat = seat_number.trim();
    let safe: String = if seat.is_empty() {
        "unknown".to_string()
    } else {
        seat.chars()
            .map(|ch| {
                if ch.is_ascii_alphanumeric() || ch == '-' || ch == '_' {
                    ch
                } else {
                    '_'
                }
            })
            .collect()
    };
    format!("STEM_Result_{safe}.txt")
}

/// Left-pads `text` so it sits in the middle of the banner width.
fn centered(text: &str) -> String {
    let len = text.chars().count();
    let pad = WIDTH.saturating_sub(len) / 2;
    format!("{}{text}", " ".repeat(pad))
}
