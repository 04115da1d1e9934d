//! Results file ingestion.
//!
//! Uploaded spreadsheets arrive as raw bytes of unknown origin. This crate
//! turns them into a [`Dataset`](portal_model::Dataset) by trying a fixed
//! matrix of text encodings and field delimiters until one yields a usable
//! header and at least one data row.
//!
//! # Features
//!
//! - **Tolerant decoding**: UTF-8, Latin-1, Windows-1252 and Windows-1256
//!   input, comma/semicolon/tab delimited
//! - **Upload validation**: file extension allow-list
//!
//! # Example
//!
//! ```ignore
//! use portal_ingest::decode;
//!
//! let dataset = decode(b"Seat,Name,Total\n101,Ali,300\n")?;
//! assert_eq!(dataset.len(), 1);
//! ```

mod csv;
mod decode;
mod encoding;
mod error;
mod upload;

// === Error Types ===
pub use error::{DecodeError, UploadError};

// === Decoding ===
pub use csv::Delimiter;
pub use decode::{DecodeOptions, DecodedDataset, decode, decode_detailed, decode_with_options};
pub use encoding::TextEncoding;

// === Upload Validation ===
pub use upload::{DEFAULT_ALLOWED_EXTENSIONS, check_extension, prepare_upload};
