#![deny(unsafe_code)]

//! Column role resolution.
//!
//! Uploaded files use whatever headers the exporting spreadsheet had
//! ("Seating No", "Arabic Name", "درجة", ...). This crate picks the column
//! that plays each semantic role by ordered keyword substring matching.

mod resolve;
mod role;

pub use resolve::{ResolvedColumns, match_column, resolve_column, resolve_columns};
pub use role::ColumnRole;
