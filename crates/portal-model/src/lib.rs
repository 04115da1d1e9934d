//! Data model shared by the results portal crates.
//!
//! - [`Record`]: one CSV row as an ordered column → value mapping
//! - [`Dataset`]: the header plus every stored record, in upload order
//! - [`LookupResult`]: the formatted answer to a seat number search

pub mod dataset;
pub mod lookup;
pub mod record;

pub use dataset::Dataset;
pub use lookup::{LookupResult, MAX_SCORE, Status};
pub use record::Record;
