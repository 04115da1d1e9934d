//! CLI library components for the results portal.

#![allow(missing_docs)]

pub mod commands;
pub mod logging;
pub mod output;
