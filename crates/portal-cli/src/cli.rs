//! CLI argument definitions for the results portal.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "results-portal",
    version,
    about = "Student results portal - upload a results CSV and look up seat numbers",
    long_about = "Upload a student results CSV and look up individual results by seat number.\n\n\
                  Uploads are accepted in UTF-8, Latin-1, Windows-1252 or Windows-1256,\n\
                  delimited by commas, semicolons or tabs."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,

    /// Include student names and scores in log output.
    #[arg(long = "log-data", global = true)]
    pub log_data: bool,

    /// Directory holding the dataset file and portal.toml.
    #[arg(long = "data-dir", value_name = "DIR", default_value = ".", global = true)]
    pub data_dir: PathBuf,

    /// Config file to use instead of <DATA_DIR>/portal.toml.
    #[arg(long = "config", value_name = "PATH", global = true)]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Validate, decode and store a results file as the active dataset.
    Upload(UploadArgs),

    /// Look up a student by seat number.
    Search(SearchArgs),

    /// Write the plain-text result certificate for a seat number.
    Certificate(CertificateArgs),

    /// Show whether a dataset is loaded and what it contains.
    Stats(JsonArgs),

    /// Show which column was chosen for each role.
    Columns(JsonArgs),
}

#[derive(Parser)]
pub struct UploadArgs {
    /// Results file (.csv or .txt).
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    #[command(flatten)]
    pub output: JsonArgs,
}

#[derive(Parser)]
pub struct SearchArgs {
    /// Seat number to look up.
    #[arg(value_name = "SEAT")]
    pub seat: String,

    /// Override the configured pass threshold.
    #[arg(long = "pass-threshold", value_name = "SCORE")]
    pub pass_threshold: Option<f64>,

    #[command(flatten)]
    pub output: JsonArgs,
}

#[derive(Parser)]
pub struct CertificateArgs {
    /// Seat number to render.
    #[arg(value_name = "SEAT")]
    pub seat: String,

    /// Output file (default: STEM_Result_<SEAT>.txt in the current directory).
    #[arg(long = "output", short = 'o', value_name = "PATH")]
    pub output: Option<PathBuf>,
}

#[derive(Parser)]
pub struct JsonArgs {
    /// Print JSON instead of a table.
    #[arg(long = "json")]
    pub json: bool,
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
