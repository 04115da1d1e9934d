//! Results portal CLI.

use std::io::{self, IsTerminal};

use anyhow::Result;
use clap::{ColorChoice, Parser};
use portal_cli::commands::{
    exit_code, load_config, open_portal, run_certificate, run_columns, run_search, run_stats,
    run_upload,
};
use portal_cli::logging::{LogConfig, LogFormat, init_logging};
use portal_cli::output::{
    columns_table, result_table, sample_table, stats_table, to_json, upload_table,
};
use portal_core::{ErrorResponse, UploadResponse};
use tracing::level_filters::LevelFilter;

mod cli;

use crate::cli::{Cli, Command, LogFormatArg, LogLevelArg};

fn main() {
    let cli = Cli::parse();
    cli.color.write_global();
    let log_config = log_config_from_cli(&cli);
    if let Err(error) = init_logging(&log_config) {
        eprintln!("error: failed to initialize logging: {error}");
        std::process::exit(1);
    }
    let exit_code = match run(&cli) {
        Ok(()) => 0,
        Err(error) => {
            eprintln!("error: {error:#}");
            exit_code(&error)
        }
    };
    std::process::exit(exit_code);
}

fn run(cli: &Cli) -> Result<()> {
    let mut config = load_config(&cli.data_dir, cli.config.as_deref())?;
    if let Command::Search(args) = &cli.command
        && let Some(threshold) = args.pass_threshold
    {
        config.pass_threshold = threshold;
    }
    let portal = open_portal(&cli.data_dir, config)?;

    match &cli.command {
        Command::Upload(args) => match run_upload(&portal, &args.file) {
            Ok(summary) if args.output.json => println!("{}", to_json(&summary.to_response())?),
            Ok(summary) => println!("{}", upload_table(&summary)),
            Err(error) => {
                if args.output.json {
                    println!("{}", to_json(&UploadResponse::rejected(&error))?);
                }
                return Err(error);
            }
        },
        Command::Search(args) => match run_search(&portal, &args.seat) {
            Ok(result) if args.output.json => println!("{}", to_json(&result)?),
            Ok(result) => println!("{}", result_table(&result)),
            Err(error) => {
                if args.output.json {
                    println!("{}", to_json(&ErrorResponse::new(&error))?);
                }
                return Err(error);
            }
        },
        Command::Certificate(args) => {
            let generated_at = chrono::Local::now().naive_local();
            let path = run_certificate(&portal, &args.seat, args.output.as_deref(), generated_at)?;
            println!("Certificate written to {}", path.display());
        }
        Command::Stats(args) => {
            let stats = run_stats(&portal)?;
            if args.json {
                println!("{}", to_json(&stats)?);
            } else {
                println!("{}", stats_table(&stats));
                if let Some(sample) = sample_table(&stats) {
                    println!("{sample}");
                }
            }
        }
        Command::Columns(args) => {
            let report = run_columns(&portal)?;
            if args.json {
                println!("{}", to_json(&report)?);
            } else {
                println!("Header: {}", report.header.join(", "));
                println!("{}", columns_table(&report));
            }
        }
    }
    Ok(())
}

/// Build logging configuration from CLI flags with consistent precedence.
fn log_config_from_cli(cli: &Cli) -> LogConfig {
    let mut config = LogConfig {
        level_filter: cli.verbosity.tracing_level_filter(),
        ..LogConfig::default()
    };
    config.use_env_filter = !(cli.verbosity.is_present() || cli.log_level.is_some());
    if let Some(level) = cli.log_level {
        config.level_filter = match level {
            LogLevelArg::Error => LevelFilter::ERROR,
            LogLevelArg::Warn => LevelFilter::WARN,
            LogLevelArg::Info => LevelFilter::INFO,
            LogLevelArg::Debug => LevelFilter::DEBUG,
            LogLevelArg::Trace => LevelFilter::TRACE,
        };
    }
    config.format = match cli.log_format {
        LogFormatArg::Pretty => LogFormat::Pretty,
        LogFormatArg::Compact => LogFormat::Compact,
        LogFormatArg::Json => LogFormat::Json,
    };
    config.log_file = cli.log_file.clone();
    config.log_data = cli.log_data;
    config.with_ansi = match cli.color.color {
        ColorChoice::Always => true,
        ColorChoice::Never => false,
        ColorChoice::Auto => cli.log_file.is_none() && io::stderr().is_terminal(),
    };
    config
}
