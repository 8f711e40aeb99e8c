//! Memscan CLI - Command line interface
//!
//! Scans corrupted memory dumps for `mul(X,Y)` instructions and prints the
//! sum of their products.

use clap::Parser;
use std::path::PathBuf;
use std::process;
use thiserror::Error;
use tracing::{debug, info};

mod config;
mod logging;
mod platform;

use crate::config::LogConfig;
use crate::logging::LogFormat;
use memscan_api::memscan_config::{LogLevel, ProjectConfig};
use memscan_api::{
    init_config, load_project, scan_file, FileReport, MemscanError, NativeFileSystem, RunConfig,
    RunReport,
};

const CLI_TARGET: &str = "memscan::cli";

#[derive(Parser, Debug)]
#[command(
    name = "memscan",
    about = "Scan corrupted memory for mul(X,Y) instructions and sum their products",
    version
)]
struct Cli {
    /// Input files, each scanned independently
    #[arg(value_name = "INPUT")]
    inputs: Vec<PathBuf>,

    /// Project file (JSON) supplying inputs and options
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// silent, error, warn, info, debug or trace
    #[arg(short, long, value_name = "LEVEL", value_parser = parse_log_level)]
    log_level: Option<LogLevel>,

    #[arg(long, value_enum, default_value_t = LogFormat::Compact)]
    log_format: LogFormat,

    /// Also append logs to this file
    #[arg(long, value_name = "FILE")]
    log_file: Option<PathBuf>,

    /// Print every extracted token with its position
    #[arg(long)]
    show_tokens: bool,

    /// Print the report as JSON
    #[arg(long)]
    json: bool,
}

#[derive(Error, Debug)]
enum CliError {
    #[error(transparent)]
    Api(#[from] MemscanError),

    #[error("Cannot open log file '{path}': {source}")]
    LogFile {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Cannot encode report: {0}")]
    Json(#[from] serde_json::Error),
}

fn parse_log_level(s: &str) -> Result<LogLevel, String> {
    LogLevel::parse(s).ok_or_else(|| format!("unknown log level '{s}'"))
}

fn main() {
    let cli = Cli::parse();
    let json = cli.json;

    if let Err(e) = run(cli) {
        match &e {
            CliError::Api(api) => platform::print_error(api, json),
            other => eprintln!("Error: {other}"),
        }
        process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), CliError> {
    let fs = NativeFileSystem::new();

    let project = cli
        .config
        .as_deref()
        .map(|path| load_project(&fs, path))
        .transpose()?;

    let config = build_run_config(&cli, project.as_ref().map(|p| &p.config));
    let inputs = if cli.inputs.is_empty() {
        project.map(|p| p.inputs).unwrap_or_default()
    } else {
        cli.inputs.clone()
    };

    logging::init_with_file(
        &LogConfig::from_run_config(&config),
        cli.log_format,
        cli.log_file.as_deref(),
    )
    .map_err(|source| CliError::LogFile {
        path: cli
            .log_file
            .as_deref()
            .map(|p| p.display().to_string())
            .unwrap_or_default(),
        source,
    })?;
    debug!(target: CLI_TARGET, ?config, inputs = inputs.len(), "Starting run");

    // Initialize API config (global singleton for convenience)
    init_config(config);
    let config = memscan_api::get_config();

    if inputs.is_empty() {
        return Err(MemscanError::NoInput.into());
    }

    let mut files = Vec::with_capacity(inputs.len());
    for path in inputs {
        if !config.json {
            platform::print_reading(&path);
        }
        let output = scan_file(&fs, &path, config)?;
        if !config.json {
            platform::print_file_result(&output, config.show_tokens);
        }
        files.push(FileReport { path, output });
    }

    let report = RunReport::new(files);
    info!(target: CLI_TARGET, total = report.total, "Done");

    if config.json {
        platform::print_json_report(&report)?;
    } else if report.files.len() > 1 {
        platform::print_total(&report);
    }
    Ok(())
}

/// CLI flags override the project file
fn build_run_config(cli: &Cli, project: Option<&ProjectConfig>) -> RunConfig {
    let mut config = project.map(RunConfig::from_project).unwrap_or_default();
    config.show_tokens |= cli.show_tokens;
    config.json = cli.json;
    if let Some(level) = cli.log_level {
        config.log_level = level;
    }
    config
}
