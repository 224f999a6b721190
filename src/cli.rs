use clap::{Parser, ValueEnum};
use indexmap::IndexMap;
use log::LevelFilter;
use serde_json::Value;
use std::path::PathBuf;

/// Logging verbosity selectable from the command line.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum LogLevel {
    Off,
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<LogLevel> for LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Off => LevelFilter::Off,
            LogLevel::Error => LevelFilter::Error,
            LogLevel::Warn => LevelFilter::Warn,
            LogLevel::Info => LevelFilter::Info,
            LogLevel::Debug => LevelFilter::Debug,
            LogLevel::Trace => LevelFilter::Trace,
        }
    }
}

/// Command line arguments
#[derive(Parser)]
#[command(
    version,
    about = "Tool to emit the resolved compiler flag set for a source file as JSON."
)]
struct Cli {
    /// Source file the completion engine needs flags for
    file: PathBuf,

    /// Directory used to anchor relative include paths; defaults to the
    /// directory containing this executable
    #[arg(short('d'), long)]
    working_directory: Option<PathBuf>,

    /// Output JSON file (stdout when omitted)
    #[arg(short('o'), long)]
    output_file: Option<PathBuf>,

    /// Pretty print output JSON
    #[arg(short('p'), long, default_value_t = false)]
    pretty_print: bool,

    /// Completer options forwarded by the host, as a JSON object
    #[arg(long, value_parser = parse_options)]
    options: Option<IndexMap<String, Value>>,

    /// Logging level
    #[arg(short('l'), long, value_enum, default_value = "info")]
    log_level: LogLevel,
}

fn parse_options(
    raw: &str,
) -> Result<IndexMap<String, Value>, serde_json::Error> {
    serde_json::from_str(raw)
}

/// Validated application configuration derived from CLI arguments.
pub struct AppConfig {
    pub filename: PathBuf,
    pub working_directory: Option<PathBuf>,
    pub output_path: Option<PathBuf>,
    pub pretty_print: bool,
    pub options: IndexMap<String, Value>,
    pub log_level: LogLevel,
}

impl AppConfig {
    /// Parses command-line arguments and performs upfront validation,
    /// returning a fully-initialized application configuration or a
    /// human-readable error string suitable for printing to stderr.
    pub fn from_args() -> Result<Self, String> {
        Self::try_from_cli(Cli::parse())
    }

    fn try_from_cli(cli: Cli) -> Result<Self, String> {
        let Cli {
            file,
            working_directory,
            output_file,
            pretty_print,
            options,
            log_level,
        } = cli;

        if let Some(dir) = &working_directory {
            // Relative anchors would leave resolved flags relative as well.
            if !dir.is_absolute() {
                return Err(format!(
                    "Working directory must be an absolute path: {:?}",
                    dir
                ));
            }

            if !dir.is_dir() {
                return Err(format!(
                    "Provided path is not a directory: {:?}",
                    dir
                ));
            }
        }

        Ok(Self {
            filename: file,
            working_directory,
            output_path: output_file,
            pretty_print,
            options: options.unwrap_or_default(),
            log_level,
        })
    }
}
