//! CLI argument definitions for the address standardizer.

use std::path::PathBuf;

use addr_cli::logging::LogFormat;
use addr_ingest::DEFAULT_CHUNK_SIZE;
use addr_normalization::ErrorPolicy;
use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;
use tracing::level_filters::LevelFilter;

#[derive(Parser)]
#[command(
    name = "address-standardizer",
    version,
    about = "Standardize US street addresses in delimited files",
    long_about = "Standardize house number and street columns of a delimited file.\n\n\
                  Values are uppercased and whitespace-collapsed, then split into a\n\
                  primary value and additional values. Street directionals and\n\
                  suffixes are mapped to canonical abbreviations."
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

    /// Include address values in log output.
    ///
    /// Addresses are personal data; by default they are redacted.
    #[arg(long = "log-data", global = true)]
    pub log_data: bool,
}

#[derive(Subcommand)]
pub enum Command {
    /// Standardize the address columns of a delimited file.
    Standardize(StandardizeArgs),

    /// List the directional and suffix vocabularies.
    Vocabulary,
}

#[derive(Parser)]
pub struct StandardizeArgs {
    /// File containing data to standardize.
    #[arg(long = "input-file", value_name = "PATH")]
    pub input_file: PathBuf,

    /// File to which standardized data is written (must not exist).
    #[arg(long = "output-file", value_name = "PATH")]
    pub output_file: PathBuf,

    /// Column containing house number data to standardize.
    #[arg(long = "housenum-column", value_name = "NAME")]
    pub housenum_column: String,

    /// Column containing street data to standardize.
    #[arg(long = "street-column", value_name = "NAME")]
    pub street_column: String,

    /// Column separator (a single character, or \t for tab).
    #[arg(long = "sep", default_value = ",")]
    pub sep: String,

    /// Number of records to process at a time.
    #[arg(long = "chunksize", default_value_t = DEFAULT_CHUNK_SIZE)]
    pub chunksize: usize,

    /// What to do with records whose house number or street is empty.
    #[arg(long = "on-error", value_enum, default_value = "fail")]
    pub on_error: ErrorPolicyArg,

    /// Also write the run summary as JSON to this path.
    #[arg(long = "summary-json", value_name = "PATH")]
    pub summary_json: Option<PathBuf>,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum ErrorPolicyArg {
    /// Abort the run.
    Fail,
    /// Leave the record out of the output.
    Skip,
    /// Write the record with empty derived columns.
    Keep,
}

impl From<ErrorPolicyArg> for ErrorPolicy {
    fn from(arg: ErrorPolicyArg) -> Self {
        match arg {
            ErrorPolicyArg::Fail => ErrorPolicy::Fail,
            ErrorPolicyArg::Skip => ErrorPolicy::Skip,
            ErrorPolicyArg::Keep => ErrorPolicy::Keep,
        }
    }
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

impl From<LogLevelArg> for LevelFilter {
    fn from(arg: LogLevelArg) -> Self {
        match arg {
            LogLevelArg::Error => LevelFilter::ERROR,
            LogLevelArg::Warn => LevelFilter::WARN,
            LogLevelArg::Info => LevelFilter::INFO,
            LogLevelArg::Debug => LevelFilter::DEBUG,
            LogLevelArg::Trace => LevelFilter::TRACE,
        }
    }
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}

impl From<LogFormatArg> for LogFormat {
    fn from(arg: LogFormatArg) -> Self {
        match arg {
            LogFormatArg::Pretty => LogFormat::Pretty,
            LogFormatArg::Compact => LogFormat::Compact,
            LogFormatArg::Json => LogFormat::Json,
        }
    }
}
