//! CLI argument definitions for `interesting-aircraft`.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{InfoLevel, Verbosity};
use colorchoice_clap::Color;

use aircraft_cli::paths::DEFAULT_DATA_DIR;
use aircraft_ingest::REGISTRY_ENCODING_LABEL;

#[derive(Parser)]
#[command(
    name = "interesting-aircraft",
    version,
    about = "Find government and law-enforcement aircraft in the FAA registry and OpenSky database",
    long_about = "Filter the FAA aircraft registry and the OpenSky aircraft database down to\n\
                  interesting aircraft, then merge both sets by ICAO 24-bit address.\n\n\
                  All inputs and outputs use fixed file names under the data directory."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Directory holding the input files; outputs are written next to them.
    #[arg(
        long = "data-dir",
        value_name = "DIR",
        default_value = DEFAULT_DATA_DIR,
        global = true
    )]
    pub data_dir: PathBuf,

    /// Text encoding of the raw FAA and OpenSky files (Latin-1 or a WHATWG label).
    #[arg(
        long = "input-encoding",
        value_name = "LABEL",
        default_value = REGISTRY_ENCODING_LABEL,
        global = true
    )]
    pub input_encoding: String,

    /// Adjust log verbosity (-v for debug, -vv for trace, -q for warnings only).
    #[command(flatten)]
    pub verbosity: Verbosity<InfoLevel>,

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
}

#[derive(Clone, Copy, Subcommand)]
pub enum Command {
    /// Extract the FAA registry archive and keep interesting registrations.
    Faa,

    /// Keep law-enforcement aircraft from the OpenSky database.
    #[command(name = "opensky")]
    OpenSky,

    /// Merge the two filtered tables by ICAO address.
    Merge,

    /// Run faa, opensky and merge in order.
    All,
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
