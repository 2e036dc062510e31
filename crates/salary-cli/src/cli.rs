//! CLI argument definitions for the salary sterilizer.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "sterilize",
    version,
    about = "Normalize heterogeneous salary CSV files into one schema",
    long_about = "Normalize a public-entity salary CSV into the fixed output schema.\n\n\
                  The first run interviews you about which columns hold which field and\n\
                  saves the answers to template.json. Later runs reuse that template."
)]
pub struct Cli {
    /// The salary CSV file that needs cleaning.
    #[arg(value_name = "FILENAME")]
    pub filename: PathBuf,

    /// Only generate a cleaning template (do not execute it).
    #[arg(short = 'g', long = "generate-template")]
    pub generate_template: bool,

    /// Use a pre-existing template file.
    #[arg(short = 't', long = "template", value_name = "PATH")]
    pub template: Option<PathBuf>,

    /// Read interview answers from a file, one per line, instead of the terminal.
    #[arg(long = "answers", value_name = "PATH")]
    pub answers: Option<PathBuf>,

    /// Directory for the output CSV (default: current directory).
    #[arg(long = "output-dir", value_name = "DIR")]
    pub output_dir: Option<PathBuf>,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(long = "log-format", value_enum, default_value = "pretty")]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    /// Allow raw cell values (names, salaries) in logs and the summary.
    #[arg(long = "log-data")]
    pub log_data: bool,
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

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_short_flags() {
        let cli = Cli::try_parse_from(["sterilize", "pay.csv", "-g", "-t", "mine.json"]).unwrap();
        assert_eq!(cli.filename, PathBuf::from("pay.csv"));
        assert!(cli.generate_template);
        assert_eq!(cli.template, Some(PathBuf::from("mine.json")));
        assert!(!cli.log_data);
    }

    #[test]
    fn test_filename_required() {
        assert!(Cli::try_parse_from(["sterilize"]).is_err());
    }
}
