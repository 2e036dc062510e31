//! Salary sterilizer CLI.

use std::io::{self, IsTerminal};

use clap::{ColorChoice, Parser};
use tracing::level_filters::LevelFilter;

use salary_cli::commands::run;
use salary_cli::logging::{LogConfig, LogFormat, init_logging};
use salary_cli::types::{RunOptions, RunOutcome};

mod cli;
mod summary;

use crate::cli::{Cli, LogFormatArg, LogLevelArg};
use crate::summary::print_summary;

fn main() {
    let cli = Cli::parse();
    cli.color.write_global();
    let log_config = log_config_from_cli(&cli);
    if let Err(error) = init_logging(&log_config) {
        eprintln!("error: failed to initialize logging: {error}");
        std::process::exit(1);
    }
    let options = match run_options_from_cli(&cli) {
        Ok(options) => options,
        Err(error) => {
            eprintln!("error: failed to resolve working directory: {error}");
            std::process::exit(1);
        }
    };
    let exit_code = match run(&options) {
        Ok(RunOutcome::TemplateExists { .. }) => {
            println!(
                "You already have a template.json file! Pass it in using -t, or delete it to regenerate."
            );
            1
        }
        Ok(RunOutcome::TemplateOnly {
            template,
            generated,
        }) => {
            if generated {
                println!(
                    "Template for {} written to {}",
                    cli.filename.display(),
                    template.display()
                );
            }
            0
        }
        Ok(RunOutcome::Processed(result)) => {
            if result.template_generated {
                println!(
                    "Template for {} written to {}",
                    result.input.display(),
                    result.template.display()
                );
            }
            println!("File processed.");
            print_summary(&result);
            0
        }
        Err(error) => {
            eprintln!("error: {error:#}");
            1
        }
    };
    std::process::exit(exit_code);
}

fn run_options_from_cli(cli: &Cli) -> io::Result<RunOptions> {
    Ok(RunOptions {
        input: cli.filename.clone(),
        generate_only: cli.generate_template,
        template: cli.template.clone(),
        answers: cli.answers.clone(),
        output_dir: cli.output_dir.clone(),
        work_dir: std::env::current_dir()?,
    })
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
