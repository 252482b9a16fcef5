//! Decoration asset normalization CLI.

use clap::{ColorChoice, Parser};
use deco_cli::commands::{read_input, run_decode, run_encode, run_match, run_normalize};
use deco_cli::logging::{LogConfig, LogFormat, init_logging};
use deco_cli::summary::{unmatched_table, vocabulary_table};
use deco_model::{MatchingMode, NormalizationOptions};
use std::io::{self, IsTerminal};
use tracing::level_filters::LevelFilter;

mod cli;

use crate::cli::{Cli, Command, LogFormatArg, LogLevelArg, NormalizeArgs};

fn main() {
    let cli = Cli::parse();
    cli.color.write_global();
    let log_config = log_config_from_cli(&cli);
    if let Err(error) = init_logging(&log_config) {
        eprintln!("error: failed to initialize logging: {error}");
        std::process::exit(1);
    }
    let exit_code = match cli.command {
        Command::Decode(args) => {
            println!("{}", run_decode(&args.code));
            0
        }
        Command::Encode(args) => {
            println!("{}", run_encode(&args.sizes, args.compact));
            0
        }
        Command::Match(args) => {
            let options = options_for(args.strict, false);
            println!("{}", run_match(&args.value, args.vocabulary.into(), &options));
            0
        }
        Command::Normalize(args) => match normalize(&args) {
            Ok(()) => 0,
            Err(error) => {
                eprintln!("error: {error:#}");
                1
            }
        },
        Command::Vocab(args) => {
            println!("{}", vocabulary_table(args.vocabulary.into()));
            0
        }
    };
    std::process::exit(exit_code);
}

fn normalize(args: &NormalizeArgs) -> anyhow::Result<()> {
    let options = options_for(args.strict, args.keep_blank_deco_base);
    let input = read_input(&args.input)?;
    let report = run_normalize(&input, &options)?;
    println!("{}", report.json);
    if !report.unmatched.is_empty() {
        eprintln!(
            "{} of {} asset(s) kept unmatched values:",
            report.affected_assets(),
            report.asset_count
        );
        eprintln!("{}", unmatched_table(&report.unmatched));
    }
    Ok(())
}

/// Build normalization options from CLI flags.
fn options_for(strict: bool, keep_blank_deco_base: bool) -> NormalizationOptions {
    let mode = if strict {
        MatchingMode::Strict
    } else {
        MatchingMode::Lenient
    };
    NormalizationOptions::new()
        .with_matching_mode(mode)
        .with_blank_deco_base_as_na(!keep_blank_deco_base)
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
    config.with_ansi = match cli.color.color {
        ColorChoice::Always => true,
        ColorChoice::Never => false,
        ColorChoice::Auto => cli.log_file.is_none() && io::stderr().is_terminal(),
    };
    config
}
