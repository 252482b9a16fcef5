//! CLI argument definitions for the `deco` tool.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;
use deco_model::Vocabulary;

#[derive(Parser)]
#[command(
    name = "deco",
    version,
    about = "Decode size codes and normalize decoration asset attributes",
    long_about = "Decode and encode decoration size codes, and normalize free-text\n\
                  colors, hoodie types, and decoration bases against the canonical\n\
                  vocabularies.\n\n\
                  Size codes may use the legacy comma format (Mini,L,XL) or the\n\
                  compact shorthand format (MnLH)."
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
}

#[derive(Subcommand)]
pub enum Command {
    /// Decode a size code and print its sizes in canonical order.
    Decode(DecodeArgs),

    /// Encode sizes into a size code.
    Encode(EncodeArgs),

    /// Match a free-text value against a vocabulary.
    Match(MatchArgs),

    /// Normalize design assets read as JSON.
    Normalize(NormalizeArgs),

    /// List the members of a vocabulary.
    Vocab(VocabArgs),
}

#[derive(Parser)]
pub struct DecodeArgs {
    /// Size code in legacy or compact format.
    #[arg(value_name = "CODE")]
    pub code: String,
}

#[derive(Parser)]
pub struct EncodeArgs {
    /// Sizes as full names or shorthand codes (e.g. Mini L H).
    #[arg(value_name = "SIZE")]
    pub sizes: Vec<String>,

    /// Emit the compact shorthand format instead of the legacy comma format.
    #[arg(long = "compact")]
    pub compact: bool,
}

#[derive(Parser)]
pub struct MatchArgs {
    /// Raw attribute value.
    #[arg(value_name = "VALUE")]
    pub value: String,

    /// Vocabulary to match against.
    #[arg(long = "vocabulary", value_enum)]
    pub vocabulary: VocabularyArg,

    /// Only accept exact matches (no partial wording).
    #[arg(long = "strict")]
    pub strict: bool,
}

#[derive(Parser)]
pub struct NormalizeArgs {
    /// JSON file with one asset or an array of assets (`-` for stdin).
    #[arg(value_name = "FILE")]
    pub input: PathBuf,

    /// Only accept exact matches (no partial wording).
    #[arg(long = "strict")]
    pub strict: bool,

    /// Keep blank decoration bases blank instead of mapping them to N/A.
    #[arg(long = "keep-blank-deco-base")]
    pub keep_blank_deco_base: bool,
}

#[derive(Parser)]
pub struct VocabArgs {
    /// Vocabulary to list.
    #[arg(value_enum)]
    pub vocabulary: VocabularyArg,
}

/// CLI vocabulary choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum VocabularyArg {
    Sizes,
    Colors,
    HoodieTypes,
    DecoBases,
}

impl From<VocabularyArg> for Vocabulary {
    fn from(arg: VocabularyArg) -> Self {
        match arg {
            VocabularyArg::Sizes => Vocabulary::Sizes,
            VocabularyArg::Colors => Vocabulary::Colors,
            VocabularyArg::HoodieTypes => Vocabulary::HoodieTypes,
            VocabularyArg::DecoBases => Vocabulary::DecoBases,
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

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
