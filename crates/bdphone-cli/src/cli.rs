//! Command-line interface argument parsing and definitions
//!
//! This module defines the CLI structure using clap's derive API,
//! providing a type-safe and well-documented command interface.

use bdphone_core::{PhoneFormat, TransformBase};
use clap::{Args, Parser, Subcommand, ValueEnum};
use is_terminal::IsTerminal;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// bdphone - Bangladeshi mobile number validation and formatting
///
/// Validates numbers written as local, +880, 00880 or without the leading
/// zero, prints them in any supported format, and identifies the operator.
#[derive(Parser, Debug)]
#[command(
    name = "bdphone",
    version,
    author,
    about,
    long_about = None,
    propagate_version = true,
    arg_required_else_help = true
)]
pub struct Cli {
    /// Enable verbose output (can be used multiple times for increased verbosity)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all non-essential output
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Path to configuration file
    #[arg(short, long, global = true, env = "BDPHONE_CONFIG")]
    pub config: Option<PathBuf>,

    /// Output format for results (defaults to the configured format, then human)
    #[arg(short, long, value_enum, global = true)]
    pub output: Option<OutputFormat>,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// The subcommand to run
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Validate phone numbers and show every derived form
    Validate(ValidateArgs),

    /// Print phone numbers in a chosen format
    Format(FormatArgs),

    /// Normalize phone numbers (E.164 unless --as is given)
    Normalize(NormalizeArgs),

    /// Identify the mobile operator of phone numbers
    Operator(OperatorArgs),

    /// Apply a custom prefix/trim transform to phone numbers
    #[command(visible_alias = "refactor")]
    Customize(CustomizeArgs),

    /// Manage configuration files and settings
    Config(ConfigArgs),

    /// Generate shell completions for the specified shell
    Completions(CompletionsArgs),
}

/// Phone numbers to process
#[derive(Args, Debug, Clone, Default)]
pub struct NumberArgs {
    /// Phone numbers; one per line is read from stdin when none are given
    #[arg(value_name = "NUMBER")]
    pub numbers: Vec<String>,
}

/// Validation flags shared by every phone command
#[derive(Args, Debug, Clone, Default)]
pub struct ValidationFlags {
    /// Reject ten-digit numbers that omit the leading zero
    #[arg(long)]
    pub strict_zero: bool,

    /// Only accept numbers owned by this operator (gp, robi, airtel, bl, tt, ...)
    #[arg(long, value_name = "OPERATOR")]
    pub expect_operator: Option<String>,
}

/// Arguments for the validate command
#[derive(Parser, Debug)]
pub struct ValidateArgs {
    #[command(flatten)]
    pub input: NumberArgs,

    #[command(flatten)]
    pub validation: ValidationFlags,

    /// Show every derived form, not just the verdict
    #[arg(long)]
    pub detailed: bool,
}

/// Arguments for the format command
#[derive(Parser, Debug)]
pub struct FormatArgs {
    #[command(flatten)]
    pub input: NumberArgs,

    #[command(flatten)]
    pub validation: ValidationFlags,

    /// Target format
    #[arg(long = "as", value_enum, default_value = "local")]
    pub format: FormatKind,
}

/// Arguments for the normalize command
#[derive(Parser, Debug)]
pub struct NormalizeArgs {
    #[command(flatten)]
    pub input: NumberArgs,

    #[command(flatten)]
    pub validation: ValidationFlags,

    /// Target format (defaults to the configured format, then e164)
    #[arg(long = "as", value_enum)]
    pub format: Option<FormatKind>,
}

/// Arguments for the operator command
#[derive(Parser, Debug)]
pub struct OperatorArgs {
    #[command(flatten)]
    pub input: NumberArgs,

    #[command(flatten)]
    pub validation: ValidationFlags,

    /// Check membership instead of printing the operator
    #[arg(long, value_name = "OPERATOR")]
    pub is: Option<String>,
}

/// Arguments for the customize command
#[derive(Parser, Debug)]
pub struct CustomizeArgs {
    #[command(flatten)]
    pub input: NumberArgs,

    #[command(flatten)]
    pub validation: ValidationFlags,

    /// Start from a transform preset defined in the configuration file
    #[arg(short, long)]
    pub preset: Option<String>,

    /// Base form to transform
    #[arg(long, value_enum)]
    pub base: Option<BaseKind>,

    /// Characters to remove from the start of the base form
    #[arg(long, value_name = "COUNT")]
    pub remove_start: Option<usize>,

    /// Characters to remove from the end of the base form
    #[arg(long, value_name = "COUNT")]
    pub remove_end: Option<usize>,

    /// Text to put in front of the result
    #[arg(long, allow_hyphen_values = true)]
    pub prefix: Option<String>,

    /// Text between prefix and number (only used with a prefix)
    #[arg(long, allow_hyphen_values = true)]
    pub separator: Option<String>,
}

/// Arguments for config management
#[derive(Parser, Debug)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub action: ConfigAction,
}

/// Config subcommands
#[derive(Subcommand, Debug)]
pub enum ConfigAction {
    /// Show the effective configuration
    Show {
        /// Serialization format
        #[arg(long, value_enum, default_value = "yaml")]
        format: ConfigFormat,
    },

    /// Write a default configuration file
    Init {
        /// Destination (defaults to the user config directory)
        #[arg(value_name = "PATH")]
        path: Option<PathBuf>,

        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}

/// Configuration serialization formats
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum ConfigFormat {
    /// YAML format
    Yaml,
    /// JSON format
    Json,
    /// TOML format
    Toml,
}

/// Arguments for generating shell completions
#[derive(Parser, Debug)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}

/// Output format options
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum OutputFormat {
    /// Human-readable formatted output
    Human,
    /// JSON output
    Json,
    /// YAML output
    Yaml,
    /// Pretty-printed JSON output
    JsonPretty,
}

/// Phone number formats
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum FormatKind {
    /// 01712345678
    Local,
    /// 8801712345678
    International,
    /// +8801712345678
    E164,
    /// 017-123-45678
    Pretty,
    /// 017****5678
    Masked,
}

/// Transform base forms
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum BaseKind {
    /// 01712345678
    Local,
    /// 1712345678
    Core,
    /// 8801712345678
    International,
}

/// Supported shells for completion generation
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum Shell {
    /// Bash shell
    Bash,
    /// Zsh shell
    Zsh,
    /// Fish shell
    Fish,
    /// PowerShell
    PowerShell,
    /// Elvish shell
    Elvish,
}

impl Cli {
    /// Parse command-line arguments
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Get the effective verbosity level (considering quiet flag)
    pub fn verbosity_level(&self) -> u8 {
        if self.quiet {
            0
        } else {
            self.verbose
        }
    }

    /// Check if colored output should be used
    pub fn use_color(&self) -> bool {
        !self.no_color && std::io::stdout().is_terminal()
    }
}

impl From<FormatKind> for PhoneFormat {
    fn from(kind: FormatKind) -> Self {
        match kind {
            FormatKind::Local => PhoneFormat::Local,
            FormatKind::International => PhoneFormat::International,
            FormatKind::E164 => PhoneFormat::E164,
            FormatKind::Pretty => PhoneFormat::Pretty,
            FormatKind::Masked => PhoneFormat::Masked,
        }
    }
}

impl From<BaseKind> for TransformBase {
    fn from(kind: BaseKind) -> Self {
        match kind {
            BaseKind::Local => TransformBase::Local,
            BaseKind::Core => TransformBase::Core,
            BaseKind::International => TransformBase::International,
        }
    }
}

impl Shell {
    /// Convert to clap_complete shell type
    pub fn to_clap_shell(self) -> clap_complete::Shell {
        match self {
            Shell::Bash => clap_complete::Shell::Bash,
            Shell::Zsh => clap_complete::Shell::Zsh,
            Shell::Fish => clap_complete::Shell::Fish,
            Shell::PowerShell => clap_complete::Shell::PowerShell,
            Shell::Elvish => clap_complete::Shell::Elvish,
        }
    }
}
