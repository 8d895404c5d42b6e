//! CLI argument definitions using clap.
//!
//! ## Commands
//!
//! - `check`: Run ICU message checks over a project's source files
//! - `init`: Initialize the intlint configuration file
//! - `rules`: List the available rules and their metadata

use clap::{Args, CommandFactory, Parser, Subcommand, ValueEnum};

use crate::issues::Rule;

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Arguments {
    #[command(subcommand)]
    pub command: Option<Command>,
}

impl Arguments {
    /// Check if a command was provided, otherwise print help and return None.
    pub fn with_command_or_help(self) -> Option<Self> {
        if self.command.is_none() {
            Self::command().print_help().ok();
            None
        } else {
            Some(self)
        }
    }
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Check message definitions against the enabled rules
    Check(CheckCommand),
    /// Create a default configuration file in the current directory
    Init,
    /// List the available rules
    Rules,
}

/// Rules selectable from the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum)]
pub enum CheckRule {
    NoCamelCase,
    NoMultiplePlurals,
}

impl CheckRule {
    pub fn id(self) -> Rule {
        match self {
            CheckRule::NoCamelCase => Rule::NoCamelCase,
            CheckRule::NoMultiplePlurals => Rule::NoMultiplePlurals,
        }
    }
}

#[derive(Debug, Args)]
pub struct CheckCommand {
    /// Rules to run (default: all enabled in config)
    #[arg(value_enum)]
    pub checks: Vec<CheckRule>,

    /// Project directory to check
    #[arg(long, default_value = ".")]
    pub path: String,

    /// Module specifier to track imports from (overrides config file)
    #[arg(long)]
    pub module: Option<String>,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}
