//! CLI argument definitions using clap.
//!
//! This module defines the command-line interface structure for all Transkey
//! commands. It uses clap's derive API for declarative argument parsing.
//!
//! ## Commands
//!
//! - `init`: Initialize the transkey configuration file
//! - `scan`: Discover translation directories and summarize the index
//! - `keys`: List known keys, optionally filtered by prefix
//! - `get`: Print the value of a key
//! - `resolve`: Print where a key is defined
//! - `tree`: List tracked directories and their locale files

use std::path::PathBuf;

use clap::{Args, CommandFactory, Parser, Subcommand};

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

    /// Get the verbose flag from the command's common args.
    pub fn verbose(&self) -> bool {
        self.common().is_some_and(|common| common.verbose)
    }

    fn common(&self) -> Option<&CommonArgs> {
        match &self.command {
            Some(Command::Scan(cmd)) => Some(&cmd.common),
            Some(Command::Keys(cmd)) => Some(&cmd.common),
            Some(Command::Get(cmd)) => Some(&cmd.common),
            Some(Command::Resolve(cmd)) => Some(&cmd.common),
            Some(Command::Tree(cmd)) => Some(&cmd.common),
            Some(Command::Init(_)) | None => None,
        }
    }
}

/// Common arguments shared by all index commands.
#[derive(Debug, Clone, Args)]
pub struct CommonArgs {
    /// Project root directory (defaults to the current directory)
    #[arg(long)]
    pub root: Option<PathBuf>,

    /// Preferred locale (overrides config file)
    #[arg(long)]
    pub locale: Option<String>,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Debug, Args)]
pub struct InitCommand {
    /// Directory to create the config file in (defaults to the current directory)
    #[arg(long)]
    pub root: Option<PathBuf>,

    /// Overwrite an existing config file
    #[arg(long)]
    pub force: bool,
}

#[derive(Debug, Args)]
pub struct ScanCommand {
    #[command(flatten)]
    pub common: CommonArgs,
}

#[derive(Debug, Args)]
pub struct KeysCommand {
    /// Only list keys starting with this prefix
    pub prefix: Option<String>,

    #[command(flatten)]
    pub common: CommonArgs,
}

#[derive(Debug, Args)]
pub struct GetCommand {
    /// Dot-separated translation key
    pub key: String,

    /// Truncate the value to the configured inline hint length
    #[arg(long)]
    pub truncate: bool,

    #[command(flatten)]
    pub common: CommonArgs,
}

#[derive(Debug, Args)]
pub struct ResolveCommand {
    /// Dot-separated translation key
    pub key: String,

    /// Print every locale file defining the key
    #[arg(long)]
    pub all: bool,

    #[command(flatten)]
    pub common: CommonArgs,
}

#[derive(Debug, Args)]
pub struct TreeCommand {
    #[command(flatten)]
    pub common: CommonArgs,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Initialize a new .transkeyrc.json configuration file
    Init(InitCommand),
    /// Discover translation directories and summarize the index
    Scan(ScanCommand),
    /// List translation keys
    Keys(KeysCommand),
    /// Print the value of a translation key
    Get(GetCommand),
    /// Print where a translation key is defined
    Resolve(ResolveCommand),
    /// List translation directories and their locale files
    Tree(TreeCommand),
}
