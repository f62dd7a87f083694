//! CLI argument definitions using clap.
//!
//! ## Commands
//!
//! - `extract`: Scan source code and write the default-locale catalog
//! - `merge`: Reconcile the default-locale catalog with other locale files
//! - `convert`: Convert between internal catalogs and flat locale files
//! - `init`: Initialize a lingot configuration file

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
}

/// Common arguments shared by all commands.
#[derive(Debug, Clone, Args)]
pub struct CommonArgs {
    /// Default locale (overrides config file)
    #[arg(long)]
    pub default_locale: Option<String>,

    /// Source code root directory (overrides config file)
    #[arg(long)]
    pub source_root: Option<PathBuf>,

    /// Locale catalog directory (overrides config file)
    #[arg(long)]
    pub messages_root: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Debug, Args)]
pub struct ExtractCommand {
    #[command(flatten)]
    pub common: CommonArgs,

    /// Marker function to scan for, as a dotted path (overrides config file)
    #[arg(long)]
    pub marker: Option<String>,

    /// Index of the message argument; negative counts from the end
    /// (overrides config file)
    #[arg(long, allow_negative_numbers = true)]
    pub key_index: Option<isize>,
}

#[derive(Debug, Args)]
pub struct MergeCommand {
    #[command(flatten)]
    pub common: CommonArgs,

    /// Merge only this locale; its file is created when missing
    #[arg(long)]
    pub locale: Option<String>,

    /// Print a per-locale report table after merging
    #[arg(short, long)]
    pub report: bool,
}

#[derive(Debug, Args)]
pub struct ConvertCommand {
    #[command(flatten)]
    pub common: CommonArgs,

    /// Directory the converted files are written to
    #[arg(long)]
    pub out: PathBuf,

    /// Convert flat external files back into internal catalogs
    #[arg(long)]
    pub import: bool,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Extract marker messages from source code into the default-locale catalog
    Extract(ExtractCommand),
    /// Flag missing and unused translations in the other locale catalogs
    Merge(MergeCommand),
    /// Convert catalogs to or from the flat external locale format
    Convert(ConvertCommand),
    /// Initialize a new .lingotrc.json configuration file
    Init,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verify_cli_definition() {
        Arguments::command().debug_assert();
    }

    #[test]
    fn negative_key_index_parses() {
        let args =
            Arguments::parse_from(["lingot", "extract", "--key-index", "-1"]);
        let Some(Command::Extract(cmd)) = args.command else {
            panic!("expected extract command");
        };
        assert_eq!(cmd.key_index, Some(-1));
    }

    #[test]
    fn convert_requires_out_directory() {
        let result =
            Arguments::try_parse_from(["lingot", "convert"]);
        assert!(result.is_err());
    }
}
