use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use onp_text::Granularity;
use serde::{Deserialize, Serialize};

#[derive(Parser)]
#[command(
    name = "onp",
    about = "onp — minimal edit scripts between two files",
    version,
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[arg(long, global = true)]
    pub format: Option<OutputFormat>,

    /// TOML file with default settings
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Unit in which files are compared.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Unit {
    #[default]
    Lines,
    Words,
    Chars,
    Bytes,
}

impl Unit {
    /// The text granularity for this unit; `None` for raw bytes.
    pub fn granularity(self) -> Option<Granularity> {
        match self {
            Self::Lines => Some(Granularity::Lines),
            Self::Words => Some(Granularity::Words),
            Self::Chars => Some(Granularity::Chars),
            Self::Bytes => None,
        }
    }
}

#[derive(Subcommand)]
pub enum Command {
    /// Show a unified diff between two files
    Diff(CompareArgs),
    /// Print the raw change records between two files
    Changes(CompareArgs),
    /// Summarize the changes between two files
    Stat(CompareArgs),
}

#[derive(Args)]
pub struct CompareArgs {
    pub old: PathBuf,
    pub new: PathBuf,
    #[arg(long)]
    pub unit: Option<Unit>,
    /// Unchanged tokens shown around each change
    #[arg(short = 'U', long)]
    pub context: Option<usize>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_diff() {
        let cli = Cli::try_parse_from(["onp", "diff", "a.txt", "b.txt"]).unwrap();
        if let Command::Diff(args) = cli.command {
            assert_eq!(args.old, PathBuf::from("a.txt"));
            assert_eq!(args.new, PathBuf::from("b.txt"));
            assert!(args.unit.is_none());
            assert!(args.context.is_none());
        } else { panic!("wrong command"); }
    }

    #[test]
    fn parse_diff_context() {
        let cli = Cli::try_parse_from(["onp", "diff", "-U", "5", "a", "b"]).unwrap();
        if let Command::Diff(args) = cli.command {
            assert_eq!(args.context, Some(5));
        } else { panic!("wrong command"); }
    }

    #[test]
    fn parse_changes_unit() {
        let cli = Cli::try_parse_from(["onp", "changes", "--unit", "bytes", "a", "b"]).unwrap();
        if let Command::Changes(args) = cli.command {
            assert_eq!(args.unit, Some(Unit::Bytes));
        } else { panic!("wrong command"); }
    }

    #[test]
    fn parse_stat() {
        let cli = Cli::try_parse_from(["onp", "stat", "a", "b"]).unwrap();
        assert!(matches!(cli.command, Command::Stat(_)));
    }

    #[test]
    fn parse_global_flags() {
        let cli = Cli::try_parse_from([
            "onp", "--verbose", "--format", "json", "--config", "onp.toml", "stat", "a", "b",
        ])
        .unwrap();
        assert!(cli.verbose);
        assert_eq!(cli.format, Some(OutputFormat::Json));
        assert_eq!(cli.config, Some(PathBuf::from("onp.toml")));
    }

    #[test]
    fn missing_operand_is_rejected() {
        assert!(Cli::try_parse_from(["onp", "diff", "only-one"]).is_err());
    }

    #[test]
    fn unit_granularity() {
        assert_eq!(Unit::Words.granularity(), Some(Granularity::Words));
        assert_eq!(Unit::Bytes.granularity(), None);
    }
}
