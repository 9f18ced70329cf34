pub mod commands;

use clap::{Args, Parser, Subcommand};
use logscrub::Strategy;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "logscrub")]
#[command(about = "Strip console.log statements from TypeScript sources", long_about = None)]
#[command(version)]
pub struct Cli {
    #[arg(short, long, global = true, help = "Show debug logging on stderr")]
    pub verbose: bool,

    #[arg(
        long,
        global = true,
        default_value = ".",
        env = "LOGSCRUB_ROOT",
        help = "Project root that relative targets resolve against"
    )]
    pub root: PathBuf,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Args, Clone)]
pub struct Selection {
    #[arg(help = "Files to process (defaults to the configured list)")]
    pub files: Vec<PathBuf>,
    #[arg(short, long, conflicts_with = "files", help = "Walk the discovery root instead")]
    pub discover: bool,
    #[arg(short, long, value_enum, help = "Override the configured closing rule")]
    pub strategy: Option<Strategy>,
}

#[derive(Subcommand)]
pub enum Commands {
    #[command(about = "Remove console.log statements in place")]
    Strip {
        #[command(flatten)]
        selection: Selection,
        #[arg(short = 'n', long, help = "Report what would change without writing")]
        dry_run: bool,
    },

    #[command(about = "Show a file as it would look after stripping")]
    Preview {
        #[arg(help = "File path to preview")]
        file: PathBuf,
        #[arg(short, long, help = "Show removed lines alongside the result")]
        diff: bool,
        #[arg(short, long, value_enum, help = "Override the configured closing rule")]
        strategy: Option<Strategy>,
    },

    #[command(about = "List remaining console.log statements; fails if any are found")]
    Check {
        #[command(flatten)]
        selection: Selection,
    },

    #[command(about = "Summarize a workspace JSON document read from stdin")]
    Summarize,

    #[command(about = "Write a default .logscrub/config.toml")]
    Init,

    #[command(about = "Configure logscrub settings")]
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand)]
pub enum ConfigAction {
    #[command(about = "Set a configuration value")]
    Set { key: String, value: String },
    #[command(about = "Get a configuration value")]
    Get { key: String },
    #[command(about = "List all configuration values")]
    List,
}

impl Selection {
    pub fn source(&self) -> logscrub::TargetSource {
        if self.discover {
            logscrub::TargetSource::Discover
        } else if self.files.is_empty() {
            logscrub::TargetSource::Configured
        } else {
            logscrub::TargetSource::Explicit(self.files.clone())
        }
    }
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
    fn test_strip_flags() {
        let cli = Cli::parse_from(["logscrub", "strip", "--discover", "--strategy", "brace", "-n"]);
        match cli.command {
            Commands::Strip { selection, dry_run } => {
                assert!(dry_run);
                assert_eq!(selection.strategy, Some(Strategy::Brace));
                assert_eq!(selection.source(), logscrub::TargetSource::Discover);
            }
            _ => panic!("Expected strip command"),
        }
    }

    #[test]
    fn test_discover_conflicts_with_files() {
        assert!(Cli::try_parse_from(["logscrub", "check", "--discover", "a.ts"]).is_err());
    }
}
