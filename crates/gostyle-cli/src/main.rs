//! gostyle CLI tool.
//!
//! Usage:
//! ```bash
//! gostyle [OPTIONS] <PATH>
//! gostyle list-rules
//! gostyle init [--force]
//! ```

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

mod commands;
mod config_resolver;
mod discovery;

/// Go source convention linter
#[derive(Parser)]
#[command(name = "gostyle")]
#[command(author, version, about, long_about = None)]
#[command(args_conflicts_with_subcommands = true)]
#[command(subcommand_negates_reqs = true)]
struct Cli {
    /// File or directory to check
    #[arg(required = true)]
    path: Option<PathBuf>,

    /// Output format
    #[arg(short, long, default_value = "text")]
    format: OutputFormat,

    /// Path to configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Exclude patterns (can be specified multiple times)
    #[arg(short, long)]
    exclude: Vec<String>,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// List available rules
    ListRules,

    /// Initialize configuration file
    Init {
        /// Overwrite existing config
        #[arg(long)]
        force: bool,
    },
}

/// Output format for lint results.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// `Validation failed:` followed by one line per diagnostic.
    #[default]
    Text,
    /// One line per diagnostic with severity and rule code.
    Compact,
    /// JSON output.
    Json,
    /// Source excerpts rendered with miette.
    Rich,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Some(Commands::ListRules) => {
            commands::list_rules::run();
            Ok(())
        }
        Some(Commands::Init { force }) => commands::init::run(force),
        None => {
            let path = cli.path.context("PATH is required")?;
            commands::check::run(&path, cli.format, cli.exclude, cli.config.as_deref())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn path_required_without_subcommand() {
        let err = Cli::try_parse_from(["gostyle"]).err().unwrap();
        assert_eq!(err.kind(), clap::error::ErrorKind::MissingRequiredArgument);

        let cli = Cli::try_parse_from(["gostyle", "pkg", "--format", "compact"]).unwrap();
        assert_eq!(cli.path, Some(PathBuf::from("pkg")));
        assert_eq!(cli.format, OutputFormat::Compact);
    }

    #[test]
    fn subcommands_need_no_path() {
        let cli = Cli::try_parse_from(["gostyle", "list-rules"]).unwrap();
        assert!(matches!(cli.command, Some(Commands::ListRules)));

        let cli = Cli::try_parse_from(["gostyle", "init", "--force"]).unwrap();
        assert!(matches!(cli.command, Some(Commands::Init { force: true })));
        assert!(cli.path.is_none());
    }
}
