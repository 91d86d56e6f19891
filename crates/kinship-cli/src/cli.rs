//! CLI command definitions and argument parsing.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Kinship CLI - Ask how people in a family tree are related.
#[derive(Debug, Parser)]
#[command(name = "kinship")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Family-tree document (JSON or TOML)
    #[arg(short, long, global = true, env = "KINSHIP_TREE")]
    pub tree: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, global = true)]
    pub format: Option<CliFormat>,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Configuration file path
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Follow birth parent links only
    #[arg(long, global = true)]
    pub birth_only: bool,

    /// Do not look for in-law relationships
    #[arg(long, global = true)]
    pub no_in_law: bool,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

/// Output format options.
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum CliFormat {
    /// Table format (default)
    Table,
    /// JSON format
    Json,
    /// Quiet format (handles or phrases only)
    Quiet,
}

/// CLI commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// How is B related to A
    Relate(PairArgs),

    /// Nearest common ancestors of two people
    Common(PairArgs),

    /// Ancestors of a person
    Ancestors(WindowArgs),

    /// Descendants of a person
    Descendants(WindowArgs),

    /// Everyone sharing an ancestor with a person
    Kin(PersonArgs),
}

/// Arguments naming two people.
#[derive(Debug, Parser)]
pub struct PairArgs {
    /// Handle of person A
    pub a: String,

    /// Handle of person B
    pub b: String,
}

/// Arguments for ancestor and descendant listings.
#[derive(Debug, Parser)]
pub struct WindowArgs {
    /// Person handle
    pub person: String,

    /// Maximum number of generations
    #[arg(short, long)]
    pub within: Option<u32>,
}

/// Arguments naming one person.
#[derive(Debug, Parser)]
pub struct PersonArgs {
    /// Person handle
    pub person: String,
}

impl From<CliFormat> for crate::config::OutputFormat {
    fn from(format: CliFormat) -> Self {
        match format {
            CliFormat::Table => crate::config::OutputFormat::Table,
            CliFormat::Json => crate::config::OutputFormat::Json,
            CliFormat::Quiet => crate::config::OutputFormat::Quiet,
        }
    }
}
