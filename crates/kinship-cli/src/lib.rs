//! Kinship CLI library.
//!
//! This library provides the core functionality for the Kinship command-line interface,
//! including configuration management, command execution, phrase tables and output formatting.

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod output;
pub mod phrase;

pub use cli::{Cli, Command};
pub use commands::Context;
pub use config::Config;
pub use error::{CliError, Result};
pub use output::Formatter;
