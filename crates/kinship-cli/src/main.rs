//! Kinship CLI - Ask how people in a family tree are related.

use clap::Parser;
use kinship_cli::{commands, phrase, Cli, CliError, Config, Context, Formatter};
use kinship_store::MemoryStore;
use tracing_subscriber::EnvFilter;

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if let Err(e) = run(cli) {
        let formatter = Formatter::new(kinship_cli::config::OutputFormat::Table, true);
        eprintln!("{}", formatter.error(&e.to_string()));
        std::process::exit(1);
    }
}

/// Log to stderr; `-v` flags win over `KINSHIP_LOG` / `RUST_LOG`
fn init_tracing(verbose: u8) {
    let filter = match verbose {
        0 => EnvFilter::try_from_env("KINSHIP_LOG")
            .or_else(|_| EnvFilter::try_from_default_env())
            .unwrap_or_else(|_| EnvFilter::new("warn")),
        1 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(filter)
        .init();
}

fn run(cli: Cli) -> kinship_cli::Result<()> {
    let config = Config::load(cli.config.as_deref())?;

    // Determine output format
    let format = cli
        .format
        .map(Into::into)
        .unwrap_or(config.settings.format);

    // Determine color setting
    let color_enabled = !cli.no_color && config.settings.color;
    let formatter = Formatter::new(format, color_enabled);

    // Command line overrides the config file
    let mut engine = config.engine.clone();
    if cli.birth_only {
        engine.only_birth = true;
    }
    if cli.no_in_law {
        engine.search_in_law = false;
    }

    let tree = cli
        .tree
        .or_else(|| config.settings.tree.clone())
        .ok_or(CliError::NoTree)?;
    let store = MemoryStore::load(&tree)?;
    tracing::debug!("Loaded {} people from {}", store.person_count(), tree.display());

    let phrases = phrase::formatter_for(&config.settings.locale)?;
    let ctx = Context::new(store, engine, formatter, phrases);

    println!("{}", commands::execute(cli.command, &ctx)?);
    Ok(())
}
