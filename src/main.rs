//! Packrat - cache-first npm package installer
//!
//! CLI entry point that dispatches to subcommands.

use clap::Parser;
use console::style;
use packrat::cli::{Cli, Commands};
use packrat::config::{resolve_cache_root, ConfigManager};
use packrat::error::PackratResult;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> ExitCode {
    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{} {}", style("Error:").red().bold(), e);
            if let Some(hint) = e.hint() {
                eprintln!("{} {}", style("Hint:").yellow(), hint);
            }
            ExitCode::FAILURE
        }
    }
}

async fn run() -> PackratResult<()> {
    let cli = Cli::parse();

    // Initialize logging: 0 = warn, 1 = info, 2+ = debug
    let filter = match cli.verbose {
        0 => EnvFilter::new("packrat=warn"),
        1 => EnvFilter::new("packrat=info"),
        _ => EnvFilter::new("packrat=debug"),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .without_time()
        .init();

    let manager = if let Some(path) = cli.config {
        ConfigManager::with_path(path)
    } else {
        ConfigManager::new()
    };
    let config = manager.load().await?;
    let cache_root = resolve_cache_root(&config, cli.cache_dir.as_deref());

    match cli.command {
        Commands::Install(args) => packrat::cli::commands::install(args, &config, cache_root).await,
        Commands::Update(args) => packrat::cli::commands::update(args, &config, cache_root).await,
        Commands::List(args) => packrat::cli::commands::list(args, cache_root).await,
        Commands::Prune => packrat::cli::commands::prune().await,
        Commands::Config(args) => packrat::cli::commands::config(args, &manager, &config).await,
    }
}
