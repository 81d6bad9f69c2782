//! regress-grid - Main Entry Point
//!
//! Inspect regression model grids and run the search pipeline from the shell.

use clap::Parser;
use regress_grid::cli::{cmd_families, cmd_run, cmd_show, cmd_vocab, Cli, Commands};

fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "regress_grid=info".into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Families => cmd_families()?,
        Commands::Show { family, json } => cmd_show(&family, json)?,
        Commands::Vocab => cmd_vocab()?,
        Commands::Run { config, family, seed, samples, features, scaler, budget, quiet } => {
            cmd_run(
                config.as_deref(),
                family.as_deref(),
                seed,
                samples,
                features,
                scaler.as_deref(),
                budget,
                quiet,
            )?;
        }
    }

    Ok(())
}
