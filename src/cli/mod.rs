//! regress-grid CLI Module
//!
//! Command-line interface for inspecting model family grids and running the
//! generate → scale → dispatch pipeline.

use clap::{Parser, Subcommand};
use colored::*;
use std::path::PathBuf;
use std::time::Instant;

use crate::optimizer::{vocabulary, ParamValue};
use crate::pipeline::{self, RunConfig};
use crate::preprocessing::ScalerType;
use crate::training::{ModelFamily, ModelTable, SearchPlanner};

// ─── Styling helpers ───────────────────────────────────────────────────────────

fn dim(s: &str) -> ColoredString   { s.truecolor(100, 100, 100) }
fn accent(s: &str) -> ColoredString { s.truecolor(120, 170, 255) }
fn muted(s: &str) -> ColoredString  { s.truecolor(140, 140, 140) }
fn ok(s: &str) -> ColoredString     { s.truecolor(100, 210, 120) }

fn step_run(msg: &str) {
    print!("  {} {}... ", accent("›"), msg);
}

fn step_done(detail: &str) {
    println!("{} {}", ok("done"), dim(detail));
}

fn section(title: &str) {
    println!();
    println!("  {}", title.white().bold());
    println!("  {}", dim(&"─".repeat(56)));
}

fn format_values(values: &[ParamValue]) -> String {
    let items: Vec<String> = values.iter().map(|v| v.to_string()).collect();
    format!("[{}]", items.join(", "))
}

// ─── CLI definition ────────────────────────────────────────────────────────────

#[derive(Parser)]
#[command(name = "regress-grid")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Hyperparameter grids for regression estimators")]
#[command(long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List model families with their estimator and candidate counts
    Families,

    /// Print the grids of one model family
    Show {
        /// Model family (linear, svm, svm-small, neighbors, gp)
        family: String,

        /// Emit JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Print the shared parameter vocabulary
    Vocab,

    /// Generate data, scale it and dispatch a family to the search planner
    Run {
        /// JSON run configuration
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Model family, overrides the configuration
        #[arg(short, long)]
        family: Option<String>,

        /// Random seed
        #[arg(long)]
        seed: Option<u64>,

        /// Number of samples
        #[arg(long)]
        samples: Option<usize>,

        /// Number of features
        #[arg(long)]
        features: Option<usize>,

        /// Scaler type (standard, minmax, maxabs, none)
        #[arg(long)]
        scaler: Option<String>,

        /// Warn when one estimator's grid exceeds this many candidates
        #[arg(long)]
        budget: Option<usize>,

        /// Suppress degenerate-input warnings
        #[arg(short, long)]
        quiet: bool,
    },
}

// ─── Commands ──────────────────────────────────────────────────────────────────

pub fn cmd_families() -> anyhow::Result<()> {
    section("Families");

    println!("  {:<12} {:>10} {:>14}", muted("Family"), muted("Models"), muted("Candidates"));
    println!("  {}", dim(&"─".repeat(38)));

    for family in ModelFamily::ALL {
        let table = family.table()?;
        println!(
            "  {:<12} {:>10} {:>14}",
            family.as_str().white(),
            table.len(),
            table.n_candidates()
        );
    }
    println!();
    Ok(())
}

pub fn cmd_show(family: &str, json: bool) -> anyhow::Result<()> {
    let family: ModelFamily = family.parse()?;
    let table = family.table()?;

    if json {
        println!("{}", table_to_json(&table)?);
        return Ok(());
    }

    section(&format!("Family: {}", family));
    for entry in table.iter() {
        println!(
            "  {} {}",
            entry.estimator.name().white().bold(),
            dim(&format!("({} candidates)", entry.grid.n_candidates()))
        );
        for (key, values) in entry.grid.entries() {
            println!("    {:<22} {}", muted(key), format_values(values));
        }
        println!();
    }
    Ok(())
}

fn table_to_json(table: &ModelTable) -> anyhow::Result<String> {
    let mut entries = Vec::with_capacity(table.len());
    for entry in table.iter() {
        let mut grid = serde_json::Map::new();
        for (key, values) in entry.grid.entries() {
            grid.insert(key.clone(), serde_json::to_value(values)?);
        }
        entries.push(serde_json::json!({
            "estimator": entry.estimator.name(),
            "grid": grid,
        }));
    }

    Ok(serde_json::to_string_pretty(&serde_json::json!({
        "family": table.family.as_str(),
        "entries": entries,
    }))?)
}

pub fn cmd_vocab() -> anyhow::Result<()> {
    section("Vocabulary");
    for fragment in vocabulary::all() {
        for (key, values) in fragment.entries() {
            println!(
                "  {:<20} {:<14} {}",
                fragment.name().white(),
                muted(key),
                format_values(values)
            );
        }
    }
    println!();
    Ok(())
}

#[allow(clippy::too_many_arguments)]
pub fn cmd_run(
    config_path: Option<&std::path::Path>,
    family: Option<&str>,
    seed: Option<u64>,
    samples: Option<usize>,
    features: Option<usize>,
    scaler: Option<&str>,
    budget: Option<usize>,
    quiet: bool,
) -> anyhow::Result<()> {
    section("Run");

    let mut config = match config_path {
        Some(path) => RunConfig::from_json_file(path)?,
        None => RunConfig::default(),
    };
    if let Some(family) = family {
        config.family = family.parse()?;
    }
    if let Some(seed) = seed {
        config = config.with_seed(seed);
    }
    if let Some(n) = samples {
        config.data.n_samples = n;
    }
    if let Some(n) = features {
        config.data.n_features = n;
    }
    if let Some(scaler) = scaler {
        config.scaler = match scaler {
            "standard" => ScalerType::Standard,
            "minmax" => ScalerType::MinMax,
            "maxabs" => ScalerType::MaxAbs,
            "none" => ScalerType::None,
            _ => anyhow::bail!("Invalid scaler type: {}", scaler),
        };
    }
    if quiet {
        config = config.quiet();
    }

    let mut planner = match budget {
        Some(b) => SearchPlanner::new().with_candidate_budget(b),
        None => SearchPlanner::new(),
    };

    step_run(&format!("Dispatching {}", config.family.as_str().cyan()));
    let start = Instant::now();
    let outcome = pipeline::run(&config, &mut planner)?;
    step_done(&format!(
        "{} rows × {} cols in {:?}",
        outcome.n_samples,
        outcome.n_features,
        start.elapsed()
    ));

    println!();
    println!("  {:<28} {:>12}", muted("Estimator"), muted("Candidates"));
    println!("  {}", dim(&"─".repeat(42)));
    for plan in planner.plans() {
        println!("  {:<28} {:>12}", plan.estimator.name().white(), plan.n_candidates);
    }
    println!("  {}", dim(&"─".repeat(42)));
    println!(
        "  {:<28} {:>12}",
        muted("Total"),
        planner.total_candidates().to_string().white().bold()
    );
    println!();

    Ok(())
}
