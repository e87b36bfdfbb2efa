// SPDX-License-Identifier: Apache-2.0
// Copyright 2024-2026 Dragonscale Team

use anyhow::{Context, Result};
use clap::Parser;
use prettytable::{Cell, Row, Table};
use rwh_algo::algo::procedures::parse_edges;
use rwh_algo::{RwhConfig, RwhResult, compute};
use std::io::Read;
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "rwh")]
#[command(about = "Random walk hierarchy of a directed link list", long_about = None)]
struct Cli {
    /// JSON array of [source, target] or [source, target, weight] edges (stdin if omitted)
    input: Option<PathBuf>,

    /// Edges carry a third weight element
    #[arg(long)]
    weighted: bool,

    /// Exponent on an edge's share of its source's outgoing weight
    #[arg(long, default_value_t = 1.0)]
    alpha: f64,

    /// Decay parameter controlling the restart mass
    #[arg(long, default_value_t = 4.0)]
    decay: f64,

    /// L1 distance at which iteration stops
    #[arg(long, default_value_t = 1e-7)]
    precision: f64,

    /// Maximum number of iteration rounds
    #[arg(long, default_value_t = 10_000)]
    max_rounds: usize,

    /// Only print the K densest nodes
    #[arg(long)]
    top: Option<usize>,

    /// Skip edge and parameter validation
    #[arg(long)]
    no_check: bool,

    /// Log every iteration round (sets the log level to info unless RUST_LOG is set)
    #[arg(long)]
    verbose: bool,

    /// Print the result as JSON
    #[arg(long)]
    json: bool,
}

impl Cli {
    fn config(&self) -> RwhConfig {
        RwhConfig::default()
            .weighted(self.weighted)
            .alpha(self.alpha)
            .decay(self.decay)
            .precision(self.precision)
            .max_rounds(self.max_rounds)
            .verbose(self.verbose)
            .check_params(!self.no_check)
    }

    /// Default log directive when `RUST_LOG` is unset.
    fn default_log_directive(&self) -> &'static str {
        if self.verbose { "info" } else { "warn" }
    }

    fn log_filter(&self) -> EnvFilter {
        EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(self.default_log_directive()))
    }

    fn read_input(&self) -> Result<String> {
        match &self.input {
            Some(path) => std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read {}", path.display())),
            None => {
                let mut buf = String::new();
                std::io::stdin()
                    .read_to_string(&mut buf)
                    .context("Failed to read stdin")?;
                Ok(buf)
            }
        }
    }
}

fn print_table(result: &RwhResult) {
    println!("RWH: {:.6}", result.rwh);
    match result.final_distance {
        Some(d) => println!(
            "Rounds: {} (converged: {}, last distance: {:.3e})",
            result.rounds, result.converged, d
        ),
        None => println!("Rounds: {}", result.rounds),
    }

    let mut table = Table::new();
    table.add_row(Row::new(vec![
        Cell::new("rank"),
        Cell::new("node"),
        Cell::new("density"),
    ]));
    for (i, r) in result.ranking.iter().enumerate() {
        table.add_row(Row::new(vec![
            Cell::new(&(i + 1).to_string()),
            Cell::new(&r.node.to_string()),
            Cell::new(&format!("{:.8}", r.density)),
        ]));
    }
    table.printstd();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    tracing_subscriber::fmt()
        .with_env_filter(cli.log_filter())
        .with_writer(std::io::stderr)
        .init();
    let config = cli.config();

    let raw = cli.read_input()?;
    let value: serde_json::Value = serde_json::from_str(&raw).context("Input is not valid JSON")?;
    let edges = parse_edges(&value, config.weighted)?;
    info!(edges = edges.len(), "Loaded link list");

    let mut result = compute(&edges, &config)?;

    if let Some(k) = cli.top {
        result.ranking.truncate(k);
    }

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        print_table(&result);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_verbose_raises_default_log_level() {
        let cli = Cli::try_parse_from(["rwh", "--verbose"]).unwrap();
        assert!(cli.config().verbose);
        assert_eq!(cli.default_log_directive(), "info");

        let quiet = Cli::try_parse_from(["rwh", "edges.json"]).unwrap();
        assert!(!quiet.config().verbose);
        assert_eq!(quiet.default_log_directive(), "warn");
    }

    #[test]
    fn test_flags_map_onto_config() {
        let cli = Cli::try_parse_from([
            "rwh",
            "--weighted",
            "--alpha",
            "2",
            "--max-rounds",
            "5",
            "--no-check",
        ])
        .unwrap();
        let config = cli.config();
        assert!(config.weighted);
        assert_eq!(config.alpha, 2.0);
        assert_eq!(config.max_rounds, 5);
        assert!(!config.check_params);
        assert_eq!(config.decay, 4.0);
    }
}
