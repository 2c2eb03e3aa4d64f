/*
 * SPDX-FileCopyrightText: 2024 Matteo Dell'Acqua
 * SPDX-FileCopyrightText: 2025 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

use anyhow::{ensure, Context, Result};
use clap::{Parser, Subcommand};
use dsi_progress_logger::prelude::*;
use percolation_algo::prelude::*;
use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;
use webgraph::graphs::vec_graph::VecGraph;

/// Percolation experiments and depth-first orders
#[derive(Parser)]
#[command(name = "percolation")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Increase logging verbosity
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Estimate the percolation threshold with random trials
    Simulate {
        /// Side of the grid
        #[arg(short = 'n', long)]
        size: usize,

        /// Number of independent trials
        #[arg(short, long, default_value_t = 1)]
        trials: usize,

        /// Base seed (random if not given)
        #[arg(short, long)]
        seed: Option<u64>,

        /// Number of threads (rayon's default if not given)
        #[arg(short = 'j', long)]
        threads: Option<usize>,

        /// Stop a trial after opening more than this fraction of the sites
        /// (e.g., 0.594)
        #[arg(short, long)]
        budget: Option<f64>,
    },

    /// Open the sites listed in a file and show the resulting grid
    Replay {
        /// A file containing the grid size followed by (row, column) pairs
        file: PathBuf,

        /// Show the grid after every opened site
        #[arg(long)]
        steps: bool,
    },

    /// Print the reverse postorder of a graph
    Order {
        /// A file containing (source, target) pairs
        file: PathBuf,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    stderrlog::new()
        .verbosity(2 + cli.verbose as usize)
        .timestamp(stderrlog::Timestamp::Second)
        .init()?;

    let mut main_pl = progress_logger![display_memory = true];

    match cli.command {
        Commands::Simulate {
            size,
            trials,
            seed,
            threads,
            budget,
        } => {
            let seed = seed.unwrap_or_else(rand::random);
            main_pl.info(format_args!("Using seed {}", seed));

            let mut batch = Trials::new(size).num_trials(trials).seed(seed);
            if let Some(fraction) = budget {
                ensure!(
                    fraction > 0.0 && fraction <= 1.0,
                    "The budget must be in (0..1], got {}",
                    fraction
                );
                batch = batch.max_open_fraction(fraction)?;
            }

            let thread_pool = Threads::from(threads).build()?;
            let outcomes = batch.run(&thread_pool, &mut main_pl)?;

            for outcome in &outcomes {
                println!(
                    "{} {} {} {} {:.6}{}",
                    outcome.n,
                    outcome.n * outcome.n,
                    outcome.opened,
                    outcome.attempts,
                    outcome.threshold(),
                    if outcome.percolated { "" } else { " (stopped)" }
                );
            }

            let stats = TrialStats::from_outcomes(&outcomes);
            println!(
                "{} of {} trials percolated",
                stats.num_percolated, stats.num_trials
            );
            println!("mean                    = {:.6}", stats.mean);
            println!("stddev                  = {:.6}", stats.stddev);
            println!(
                "95% confidence interval = [{:.6}, {:.6}]",
                stats.confidence_lo, stats.confidence_hi
            );
        }
        Commands::Replay { file, steps } => {
            let sequence = SiteSequence::load(&file)
                .with_context(|| format!("Could not read sites from {}", file.display()))?;
            main_pl.info(format_args!(
                "Opening {} sites on a {}x{} grid",
                sequence.sites.len(),
                sequence.n,
                sequence.n
            ));

            let perc = if steps {
                let mut perc = Percolation::new(sequence.n)?;
                for &(row, col) in &sequence.sites {
                    perc.open(row, col)?;
                    println!("{}", perc);
                }
                perc
            } else {
                sequence.replay()?
            };

            print!("{}", perc);
            println!("{} open sites", perc.num_open_sites());
            if perc.percolates() {
                println!("percolates");
            } else {
                println!("does not percolate");
            }
        }
        Commands::Order { file } => {
            let arcs = read_arcs(BufReader::new(
                File::open(&file).with_context(|| format!("Could not open {}", file.display()))?,
            ))
            .with_context(|| format!("Could not read arcs from {}", file.display()))?;
            let graph = VecGraph::from_arcs(arcs);

            let order = depth_first_order(&graph, &mut main_pl);
            for node in order.reverse_postorder() {
                println!("{}", node);
            }
        }
    }

    Ok(())
}
