//! main.rs
//! Command-line entry point: pick a problem and an engine, solve, render
//! This Source Code Form is subject to the terms of The GNU General Public License v3.0
//! Copyright 2025 - Guilherme Santos. If a copy of the MPL was not distributed with this
//! file, You can obtain one at https://www.gnu.org/licenses/gpl-3.0.html

use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use tracing_subscriber::EnvFilter;

use mcsgraph::{display, input, supergraph};
use mcsgraph::{Genetic, GeneticConfig, McSplit, McsAlgorithm, Result};

#[derive(Parser)]
#[command(name = "mcsgraph", version, about = "Maximum common subgraph / minimum common supergraph solver")]
struct Args {
    /// Input file: n1, an n1 x n1 adjacency matrix, n2, an n2 x n2 adjacency
    /// matrix, all whitespace separated
    input: PathBuf,

    #[arg(long, value_enum, default_value = "subgraph")]
    problem: Problem,

    #[arg(long, value_enum, default_value = "mc-split")]
    algorithm: Algorithm,

    /// Population size of the genetic engine
    #[arg(long, default_value_t = 256)]
    genomes: usize,

    /// Number of generations of the genetic engine
    #[arg(long, default_value_t = 512)]
    generations: usize,

    /// Shuffle the whole population instead of single tribes every this many
    /// generations
    #[arg(long, default_value_t = 32)]
    shuffle_interval: usize,

    /// Number of tribes the population is partitioned into
    #[arg(long, default_value_t = 4)]
    tribes: usize,

    /// Probability of crossover per genome pair
    #[arg(long, default_value_t = 0.9)]
    crossover: f64,

    /// Probability of mutation per genome per generation
    #[arg(long, default_value_t = 0.5)]
    mutation: f64,

    /// Seed of the genetic engine's random stream
    #[arg(long, default_value_t = 13)]
    seed: u64,
}

#[derive(Copy, Clone, PartialEq, Eq, ValueEnum)]
enum Problem {
    /// Maximum common subgraph
    Subgraph,
    /// Minimum common supergraph
    Supergraph,
}

#[derive(Copy, Clone, PartialEq, Eq, ValueEnum)]
enum Algorithm {
    /// Exact branch-and-bound search
    McSplit,
    /// Population-based heuristic, approximate but fast on larger graphs
    Genetic,
}

fn main() {
    tracing_subscriber::fmt().with_env_filter(EnvFilter::from_default_env()).init();

    let args = Args::parse();
    if let Err(error) = run(args) {
        eprintln!("error: {error}");
        std::process::exit(1);
    }
}

fn run(args: Args) -> Result<()> {
    let (mut g1, mut g2) = input::read_file(&args.input)?;

    // The genetic engine requires the first graph to be the smaller one, so
    // orchestration swaps here and the display swaps the columns back.
    let swapped = g1.n > g2.n;
    if swapped {
        std::mem::swap(&mut g1, &mut g2);
    }

    let algorithm: Box<dyn McsAlgorithm> = match args.algorithm {
        Algorithm::McSplit => Box::new(McSplit),
        Algorithm::Genetic => Box::new(Genetic::new(GeneticConfig {
            n_genomes: args.genomes,
            n_generations: args.generations,
            n_cb: args.shuffle_interval,
            n_tribes: args.tribes,
            p_crossover: args.crossover,
            p_mutation: args.mutation,
            seed: args.seed,
        })?),
    };

    match args.problem {
        Problem::Subgraph => {
            let mcs = algorithm.compute(&g1, &g2)?;
            print!("{}", display::subgraph_report(&mcs, swapped));
        }
        Problem::Supergraph => {
            let result = supergraph::compute(&g1, &g2, algorithm.as_ref())?;
            print!("{}", display::supergraph_report(&result, swapped));
        }
    }
    Ok(())
}
