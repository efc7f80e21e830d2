//! Path-finding demos.
//!
//! Run: cargo run --bin ornaments -- climb heightmap.txt
//!      cargo run --bin ornaments -- bench --size 128 --queries 500

use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand};
use ornaments_demos::{BenchConfig, BenchStats, Heightmap, bench};

#[derive(Parser, Debug)]
#[command(name = "ornaments", about = "A* path-finding demos", version)]
struct Args {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Fewest steps up a heightmap from `S` to `E`
    Climb {
        /// Heightmap file, one row of letters per line
        file: PathBuf,
    },
    /// Solve random queries on a random maze with and without a heuristic
    Bench {
        /// Maze side length
        #[arg(long, default_value_t = 64)]
        size: usize,

        /// Seed for maze and query generation
        #[arg(long, default_value_t = 42)]
        seed: u64,

        /// Number of start/goal queries
        #[arg(long, default_value_t = 200)]
        queries: usize,

        /// Percentage of wall cells
        #[arg(long, default_value_t = 30, value_parser = clap::value_parser!(u32).range(0..=100))]
        density: u32,
    },
}

fn main() {
    let args = Args::parse();
    if let Err(e) = run(args.command) {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
}

fn run(command: Command) -> anyhow::Result<()> {
    match command {
        Command::Climb { file } => {
            let text = std::fs::read_to_string(&file)
                .with_context(|| format!("reading {}", file.display()))?;
            let map = Heightmap::parse(&text)?;
            println!("from {}: {} steps", map.start(), map.climb()?);
            match map.best_trailhead() {
                Some((p, steps)) => println!("best trailhead {p}: {steps} steps"),
                None => println!("no trailhead reaches {}", map.goal()),
            }
        }
        Command::Bench {
            size,
            seed,
            queries,
            density,
        } => {
            let (astar, dijkstra) = bench(BenchConfig {
                size,
                seed,
                queries,
                density,
            });
            report("A*", &astar);
            report("zero", &dijkstra);
            for (i, cost) in &astar.hardest {
                println!("hardest: query {i} costs {cost}");
            }
        }
    }
    Ok(())
}

fn report(name: &str, stats: &BenchStats) {
    println!(
        "{name:>5}: {} found, {} unreachable, {} expansions in {:?}",
        stats.found, stats.unreachable, stats.expanded, stats.elapsed
    );
}
