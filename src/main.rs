use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use hamcycle::generate::{planted_cycle, ring_with_chords, split_components};
use hamcycle::graph::Graph;
use hamcycle::search::{search_with_stats, SearchConfig, Strategy};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::io;
use std::path::{Path, PathBuf};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

/// Exact Hamiltonian cycle search on directed graphs.
#[derive(Parser)]
#[command(name = "hamcycle", version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Search a graph file for a Hamiltonian cycle
    Solve {
        /// Graph in edge-list format (`n`, `m`, then `m` lines `u v`)
        #[arg(short, long)]
        input: PathBuf,
        /// Vertex the cycle starts and ends at
        #[arg(short, long, default_value_t = 0)]
        start: usize,
        /// Pool size or thread budget; values below 1 run sequentially (default: auto-detect)
        #[arg(short, long, allow_negative_numbers = true)]
        threads: Option<i64>,
        /// Which engine(s) to run
        #[arg(short, long, value_enum, default_value_t = Mode::Both)]
        mode: Mode,
        /// Print search counters after each run
        #[arg(long)]
        stats: bool,
    },
    /// Write a generated graph in edge-list format
    Generate {
        /// Number of vertices
        #[arg(short = 'n', long)]
        vertices: usize,
        /// Graph family
        #[arg(short, long, value_enum)]
        kind: Kind,
        /// Output file (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
        /// Seed for randomized families
        #[arg(long)]
        seed: Option<u64>,
    },
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Mode {
    /// Budgeted OS threads
    Threads,
    /// Work-stealing pool
    ForkJoin,
    /// Budgeted threads, then the work-stealing pool
    Both,
    /// Single-threaded backtracking
    Sequential,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Kind {
    /// Ring with misleading `u -> u+2` chords listed first
    Ring,
    /// Random cycle plus random distractor edges
    Planted,
    /// Two disjoint rings (no Hamiltonian cycle)
    Split,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("hamcycle=info")),
        )
        .with_writer(io::stderr)
        .init();

    match Cli::parse().command {
        Commands::Solve {
            input,
            start,
            threads,
            mode,
            stats,
        } => solve(&input, start, threads, mode, stats),
        Commands::Generate {
            vertices,
            kind,
            output,
            seed,
        } => generate(vertices, kind, output, seed),
    }
}

fn solve(input: &Path, start: usize, threads: Option<i64>, mode: Mode, stats: bool) -> Result<()> {
    let graph = Graph::load_from_file(input)
        .with_context(|| format!("failed to load graph from {}", input.display()))?;
    info!(
        vertices = graph.vertex_count(),
        edges = graph.edge_count(),
        "loaded {}",
        input.display()
    );

    let threads = match threads {
        Some(t) if t < 1 => {
            warn!(requested = t, "thread count below 1; running sequentially");
            1
        }
        Some(t) => usize::try_from(t).unwrap_or(usize::MAX),
        None => match SearchConfig::default().strategy {
            Strategy::WorkStealing { pool_size } => pool_size,
            _ => 1,
        },
    };

    let strategies = match mode {
        Mode::Threads => vec![Strategy::BudgetedThreads { budget: threads }],
        Mode::ForkJoin => vec![Strategy::WorkStealing { pool_size: threads }],
        Mode::Both => vec![
            Strategy::BudgetedThreads { budget: threads },
            Strategy::WorkStealing { pool_size: threads },
        ],
        Mode::Sequential => vec![Strategy::Sequential],
    };

    let labelled = strategies.len() > 1;
    for strategy in strategies {
        let cfg = SearchConfig { strategy, start };
        let report = search_with_stats(&graph, &cfg)
            .with_context(|| format!("{strategy} search failed"))?;

        if labelled {
            println!("[{strategy}]");
        }
        match &report.cycle {
            Some(cycle) => {
                let closed: Vec<usize> = cycle.closed().collect();
                println!("Hamiltonian cycle: {closed:?}");
            }
            None => println!("No Hamiltonian cycle found."),
        }
        println!("Time: {} ms", report.elapsed.as_millis());
        if stats {
            let s = report.stats;
            println!(
                "Stats: steps={} branch_points={} units_spawned={} threads_spawned={} late_closures={}",
                s.steps, s.branch_points, s.units_spawned, s.threads_spawned, s.late_closures
            );
        }
    }
    Ok(())
}

fn generate(vertices: usize, kind: Kind, output: Option<PathBuf>, seed: Option<u64>) -> Result<()> {
    let graph = match kind {
        Kind::Ring => ring_with_chords(vertices),
        Kind::Split => split_components(vertices),
        Kind::Planted => {
            let mut rng = match seed {
                Some(s) => StdRng::seed_from_u64(s),
                None => StdRng::from_os_rng(),
            };
            planted_cycle(vertices, 2 * vertices, &mut rng).0
        }
    };

    match output {
        Some(path) => {
            graph
                .save_to_file(&path)
                .with_context(|| format!("failed to write {}", path.display()))?;
            info!(kind = ?kind, vertices, edges = graph.edge_count(), "wrote {}", path.display());
        }
        None => graph
            .write_to(io::stdout().lock())
            .context("failed to write graph to stdout")?,
    }
    Ok(())
}
