//! word-graph: interactive word-ladder queries over a one-letter-
//! substitution graph.
//!
//! Builds the graph from a word list (one word per line), then either
//! runs the interactive ladder loop or answers a single BFS tier query.

use std::path::PathBuf;
use std::time::Instant;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing::info;
use tracing_subscriber::EnvFilter;

mod ingest;
mod repl;

#[derive(Parser)]
#[command(name = "word-graph", version, about)]
struct Cli {
    /// Word list file, one word per line.
    words: PathBuf,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Print BFS distance tiers from a word instead of running the
    /// interactive ladder loop.
    Bfs {
        word: String,
        /// Maximum hop distance to explore.
        #[arg(default_value_t = 2)]
        distance: usize,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    let started = Instant::now();
    let mut graph = ingest::load_words(&cli.words)?;
    ingest::link_ladder_words(&mut graph)?;
    info!(
        vertices = graph.vertex_count(),
        edges = graph.edge_count(),
        build_ms = started.elapsed().as_secs_f64() * 1000.0,
        "graph built"
    );
    println!(
        ">> Built graph: {} words, {} edges ({:.1}ms)",
        graph.vertex_count(),
        graph.edge_count(),
        started.elapsed().as_secs_f64() * 1000.0
    );

    match cli.command {
        Some(Command::Bfs { word, distance }) => repl::run_bfs(&graph, &word, distance),
        None => repl::run(&graph),
    }
}
