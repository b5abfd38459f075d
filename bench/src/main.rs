use std::time::Instant;

use word_graph_core::{bfs_by_distance, distances_from, shortest_path, Graph, PathOutcome};

fn main() {
    let args: Vec<String> = std::env::args().collect();

    let mode = args.get(1).map(|s| s.as_str()).unwrap_or("all");
    let vertex_count: usize = args.get(2).and_then(|s| s.parse().ok()).unwrap_or(10_000);

    if mode == "help" || mode == "--help" {
        println!("Usage: word-graph-bench [mode] [vertex_count]");
        println!();
        println!("Modes:");
        println!("  all      Run all generators and benchmark each (default)");
        println!("  chain    Single long path (worst-case ladder depth)");
        println!("  ring     Ring lattice with random shortcuts (small-world)");
        println!("  random   Uniform random weighted edges");
        println!();
        println!("Default vertex_count: 10000");
        println!("Note: the linear-scan frontier makes Dijkstra O(V^2).");
        return;
    }

    println!("word-graph-bench");
    println!("================");
    println!();

    let generators: Vec<(&str, fn(usize) -> Graph)> = match mode {
        "chain" => vec![("Chain", gen_chain)],
        "ring" => vec![("Ring lattice + shortcuts", gen_ring)],
        "random" => vec![("Uniform random weighted", gen_random)],
        "all" => vec![
            ("Chain", gen_chain as fn(usize) -> Graph),
            ("Ring lattice + shortcuts", gen_ring),
            ("Uniform random weighted", gen_random),
        ],
        _ => {
            eprintln!("Unknown mode: {}. Use --help for options.", mode);
            return;
        }
    };

    for (name, generator) in generators {
        run_benchmark(name, generator, vertex_count);
    }
}

fn run_benchmark(name: &str, generator: fn(usize) -> Graph, vertex_count: usize) {
    println!("--- {} ---", name);
    println!("Target: {} vertices", vertex_count);

    let t = Instant::now();
    let graph = generator(vertex_count);
    let gen_time = t.elapsed();
    println!(
        "Generated in {:.2}s — {} vertices, {} edges",
        gen_time.as_secs_f64(),
        graph.vertex_count(),
        graph.edge_count()
    );

    // BFS tiering from vertex 0
    println!();
    println!("{:>8} {:>8} {:>12} {:>10}", "bound", "tiers", "visited", "time");
    println!("{:->8} {:->8} {:->12} {:->10}", "", "", "", "");

    for bound in [1, 2, 3, 5, 10, 20, 50] {
        let t = Instant::now();
        let result = match bfs_by_distance(&graph, 0, bound) {
            Ok(r) => r,
            Err(e) => {
                eprintln!("bfs failed: {}", e);
                return;
            }
        };
        let elapsed = t.elapsed();
        println!(
            "{:>8} {:>8} {:>12} {:>8.1}ms",
            bound,
            result.tiers.len(),
            result.nodes_visited,
            elapsed.as_secs_f64() * 1000.0
        );
        // Stop if we already found everything
        if result.nodes_visited >= graph.vertex_count() {
            println!("{:>8} (entire graph reached)", "");
            break;
        }
    }

    // Single-source distances, then path to the far end
    let far = graph.vertex_count() - 1;

    println!();
    let t = Instant::now();
    let labeled = distances_from(&graph, 0);
    let elapsed = t.elapsed();
    match labeled {
        Ok(map) => println!(
            "distances_from(0): settled {} / relaxed {} in {:.1}ms",
            map.stats.settled,
            map.stats.relaxations,
            elapsed.as_secs_f64() * 1000.0
        ),
        Err(e) => {
            eprintln!("distances_from failed: {}", e);
            return;
        }
    }

    let t = Instant::now();
    let outcome = shortest_path(&graph, 0, far);
    let elapsed = t.elapsed();
    match outcome {
        Ok(PathOutcome::Path(p)) => println!(
            "Shortest path 0 → {}: {} edges in {:.1}ms",
            far,
            p.len() - 1,
            elapsed.as_secs_f64() * 1000.0
        ),
        Ok(_) => println!(
            "Shortest path 0 → {}: no path ({:.1}ms)",
            far,
            elapsed.as_secs_f64() * 1000.0
        ),
        Err(e) => eprintln!("shortest_path failed: {}", e),
    }
    println!();
}

// ---------------------------------------------------------------------------
// Generators — deterministic, single-threaded
// ---------------------------------------------------------------------------

/// Simple LCG for deterministic, fast pseudo-random numbers.
struct FastRng(u64);

impl FastRng {
    fn new(seed: u64) -> Self {
        Self(seed)
    }
    fn next(&mut self, max: u64) -> u64 {
        self.0 = self.0.wrapping_mul(6364136223846793005).wrapping_add(1);
        (self.0 >> 33) % max
    }
}

fn add_vertices(graph: &mut Graph, count: usize) {
    for i in 0..count {
        // Synthetic vertex names stand in for words.
        graph
            .create_vertex(&format!("w{}", i))
            .expect("generated names are unique");
    }
}

/// Single undirected chain: maximal ladder depth, one path per pair.
fn gen_chain(vertex_count: usize) -> Graph {
    let mut graph = Graph::with_capacity(vertex_count);
    add_vertices(&mut graph, vertex_count);
    for i in 0..vertex_count.saturating_sub(1) {
        let _ = graph.add_edge(i, i + 1, 1);
        let _ = graph.add_edge(i + 1, i, 1);
    }
    graph
}

/// Ring lattice with random shortcut edges: short paths, high tie density.
fn gen_ring(vertex_count: usize) -> Graph {
    let mut graph = Graph::with_capacity(vertex_count);
    let mut rng = FastRng::new(67890);
    add_vertices(&mut graph, vertex_count);

    for i in 0..vertex_count {
        let next = (i + 1) % vertex_count;
        let _ = graph.add_edge(i, next, 1);
        let _ = graph.add_edge(next, i, 1);
    }
    // ~5% shortcut edges
    for _ in 0..vertex_count / 20 {
        let a = rng.next(vertex_count as u64) as usize;
        let b = rng.next(vertex_count as u64) as usize;
        if a != b {
            let _ = graph.add_edge(a, b, 1);
            let _ = graph.add_edge(b, a, 1);
        }
    }
    graph
}

/// Uniform random directed edges with weights 1..=10, ~8 per vertex.
fn gen_random(vertex_count: usize) -> Graph {
    let mut graph = Graph::with_capacity(vertex_count);
    let mut rng = FastRng::new(54321);
    add_vertices(&mut graph, vertex_count);

    for _ in 0..vertex_count * 8 {
        let from = rng.next(vertex_count as u64) as usize;
        let to = rng.next(vertex_count as u64) as usize;
        if from != to {
            let weight = (rng.next(10) + 1) as u32;
            let _ = graph.add_edge(from, to, weight);
        }
    }
    graph
}
