use std::io::{self, BufRead, Write};
use std::time::Instant;

use anyhow::Result;
use word_graph_core::{bfs_by_distance, shortest_path, Graph, PathOutcome, VertexId};

/// Interactive ladder loop: read two words, print the shortest ladder
/// between them. An empty line (or EOF) at either prompt quits; an
/// unknown word re-prompts without running a query.
pub fn run(graph: &Graph) -> Result<()> {
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    loop {
        let Some(first) = prompt(&mut lines, ">> enter a word (ENTER to quit): ")? else {
            break;
        };
        let src = match graph.resolve(&first) {
            Ok(id) => id,
            Err(e) => {
                println!("{}, please try again", e);
                continue;
            }
        };

        let Some(second) = prompt(&mut lines, ">> enter another word: ")? else {
            break;
        };
        let dest = match graph.resolve(&second) {
            Ok(id) => id,
            Err(e) => {
                println!("{}, please try again", e);
                continue;
            }
        };

        let started = Instant::now();
        let outcome = shortest_path(graph, src, dest)?;
        let elapsed = started.elapsed();

        for line in ladder_lines(graph, &outcome) {
            println!("{}", line);
        }
        println!(">> query time: {:.1}ms", elapsed.as_secs_f64() * 1000.0);
        println!();
    }

    Ok(())
}

/// Run one BFS tier query and print each tier on its own line.
pub fn run_bfs(graph: &Graph, word: &str, distance: usize) -> Result<()> {
    let source = match graph.resolve(word) {
        Ok(id) => id,
        Err(e) => {
            println!("{}", e);
            return Ok(());
        }
    };

    let started = Instant::now();
    let result = bfs_by_distance(graph, source, distance)?;
    let elapsed = started.elapsed();

    for (d, tier) in result.tiers.iter().enumerate() {
        print!("distance {}: ", d);
        for &v in tier {
            print!("({},{}) ", v, word_of(graph, v));
        }
        println!();
    }
    println!(
        ">> {} vertices in {:.1}ms",
        result.nodes_visited,
        elapsed.as_secs_f64() * 1000.0
    );
    Ok(())
}

/// Render a path outcome as printable lines: one word per ladder rung
/// plus a trailing length line, or the appropriate message.
fn ladder_lines(graph: &Graph, outcome: &PathOutcome) -> Vec<String> {
    match outcome {
        PathOutcome::Trivial => {
            vec!["** Those are the same word: ladder of length 0".to_string()]
        }
        PathOutcome::Unreachable => {
            vec!["** There is no word ladder between those two words".to_string()]
        }
        PathOutcome::Path(path) => {
            let mut lines = vec!["** Shortest word ladder:".to_string()];
            for &v in path {
                lines.push(format!("  {}", word_of(graph, v)));
            }
            lines.push(format!("Length: {}", path.len() - 1));
            lines
        }
    }
}

fn word_of(graph: &Graph, v: VertexId) -> &str {
    graph.name_of(v).unwrap_or("?")
}

/// Print `message`, then read one line. `None` means quit (empty line or
/// EOF).
fn prompt(
    lines: &mut impl Iterator<Item = io::Result<String>>,
    message: &str,
) -> Result<Option<String>> {
    print!("{}", message);
    io::stdout().flush()?;

    match lines.next() {
        Some(line) => {
            let word = line?.trim().to_string();
            if word.is_empty() {
                Ok(None)
            } else {
                Ok(Some(word))
            }
        }
        None => Ok(None),
    }
}
