use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use anyhow::{Context, Result};
use word_graph_core::Graph;

/// Read a word list (one word per line, terminators stripped) and insert
/// each word as a vertex.
///
/// A duplicate word aborts the build: the graph's dense ids would no
/// longer match the input, so the list is treated as corrupt.
pub fn load_words(path: &Path) -> Result<Graph> {
    let file = File::open(path)
        .with_context(|| format!("cannot open word list '{}'", path.display()))?;

    let mut graph = Graph::new();
    for (lineno, line) in BufReader::new(file).lines().enumerate() {
        let line = line.with_context(|| format!("read error at line {}", lineno + 1))?;
        let word = line.trim();
        if word.is_empty() {
            continue;
        }
        graph
            .create_vertex(word)
            .with_context(|| format!("bad word list entry at line {}", lineno + 1))?;
    }
    Ok(graph)
}

/// Connect every pair of words differing by exactly one letter with a
/// unit-weight edge.
///
/// For each vertex's word, each letter position is substituted with each
/// of a..z and the result looked up; a hit gets the edge for this
/// direction only. The full sweep reaches every word, so the reverse
/// direction is inserted when the other word's turn comes — both
/// directions end up present exactly once.
pub fn link_ladder_words(graph: &mut Graph) -> Result<()> {
    for v in 0..graph.vertex_count() {
        let word = graph.name_of(v).unwrap_or_default().to_string();
        let mut candidate = word.clone().into_bytes();

        for i in 0..candidate.len() {
            let original = candidate[i];
            for letter in b'a'..=b'z' {
                if letter == original {
                    continue;
                }
                candidate[i] = letter;
                let Ok(substituted) = std::str::from_utf8(&candidate) else {
                    continue;
                };
                if let Some(u) = graph.id_of(substituted) {
                    if u != v {
                        graph.add_edge(v, u, 1)?;
                    }
                }
            }
            candidate[i] = original;
        }
    }
    Ok(())
}
