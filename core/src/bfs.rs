use crate::error::Result;
use crate::graph::{Graph, VertexId};

/// Result of a tiered BFS exploration.
#[derive(Debug)]
pub struct TierResult {
    /// `tiers[k]` holds the vertices at exactly k hops from the source.
    /// Tier 0 is the source itself.
    pub tiers: Vec<Vec<VertexId>>,
    /// Total vertices reached, including the source.
    pub nodes_visited: usize,
}

/// Explore outward from `source`, grouping vertices by hop distance.
///
/// Tier k+1 is every not-yet-visited neighbor of tier k's members, in the
/// adjacency enumeration order of the vertices that discovered them.
/// Exploration stops after `max_distance + 1` tiers have been produced or
/// the frontier empties, whichever comes first — a graph connected that
/// far yields exactly `max_distance + 1` tiers, a sparser one fewer.
///
/// Fails with `InvalidVertex` if `source` is out of range.
pub fn bfs_by_distance(graph: &Graph, source: VertexId, max_distance: usize) -> Result<TierResult> {
    graph.check_vertex(source)?;

    let mut visited = vec![false; graph.vertex_count()];
    visited[source] = true;

    let mut tiers = vec![vec![source]];
    let mut nodes_visited = 1;

    while tiers.len() <= max_distance {
        let mut next = Vec::new();
        for &u in &tiers[tiers.len() - 1] {
            for v in graph.neighbors(u) {
                if !visited[v] {
                    visited[v] = true;
                    next.push(v);
                }
            }
        }
        if next.is_empty() {
            break;
        }
        nodes_visited += next.len();
        tiers.push(next);
    }

    Ok(TierResult {
        tiers,
        nodes_visited,
    })
}
