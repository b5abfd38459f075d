use crate::error::Result;
use crate::frontier::PriorityFrontier;
use crate::graph::{Distance, Graph, VertexId, INFINITY};

/// Per-query work counters, returned alongside every search result
/// instead of being tracked in ambient process-wide state.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SearchStats {
    /// Vertices whose distance was finalized (extracted with a finite
    /// distance).
    pub settled: usize,
    /// Successful relaxations: strict distance improvements.
    pub relaxations: usize,
}

/// Single-source distance labeling.
#[derive(Debug)]
pub struct DistanceMap {
    /// One entry per vertex; `INFINITY` marks unreachable vertices.
    pub distances: Vec<Distance>,
    pub stats: SearchStats,
}

/// Single-source distance labeling with predecessor tracking.
#[derive(Debug)]
pub struct PredecessorMap {
    /// Immediate predecessor on a shortest path from the source; `None`
    /// for the source itself and for unreachable vertices.
    pub predecessors: Vec<Option<VertexId>>,
    pub distances: Vec<Distance>,
    pub stats: SearchStats,
}

/// Outcome of a single-pair shortest path query.
///
/// The original word-ladder program returned an empty sequence both for
/// `source == dest` and for "no path", leaving the caller to tell them
/// apart by context. The variants make that distinction explicit while
/// [`PathOutcome::vertices`] preserves the empty-sequence convention.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PathOutcome {
    /// `[source, …, dest]`; length = edge count + 1.
    Path(Vec<VertexId>),
    /// `source == dest`: a zero-length ladder.
    Trivial,
    /// No path from source to dest.
    Unreachable,
}

impl PathOutcome {
    /// The vertex sequence: empty for [`Trivial`](Self::Trivial) and
    /// [`Unreachable`](Self::Unreachable).
    pub fn vertices(&self) -> &[VertexId] {
        match self {
            PathOutcome::Path(path) => path,
            PathOutcome::Trivial | PathOutcome::Unreachable => &[],
        }
    }

    pub fn is_path(&self) -> bool {
        matches!(self, PathOutcome::Path(_))
    }
}

/// The label-setting loop shared by all three queries.
///
/// Every vertex starts unsettled with an infinite distance; the frontier
/// repeatedly yields the minimum-distance vertex. Once the extracted
/// minimum is still infinite, nothing left is reachable and the search
/// short-circuits — a valid terminal state, not an error.
///
/// Weights are fetched through `edge_weight`, so under parallel edges the
/// first-inserted entry's weight is the one relaxed with.
fn relax_from(graph: &Graph, source: VertexId) -> (Vec<Distance>, Vec<Option<VertexId>>, SearchStats) {
    let n = graph.vertex_count();
    let mut distance = vec![INFINITY; n];
    let mut predecessor: Vec<Option<VertexId>> = vec![None; n];
    let mut frontier = PriorityFrontier::new(n);
    let mut stats = SearchStats::default();

    distance[source] = 0;

    while let Some(u) = frontier.extract_min(&distance) {
        if distance[u] == INFINITY {
            break;
        }
        stats.settled += 1;

        for v in graph.neighbors(u) {
            let Some(w) = graph.edge_weight(u, v) else {
                continue;
            };
            let candidate = distance[u].saturating_add(Distance::from(w));
            if candidate < distance[v] {
                distance[v] = candidate;
                predecessor[v] = Some(u);
                stats.relaxations += 1;
            }
        }
    }

    (distance, predecessor, stats)
}

/// Shortest total weight from `source` to every vertex.
///
/// Unreachable vertices keep the `INFINITY` sentinel. Fails with
/// `InvalidVertex` if `source` is out of range.
pub fn distances_from(graph: &Graph, source: VertexId) -> Result<DistanceMap> {
    graph.check_vertex(source)?;
    let (distances, _, stats) = relax_from(graph, source);
    Ok(DistanceMap { distances, stats })
}

/// Same traversal as [`distances_from`], additionally tracking each
/// vertex's immediate predecessor on a shortest path from `source`.
pub fn predecessors_from(graph: &Graph, source: VertexId) -> Result<PredecessorMap> {
    graph.check_vertex(source)?;
    let (distances, predecessors, stats) = relax_from(graph, source);
    Ok(PredecessorMap {
        predecessors,
        distances,
        stats,
    })
}

/// Shortest path from `source` to `dest`, reconstructed by walking the
/// predecessor array backward from `dest`.
///
/// Fails with `InvalidVertex` if either endpoint is out of range; an
/// unreachable `dest` is an ordinary [`PathOutcome::Unreachable`] value.
pub fn shortest_path(graph: &Graph, source: VertexId, dest: VertexId) -> Result<PathOutcome> {
    graph.check_vertex(source)?;
    graph.check_vertex(dest)?;

    if source == dest {
        return Ok(PathOutcome::Trivial);
    }

    let labels = predecessors_from(graph, source)?;

    let mut path = vec![dest];
    let mut current = dest;
    while current != source {
        match labels.predecessors[current] {
            Some(prev) => {
                path.push(prev);
                current = prev;
            }
            None => return Ok(PathOutcome::Unreachable),
        }
    }
    path.reverse();
    Ok(PathOutcome::Path(path))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::GraphError;

    /// cat–cot–cog–dog ladder, undirected unit edges.
    fn make_ladder() -> Graph {
        let mut g = Graph::new();
        for w in ["cat", "cot", "cog", "dog"] {
            g.create_vertex(w).unwrap();
        }
        for (a, b) in [(0, 1), (1, 2), (2, 3)] {
            g.add_edge(a, b, 1).unwrap();
            g.add_edge(b, a, 1).unwrap();
        }
        g
    }

    fn make_weighted() -> Graph {
        // 0 →(2) 1 →(3) 3, and a direct 0 →(9) 3; plus 0 →(1) 2 →(1) 3.
        let mut g = Graph::new();
        for w in ["a", "b", "c", "d"] {
            g.create_vertex(w).unwrap();
        }
        g.add_edge(0, 1, 2).unwrap();
        g.add_edge(1, 3, 3).unwrap();
        g.add_edge(0, 3, 9).unwrap();
        g.add_edge(0, 2, 1).unwrap();
        g.add_edge(2, 3, 1).unwrap();
        g
    }

    #[test]
    fn test_ladder_path() {
        // Scenario: shortest_path(cat, dog) → [cat, cot, cog, dog], length 3.
        let g = make_ladder();
        let outcome = shortest_path(&g, 0, 3).unwrap();
        assert_eq!(outcome, PathOutcome::Path(vec![0, 1, 2, 3]));
        assert_eq!(outcome.vertices().len() - 1, 3);
    }

    #[test]
    fn test_ladder_distances() {
        let g = make_ladder();
        let map = distances_from(&g, 0).unwrap();
        assert_eq!(map.distances, vec![0, 1, 2, 3]);
        assert_eq!(map.stats.settled, 4);
    }

    #[test]
    fn test_source_distance_zero_nowhere_negative() {
        let g = make_weighted();
        let map = distances_from(&g, 0).unwrap();
        assert_eq!(map.distances[0], 0);
        // Distance is unsigned; check the finite entries are sane instead.
        assert!(map.distances.iter().all(|&d| d == INFINITY || d <= 9));
    }

    #[test]
    fn test_triangle_inequality() {
        let g = make_weighted();
        let map = distances_from(&g, 0).unwrap();
        for u in 0..g.vertex_count() {
            if map.distances[u] == INFINITY {
                continue;
            }
            for e in g.edges(u) {
                assert!(
                    map.distances[e.to] <= map.distances[u] + Distance::from(e.weight),
                    "triangle inequality violated on edge {} → {}",
                    u,
                    e.to
                );
            }
        }
    }

    #[test]
    fn test_weighted_prefers_cheap_route() {
        let g = make_weighted();
        let outcome = shortest_path(&g, 0, 3).unwrap();
        assert_eq!(outcome, PathOutcome::Path(vec![0, 2, 3]));
        let map = distances_from(&g, 0).unwrap();
        assert_eq!(map.distances[3], 2);
    }

    #[test]
    fn test_path_weight_sum_matches_distance() {
        let g = make_weighted();
        let map = distances_from(&g, 0).unwrap();
        let outcome = shortest_path(&g, 0, 3).unwrap();
        let path = outcome.vertices();
        let total: Distance = path
            .windows(2)
            .map(|pair| Distance::from(g.edge_weight(pair[0], pair[1]).unwrap()))
            .sum();
        assert_eq!(total, map.distances[3]);
    }

    #[test]
    fn test_source_equals_dest_is_trivial() {
        // Scenario: lone vertex with no edges.
        let mut g = Graph::new();
        g.create_vertex("lone").unwrap();
        let outcome = shortest_path(&g, 0, 0).unwrap();
        assert_eq!(outcome, PathOutcome::Trivial);
        assert!(outcome.vertices().is_empty());

        let map = distances_from(&g, 0).unwrap();
        assert_eq!(map.distances, vec![0]);
    }

    #[test]
    fn test_disconnected_pair_unreachable() {
        // Scenario: {"aaa", "zzz"} with no connecting edges.
        let mut g = Graph::new();
        g.create_vertex("aaa").unwrap();
        g.create_vertex("zzz").unwrap();
        let outcome = shortest_path(&g, 0, 1).unwrap();
        assert_eq!(outcome, PathOutcome::Unreachable);
        assert!(outcome.vertices().is_empty());
        assert!(!outcome.is_path());

        let map = distances_from(&g, 0).unwrap();
        assert_eq!(map.distances, vec![0, INFINITY]);
    }

    #[test]
    fn test_unreachable_short_circuit_settles_component_only() {
        let mut g = Graph::new();
        for w in ["a", "b", "x", "y"] {
            g.create_vertex(w).unwrap();
        }
        g.add_edge(0, 1, 1).unwrap();
        g.add_edge(2, 3, 1).unwrap();
        let map = distances_from(&g, 0).unwrap();
        // Only the source's component is settled before the short-circuit.
        assert_eq!(map.stats.settled, 2);
        assert_eq!(map.distances[2], INFINITY);
        assert_eq!(map.distances[3], INFINITY);
    }

    #[test]
    fn test_predecessors() {
        let g = make_ladder();
        let map = predecessors_from(&g, 0).unwrap();
        assert_eq!(map.predecessors, vec![None, Some(0), Some(1), Some(2)]);
    }

    #[test]
    fn test_predecessor_none_for_unreachable() {
        let mut g = Graph::new();
        g.create_vertex("a").unwrap();
        g.create_vertex("b").unwrap();
        let map = predecessors_from(&g, 0).unwrap();
        assert_eq!(map.predecessors, vec![None, None]);
    }

    #[test]
    fn test_directed_edge_no_reverse_reachability() {
        let mut g = Graph::new();
        g.create_vertex("a").unwrap();
        g.create_vertex("b").unwrap();
        g.add_edge(0, 1, 1).unwrap();
        assert_eq!(shortest_path(&g, 0, 1).unwrap(), PathOutcome::Path(vec![0, 1]));
        assert_eq!(shortest_path(&g, 1, 0).unwrap(), PathOutcome::Unreachable);
    }

    #[test]
    fn test_invalid_endpoints() {
        let g = make_ladder();
        assert!(matches!(
            distances_from(&g, 17),
            Err(GraphError::InvalidVertex { id: 17, .. })
        ));
        assert!(matches!(
            predecessors_from(&g, 17),
            Err(GraphError::InvalidVertex { id: 17, .. })
        ));
        assert!(matches!(
            shortest_path(&g, 0, 17),
            Err(GraphError::InvalidVertex { id: 17, .. })
        ));
        assert!(matches!(
            shortest_path(&g, 17, 0),
            Err(GraphError::InvalidVertex { id: 17, .. })
        ));
    }

    #[test]
    fn test_repeated_queries_identical() {
        let g = make_weighted();
        let first = distances_from(&g, 0).unwrap();
        let second = distances_from(&g, 0).unwrap();
        assert_eq!(first.distances, second.distances);
        assert_eq!(first.stats, second.stats);

        let p1 = shortest_path(&g, 0, 3).unwrap();
        let p2 = shortest_path(&g, 0, 3).unwrap();
        assert_eq!(p1, p2);
    }

    #[test]
    fn test_equal_weight_tie_break_deterministic() {
        // Diamond with two unit-weight routes 0→1→3 and 0→2→3. Vertex 1 is
        // relaxed first (insertion order), and once settled its relaxation
        // of 3 is never displaced by the equal-cost route through 2.
        let mut g = Graph::new();
        for w in ["s", "m1", "m2", "t"] {
            g.create_vertex(w).unwrap();
        }
        g.add_edge(0, 1, 1).unwrap();
        g.add_edge(0, 2, 1).unwrap();
        g.add_edge(1, 3, 1).unwrap();
        g.add_edge(2, 3, 1).unwrap();
        let outcome = shortest_path(&g, 0, 3).unwrap();
        assert_eq!(outcome, PathOutcome::Path(vec![0, 1, 3]));
    }

    #[test]
    fn test_parallel_edges_first_weight_wins() {
        let mut g = Graph::new();
        g.create_vertex("a").unwrap();
        g.create_vertex("b").unwrap();
        g.add_edge(0, 1, 5).unwrap();
        g.add_edge(0, 1, 1).unwrap();
        // The later, cheaper entry is never consulted.
        let map = distances_from(&g, 0).unwrap();
        assert_eq!(map.distances[1], 5);
    }

    #[test]
    fn test_zero_weight_edges() {
        let mut g = Graph::new();
        for w in ["a", "b", "c"] {
            g.create_vertex(w).unwrap();
        }
        g.add_edge(0, 1, 0).unwrap();
        g.add_edge(1, 2, 0).unwrap();
        let map = distances_from(&g, 0).unwrap();
        assert_eq!(map.distances, vec![0, 0, 0]);
        assert_eq!(
            shortest_path(&g, 0, 2).unwrap(),
            PathOutcome::Path(vec![0, 1, 2])
        );
    }

    #[test]
    fn test_relaxation_count_on_chain() {
        let mut g = Graph::new();
        for i in 0..4 {
            g.create_vertex(&format!("w{}", i)).unwrap();
        }
        for i in 0..3 {
            g.add_edge(i, i + 1, 1).unwrap();
        }
        let map = distances_from(&g, 0).unwrap();
        // Each chain vertex past the source is improved exactly once.
        assert_eq!(map.stats.relaxations, 3);
        assert_eq!(map.stats.settled, 4);
    }
}
