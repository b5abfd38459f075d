use crate::graph::{Distance, VertexId};

/// Working set of unsettled vertex ids for label-setting search.
///
/// `extract_min` is a linear scan over the remaining set — O(remaining)
/// per call, O(V²) across a full search. That is a deliberate behavioral
/// property, not an oversight: ties on distance are broken by the set's
/// insertion order (first-inserted among equal minima wins), which keeps
/// path outputs deterministic on graphs with equal-weight edges. A binary
/// heap would change the tie-break order and therefore the output.
#[derive(Debug)]
pub struct PriorityFrontier {
    unsettled: Vec<VertexId>,
}

impl PriorityFrontier {
    /// Frontier holding every vertex of a graph with `vertex_count`
    /// vertices, in id order.
    pub fn new(vertex_count: usize) -> Self {
        Self {
            unsettled: (0..vertex_count).collect(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.unsettled.is_empty()
    }

    pub fn len(&self) -> usize {
        self.unsettled.len()
    }

    /// Remove and return the unsettled vertex with minimum `distance`.
    ///
    /// Strict `<` comparison, so the earliest-inserted vertex among equal
    /// minima wins. Removal preserves the relative order of the rest.
    pub fn extract_min(&mut self, distance: &[Distance]) -> Option<VertexId> {
        if self.unsettled.is_empty() {
            return None;
        }
        let mut min_pos = 0;
        for pos in 1..self.unsettled.len() {
            if distance[self.unsettled[pos]] < distance[self.unsettled[min_pos]] {
                min_pos = pos;
            }
        }
        Some(self.unsettled.remove(min_pos))
    }
}
