use crate::error::{GraphError, Result};
use crate::name_index::NameIndex;

/// Dense vertex identifier: assigned at creation time, contiguous from 0,
/// never reused.
pub type VertexId = usize;

/// Edge weight. Non-negative by construction; the word-ladder application
/// uses unit weights throughout, but the engine accepts any value.
pub type Weight = u32;

/// Accumulated path weight. Wider than `Weight` so summing along a path
/// cannot overflow in practice.
pub type Distance = u64;

/// Sentinel distance for "not reachable (yet)".
pub const INFINITY: Distance = Distance::MAX;

/// A directed, weighted edge in an adjacency row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Edge {
    pub to: VertexId,
    pub weight: Weight,
}

/// In-memory graph: vertex records (id → word), a word → id index, and
/// per-vertex adjacency rows.
///
/// Edges are directed. The word-ladder application gets undirected
/// connectivity by inserting both directions explicitly; the engine never
/// assumes symmetry. Adjacency rows keep insertion order, which determines
/// neighbor enumeration order and therefore tie-breaking during search.
/// Parallel edges are stored as-is, without de-duplication.
#[derive(Debug, Default)]
pub struct Graph {
    names: Vec<String>,
    index: NameIndex,
    adjacency: Vec<Vec<Edge>>,
}

impl Graph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-allocate for a known vertex count.
    pub fn with_capacity(vertex_count: usize) -> Self {
        Self {
            names: Vec::with_capacity(vertex_count),
            index: NameIndex::new(),
            adjacency: Vec::with_capacity(vertex_count),
        }
    }

    /// Create a vertex for `name`, returning its id.
    ///
    /// Fails with `DuplicateVertex` if the name is already indexed.
    pub fn create_vertex(&mut self, name: &str) -> Result<VertexId> {
        let id = self.index.insert(name)?;
        debug_assert_eq!(id, self.names.len());
        self.names.push(name.to_string());
        self.adjacency.push(Vec::new());
        Ok(id)
    }

    /// Append a directed edge `from → to` with the given weight.
    ///
    /// Adding the same edge twice yields two parallel entries; callers
    /// that care about weight lookup under parallel edges get the
    /// first-inserted entry (see [`Graph::edge_weight`]).
    pub fn add_edge(&mut self, from: VertexId, to: VertexId, weight: Weight) -> Result<()> {
        self.check_vertex(from)?;
        self.check_vertex(to)?;
        self.adjacency[from].push(Edge { to, weight });
        Ok(())
    }

    /// Iterate the neighbor ids of `v` in edge insertion order.
    ///
    /// The iterator is lazy, finite, and restartable (it is `Clone`); an
    /// out-of-range id yields an empty sequence.
    pub fn neighbors(&self, v: VertexId) -> Neighbors<'_> {
        Neighbors {
            inner: self.edges(v).iter(),
        }
    }

    /// Adjacency row of `v`: (neighbor, weight) entries in insertion order.
    pub fn edges(&self, v: VertexId) -> &[Edge] {
        self.adjacency.get(v).map(|row| row.as_slice()).unwrap_or(&[])
    }

    /// Weight of the first-inserted `from → to` entry, if any.
    ///
    /// Under parallel edges the first-inserted entry wins; later entries
    /// with different weights are never consulted.
    pub fn edge_weight(&self, from: VertexId, to: VertexId) -> Option<Weight> {
        self.edges(from).iter().find(|e| e.to == to).map(|e| e.weight)
    }

    /// Word for a vertex id. O(1).
    pub fn name_of(&self, id: VertexId) -> Option<&str> {
        self.names.get(id).map(|s| s.as_str())
    }

    /// Vertex id for a word. O(log n).
    pub fn id_of(&self, name: &str) -> Option<VertexId> {
        self.index.lookup(name)
    }

    /// Like [`Graph::id_of`], but an unknown word is a typed `NotFound`
    /// error — for callers that treat resolution failure as reportable
    /// rather than an ordinary absence.
    pub fn resolve(&self, name: &str) -> Result<VertexId> {
        self.id_of(name)
            .ok_or_else(|| GraphError::NotFound(name.to_string()))
    }

    pub fn vertex_count(&self) -> usize {
        self.names.len()
    }

    pub fn edge_count(&self) -> usize {
        self.adjacency.iter().map(|row| row.len()).sum()
    }

    pub(crate) fn check_vertex(&self, id: VertexId) -> Result<()> {
        if id < self.names.len() {
            Ok(())
        } else {
            Err(GraphError::InvalidVertex {
                id,
                vertex_count: self.names.len(),
            })
        }
    }
}

/// Lazy neighbor-id sequence for one vertex. Exhaustion (`None`) is the
/// terminator; cloning restarts the enumeration from its current position.
#[derive(Debug, Clone)]
pub struct Neighbors<'a> {
    inner: std::slice::Iter<'a, Edge>,
}

impl Iterator for Neighbors<'_> {
    type Item = VertexId;

    fn next(&mut self) -> Option<VertexId> {
        self.inner.next().map(|e| e.to)
    }
}
