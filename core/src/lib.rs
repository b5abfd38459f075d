//! word-graph-core: In-memory word graph engine.
//!
//! A pure Rust library that maintains an adjacency list over named,
//! densely-numbered vertices and provides BFS exploration by distance
//! tier and Dijkstra shortest path queries.
//!
//! The graph is built once (vertices, then edges) and queried read-only
//! afterwards. Each query owns its own distance/predecessor buffers, so
//! nothing is shared between invocations.

mod bfs;
mod error;
mod frontier;
mod graph;
mod name_index;
mod search;

pub use bfs::{bfs_by_distance, TierResult};
pub use error::{GraphError, Result};
pub use frontier::PriorityFrontier;
pub use graph::{Distance, Edge, Graph, Neighbors, VertexId, Weight, INFINITY};
pub use name_index::NameIndex;
pub use search::{
    distances_from, predecessors_from, shortest_path, DistanceMap, PathOutcome, PredecessorMap,
    SearchStats,
};
