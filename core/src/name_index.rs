use std::collections::BTreeMap;

use crate::error::{GraphError, Result};
use crate::graph::VertexId;

/// Ordered word → vertex id index.
///
/// Backed by a `BTreeMap`, so insert and lookup are O(log n) with
/// lexicographic ordering over the word's bytes. Ids are handed out
/// sequentially in insertion order; there is no deletion, so the next id
/// is always the current entry count.
#[derive(Debug, Default)]
pub struct NameIndex {
    map: BTreeMap<String, VertexId>,
}

impl NameIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Index a new word, allocating the next sequential vertex id.
    ///
    /// A word that is already present is rejected — the caller decides
    /// whether a duplicate in its input is fatal.
    pub fn insert(&mut self, name: &str) -> Result<VertexId> {
        if self.map.contains_key(name) {
            return Err(GraphError::DuplicateVertex(name.to_string()));
        }
        let id = self.map.len();
        self.map.insert(name.to_string(), id);
        Ok(id)
    }

    /// Resolve a word to its vertex id.
    pub fn lookup(&self, name: &str) -> Option<VertexId> {
        self.map.get(name).copied()
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }
}
