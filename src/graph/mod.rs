//! Weighted directed graph over string node identifiers.
//!
//! Wraps petgraph's DiGraph together with a `String → NodeIndex` map so
//! the solver can run on dense integer indices while callers keep using
//! identifiers at the boundary.

use std::collections::HashMap;

use petgraph::graph::{DiGraph, NodeIndex};
use petgraph::visit::EdgeRef;

/// Adjacency structure for route queries.
///
/// Node weights are the identifiers themselves; edge weights are the
/// parsed distances. Built once per query, immutable afterwards as far
/// as the solver is concerned.
#[derive(Debug, Clone, Default)]
pub struct Graph {
    digraph: DiGraph<String, f64>,
    /// Maps node id → petgraph NodeIndex.
    node_index: HashMap<String, NodeIndex>,
}

impl Graph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a node, returning its index. No-op if already present.
    pub fn ensure_node(&mut self, id: &str) -> NodeIndex {
        if let Some(&idx) = self.node_index.get(id) {
            return idx;
        }
        let idx = self.digraph.add_node(id.to_string());
        self.node_index.insert(id.to_string(), idx);
        idx
    }

    /// Set the weight of the directed edge `from → to`, creating both
    /// endpoints as needed. Overwrites any prior weight for that exact
    /// ordered pair (last write wins).
    pub fn set_edge(&mut self, from: &str, to: &str, weight: f64) {
        let a = self.ensure_node(from);
        let b = self.ensure_node(to);
        self.digraph.update_edge(a, b, weight);
    }

    pub fn contains(&self, id: &str) -> bool {
        self.node_index.contains_key(id)
    }

    pub fn index_of(&self, id: &str) -> Option<NodeIndex> {
        self.node_index.get(id).copied()
    }

    /// Identifier for an index previously handed out by this graph.
    pub fn id_of(&self, idx: NodeIndex) -> &str {
        &self.digraph[idx]
    }

    /// Weight of the directed edge `from → to`, if present.
    pub fn edge_weight(&self, from: &str, to: &str) -> Option<f64> {
        let a = self.index_of(from)?;
        let b = self.index_of(to)?;
        let e = self.digraph.find_edge(a, b)?;
        self.digraph.edge_weight(e).copied()
    }

    /// Outgoing `(neighbor, weight)` pairs for `u`.
    pub fn neighbors(&self, u: NodeIndex) -> impl Iterator<Item = (NodeIndex, f64)> + '_ {
        self.digraph.edges(u).map(|e| (e.target(), *e.weight()))
    }

    /// All `(index, id)` pairs in first-encounter order.
    pub fn nodes(&self) -> impl Iterator<Item = (NodeIndex, &str)> {
        self.digraph
            .node_indices()
            .map(|i| (i, self.digraph[i].as_str()))
    }

    /// Node identifiers in first-encounter order.
    pub fn node_ids(&self) -> impl Iterator<Item = &str> {
        self.digraph.node_weights().map(String::as_str)
    }

    pub fn node_count(&self) -> usize {
        self.digraph.node_count()
    }

    pub fn edge_count(&self) -> usize {
        self.digraph.edge_count()
    }
}

// ─── Tests ───────────────────────────────────────────────────────────────────
