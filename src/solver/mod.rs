//! Dijkstra single-source shortest paths over a [`Graph`].
//!
//! The frontier is a binary min-heap with lazy deletion: a relaxation
//! pushes a fresh entry and leaves any stale ones in place; a popped
//! entry whose node is already visited is skipped. Equal-distance ties
//! break by node identifier ascending, so runs are reproducible.

use std::cmp::Ordering;
use std::collections::BinaryHeap;

use petgraph::graph::NodeIndex;

use crate::error::RouteError;
use crate::graph::Graph;

// ─── Frontier ────────────────────────────────────────────────────────────────

/// Heap entry: a tentative distance and the node it was pushed for.
///
/// Ordered as a min-heap on (dist, id). `dist` is a sum of weights that
/// were validated finite and non-negative at parse time, so it is never
/// NaN and `partial_cmp` always succeeds.
struct FrontierEntry {
    dist: f64,
    id: String,
    node: NodeIndex,
}

impl PartialEq for FrontierEntry {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for FrontierEntry {}

impl Ord for FrontierEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reversed: BinaryHeap is a max-heap, the smallest entry must pop first.
        other
            .dist
            .partial_cmp(&self.dist)
            .unwrap_or(Ordering::Equal)
            .then_with(|| other.id.cmp(&self.id))
    }
}

impl PartialOrd for FrontierEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

// ─── Result maps ─────────────────────────────────────────────────────────────

/// Finalized result of one solver run, indexed by [`NodeIndex`].
///
/// Read-only once returned: distances are +inf for unreached nodes,
/// predecessors are `None` for the source and for unreached nodes.
#[derive(Debug, Clone)]
pub struct ShortestPaths {
    dist: Vec<f64>,
    prev: Vec<Option<NodeIndex>>,
}

impl ShortestPaths {
    /// Shortest distance from the source, +inf if unreached.
    pub fn distance(&self, node: NodeIndex) -> f64 {
        self.dist[node.index()]
    }

    /// Node immediately before `node` on its shortest path, if any.
    pub fn predecessor(&self, node: NodeIndex) -> Option<NodeIndex> {
        self.prev[node.index()]
    }

    /// Walk predecessor links back from `target`, then reverse into
    /// source → target order.
    ///
    /// An unreached target has no predecessor, so the walk stops
    /// immediately and yields just `[target]`. Callers must check
    /// `distance(target).is_finite()` before trusting the route.
    pub fn path_to(&self, target: NodeIndex) -> Vec<NodeIndex> {
        let mut path = Vec::new();
        let mut cur = Some(target);
        while let Some(node) = cur {
            path.push(node);
            cur = self.prev[node.index()];
        }
        path.reverse();
        path
    }
}

// ─── Dijkstra ────────────────────────────────────────────────────────────────

/// Run Dijkstra's algorithm from `source` over the whole graph.
///
/// Fails with [`RouteError::NodeNotFound`] if `source` is not a node of
/// `graph`. Weights are assumed non-negative (enforced at parse time).
pub fn dijkstra(graph: &Graph, source: &str) -> Result<ShortestPaths, RouteError> {
    let Some(src) = graph.index_of(source) else {
        return Err(RouteError::NodeNotFound(source.to_string()));
    };

    let n = graph.node_count();
    let mut dist = vec![f64::INFINITY; n];
    let mut prev: Vec<Option<NodeIndex>> = vec![None; n];
    let mut visited = vec![false; n];
    dist[src.index()] = 0.0;

    let mut frontier: BinaryHeap<FrontierEntry> = BinaryHeap::new();
    frontier.push(FrontierEntry {
        dist: 0.0,
        id: graph.id_of(src).to_string(),
        node: src,
    });

    while let Some(entry) = frontier.pop() {
        let u = entry.node;
        if visited[u.index()] {
            // stale entry shadowed by an earlier relaxation
            continue;
        }
        visited[u.index()] = true;

        for (v, weight) in graph.neighbors(u) {
            let alt = entry.dist + weight;
            if alt < dist[v.index()] {
                dist[v.index()] = alt;
                prev[v.index()] = Some(u);
                frontier.push(FrontierEntry {
                    dist: alt,
                    id: graph.id_of(v).to_string(),
                    node: v,
                });
            }
        }
    }

    Ok(ShortestPaths { dist, prev })
}

// ─── Tests ───────────────────────────────────────────────────────────────────
