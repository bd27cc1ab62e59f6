//! One-shot route queries: the boundary a presentation layer calls.
//!
//! parse → validate endpoints → solve → reconstruct. Each query builds
//! and owns its own [`crate::graph::Graph`] and result maps; nothing is
//! shared across calls, so queries are independent by construction.

use std::collections::HashMap;

use crate::error::RouteError;
use crate::parsers::parse_edges;
use crate::solver::dijkstra;

/// Inputs for a single shortest-route query.
#[derive(Debug, Clone, Copy)]
pub struct RouteQuery<'a> {
    /// Raw edge-list text, one `from to [weight]` per line.
    pub edges: &'a str,
    pub source: &'a str,
    pub target: &'a str,
    /// Install every edge in both directions.
    pub undirected: bool,
}

/// Whether the target was reached, and at what cost.
#[derive(Debug, Clone, PartialEq)]
pub enum RouteOutcome {
    /// Ordered route from source to target (both inclusive) and its
    /// total weight.
    Found { path: Vec<String>, total: f64 },
    /// No chain of edges connects source to target. A normal query
    /// result, not an error.
    Unreachable,
}

/// Successful query result: the outcome plus the full distance table
/// (unreached nodes carry +inf), kept for display and debugging.
#[derive(Debug, Clone, PartialEq)]
pub struct RouteReport {
    pub outcome: RouteOutcome,
    pub distances: HashMap<String, f64>,
}

/// Execute one query against freshly parsed edge text.
///
/// Fails fast on malformed edge lines and on a source or target that
/// the text never mentions; an unreachable target is reported as
/// [`RouteOutcome::Unreachable`] inside an `Ok` result.
pub fn run_query(query: &RouteQuery<'_>) -> Result<RouteReport, RouteError> {
    let graph = parse_edges(query.edges, query.undirected)?;
    if !graph.contains(query.source) {
        return Err(RouteError::NodeNotFound(query.source.to_string()));
    }
    let Some(target) = graph.index_of(query.target) else {
        return Err(RouteError::NodeNotFound(query.target.to_string()));
    };

    let paths = dijkstra(&graph, query.source)?;

    let distances: HashMap<String, f64> = graph
        .nodes()
        .map(|(idx, id)| (id.to_string(), paths.distance(idx)))
        .collect();

    let total = paths.distance(target);
    let outcome = if total.is_finite() {
        let path = paths
            .path_to(target)
            .into_iter()
            .map(|idx| graph.id_of(idx).to_string())
            .collect();
        RouteOutcome::Found { path, total }
    } else {
        RouteOutcome::Unreachable
    };

    Ok(RouteReport { outcome, distances })
}

// ─── Tests ───────────────────────────────────────────────────────────────────
