//! Edge-list parser and node extractor.
//!
//! Input is line-oriented UTF-8 text. Per line, after trimming:
//! blank lines and `#` comment lines are skipped; anything else must be
//! `<from> <to> [weight]` split on runs of whitespace. A missing weight
//! is exactly 1; a present weight must parse as a finite number >= 0.

use crate::error::RouteError;
use crate::graph::Graph;

/// Build a [`Graph`] from edge-list text.
///
/// With `undirected`, every parsed edge also installs the reverse
/// direction at the same weight. Repeated ordered pairs overwrite
/// (last write wins). Fails fast on the first malformed line.
pub fn parse_edges(text: &str, undirected: bool) -> Result<Graph, RouteError> {
    let mut graph = Graph::new();
    for raw in text.lines() {
        let line = raw.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        let fields: Vec<&str> = line.split_whitespace().collect();
        if fields.len() < 2 {
            return Err(RouteError::MalformedLine {
                line: line.to_string(),
            });
        }
        let weight = match fields.get(2) {
            Some(field) => parse_weight(field).ok_or_else(|| RouteError::InvalidWeight {
                line: line.to_string(),
            })?,
            None => 1.0,
        };
        graph.set_edge(fields[0], fields[1], weight);
        if undirected {
            graph.set_edge(fields[1], fields[0], weight);
        }
    }
    Ok(graph)
}

/// Parse a weight field. Finite and non-negative, or None.
fn parse_weight(field: &str) -> Option<f64> {
    let weight: f64 = field.parse().ok()?;
    (weight.is_finite() && weight >= 0.0).then_some(weight)
}

/// Sorted distinct node identifiers appearing in the edge text.
///
/// Lenient counterpart of [`parse_edges`] for populating suggestion
/// lists: it reads only the first two fields per line, never validates
/// weights, and silently skips lines with fewer than two fields.
pub fn extract_nodes(text: &str) -> Vec<String> {
    let mut nodes: Vec<String> = Vec::new();
    for raw in text.lines() {
        let line = raw.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        let mut fields = line.split_whitespace();
        if let (Some(from), Some(to)) = (fields.next(), fields.next()) {
            for id in [from, to] {
                if !nodes.iter().any(|n| n == id) {
                    nodes.push(id.to_string());
                }
            }
        }
    }
    nodes.sort();
    nodes
}

// ─── Tests ───────────────────────────────────────────────────────────────────
