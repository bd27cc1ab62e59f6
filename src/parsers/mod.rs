//! Parsers for the line-oriented edge-list input format.

pub mod edges;

pub use edges::{extract_nodes, parse_edges};
