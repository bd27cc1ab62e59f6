//! shortest-route — single-source shortest paths over a text edge list.
//!
//! Public API: `run_query()`, plus the `parsers`/`graph`/`solver` layers
//! it is built from.

pub mod error;
pub mod graph;
pub mod parsers;
pub mod query;
pub mod solver;

pub use error::RouteError;
pub use query::{RouteOutcome, RouteQuery, RouteReport, run_query};
