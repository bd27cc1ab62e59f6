//! Typed query errors.
//!
//! Parse failures abort the whole query and no partial graph is kept.
//! An unreachable target is NOT an error; see `query::RouteOutcome`.

use thiserror::Error;

/// Everything that can make a route query fail.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RouteError {
    /// Edge line with fewer than two whitespace-separated fields.
    /// Carries the trimmed line text.
    #[error("invalid edge line (need at least two fields): {line}")]
    MalformedLine { line: String },

    /// Weight field that is not a finite number >= 0.
    /// Carries the trimmed line text.
    #[error("invalid weight (need a finite number >= 0): {line}")]
    InvalidWeight { line: String },

    /// Source or target identifier absent from the built graph.
    #[error("node '{0}' is not in the graph")]
    NodeNotFound(String),
}

impl RouteError {
    /// True for errors raised while parsing the edge text.
    pub fn is_parse_error(&self) -> bool {
        matches!(
            self,
            Self::MalformedLine { .. } | Self::InvalidWeight { .. }
        )
    }
}

// ─── Tests ───────────────────────────────────────────────────────────────────
