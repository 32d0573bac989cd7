//! Error types for the disruption engine.
//!
//! Graph validation failures are fatal to construction and surfaced
//! immediately. Disconnection during scoring is deliberately *not* an error;
//! the scorer switches to its penalty path, and the greedy solver's early
//! exits are reported as termination reasons on its result.

use thiserror::Error;

/// Errors raised while building graphs or reading input tables.
#[derive(Debug, Error)]
pub enum Error {
    #[error("duplicate node id '{0}'")]
    DuplicateNode(String),

    #[error("edge {from}-{to} references unknown node '{node}'")]
    UnknownNode {
        from: String,
        to: String,
        node: String,
    },

    #[error("edge {from}-{to} has invalid weight {weight} (must be positive and finite)")]
    InvalidWeight {
        from: String,
        to: String,
        weight: f64,
    },

    #[error("duplicate edge {from}-{to}")]
    DuplicateEdge { from: String, to: String },

    #[error("self-loop on node '{0}'")]
    SelfLoop(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Convenience result type for engine operations.
pub type Result<T> = std::result::Result<T, Error>;
