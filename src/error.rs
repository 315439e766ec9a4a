// SPDX-License-Identifier: MIT

//! Typed error handling for arbor-rs
//!
//! Two layers: `NodeError` is whatever a node's index function raises;
//! `TreeError` is what the engine itself raises around it (unresolvable
//! references, unrecovered node failures, the optional step limit).

use thiserror::Error;

/// Failure raised by a node's index function.
#[derive(Debug, Error)]
pub enum NodeError {
    /// A plain message, for callers that fail with sentinel strings
    /// (`Err("no such branch".into())`).
    #[error("{0}")]
    Message(String),

    /// A real error value from the node's own logic.
    #[error("{0}")]
    Source(#[from] Box<dyn std::error::Error + Send + Sync>),
}

impl NodeError {
    /// Create a message failure.
    pub fn msg(message: impl Into<String>) -> Self {
        Self::Message(message.into())
    }
}

impl From<&str> for NodeError {
    fn from(s: &str) -> Self {
        Self::Message(s.to_string())
    }
}

impl From<String> for NodeError {
    fn from(s: String) -> Self {
        Self::Message(s)
    }
}

/// Top-level error type for tree construction and traversal.
#[derive(Debug, Error)]
pub enum TreeError {
    /// The root key names no registered node. Raised at build time.
    #[error("root node '{0}' is not registered in the tree")]
    MissingRoot(String),

    /// A decision routed to a key with no registered node.
    #[error("node '{from}' routed to unknown node '{to}'")]
    UnresolvedNext { from: String, to: String },

    /// A node failed and no fallback applied; the node's own failure is the
    /// source.
    #[error("node '{key}' failed: {source}")]
    Node {
        key: String,
        #[source]
        source: NodeError,
    },

    /// A traversal resolved more steps than the configured limit allows.
    #[error("traversal exceeded the step limit of {limit}")]
    StepLimitExceeded { limit: usize },
}
