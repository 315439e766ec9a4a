//! Decision records and the per-step context handed to index functions

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use super::node::TreeNode;

/// Key → node mapping of a tree. Keys are caller-chosen; uniqueness comes
/// from mapping semantics.
pub(crate) type NodeMap = HashMap<String, Arc<TreeNode>>;

/// What an index function decided: where the walk goes next and what value
/// it carries there.
///
/// `next: Some(key)` continues at the node registered under `key`, feeding it
/// `output` as input. `next: None` ends the walk with `output` as the final
/// output. The output channel is the only way data threads through a walk.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Decision {
    /// Key of the next node to visit, if any.
    pub next: Option<String>,
    /// Value passed to the next node's index, or returned as the final
    /// output on termination.
    #[serde(default)]
    pub output: Value,
}

impl Decision {
    /// Continue the walk at `next`, carrying `output` as its input.
    pub fn descend(next: impl Into<String>, output: impl Into<Value>) -> Self {
        Self {
            next: Some(next.into()),
            output: output.into(),
        }
    }

    /// End the walk here with a final output.
    pub fn finish(output: impl Into<Value>) -> Self {
        Self {
            next: None,
            output: output.into(),
        }
    }
}

/// Argument to a single index invocation.
pub struct StepContext {
    /// The previous step's output, or the value passed to `start` for the
    /// root call.
    pub input: Value,
    /// Lookup handle over the nodes of the tree being walked.
    pub siblings: Siblings,
}

/// Non-owning lookup handle over a tree's node map.
///
/// Lets an index function route on which keys exist without holding the
/// nodes themselves.
#[derive(Clone)]
pub struct Siblings {
    nodes: Arc<NodeMap>,
}

impl Siblings {
    pub(crate) fn new(nodes: Arc<NodeMap>) -> Self {
        Self { nodes }
    }

    /// Whether a node is registered under `key`.
    pub fn contains(&self, key: &str) -> bool {
        self.nodes.contains_key(key)
    }

    /// Keys of every registered node, in no particular order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.nodes.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}

impl fmt::Debug for Siblings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.nodes.keys()).finish()
    }
}
