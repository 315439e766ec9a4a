//! Tree traversal: the walk loop and its terminal result

use serde::Serialize;
use serde_json::Value;
use std::sync::Arc;

use crate::error::{NodeError, TreeError};

use super::builder::TreeBuilder;
use super::decision::{Decision, NodeMap, Siblings, StepContext};
use super::node::{FallbackContext, FallbackFn, TreeNode};

/// Terminal result of one traversal.
#[derive(Debug, Clone, Serialize)]
pub struct Traversal {
    /// Key of the last node the walk stood on: the terminal node, or the
    /// failing node when a fallback ended the walk.
    pub last_node: String,
    /// Keys of every node whose index call completed, in visitation order,
    /// terminal node included. A node whose index failed is not appended.
    pub path: Vec<String>,
    /// The terminal decision's output, `Value::Null` when the terminal index
    /// returned no decision, or a fallback's return value.
    pub output: Value,
}

/// A static mapping of named nodes plus a root and an optional shared
/// fallback.
///
/// Built once via [`Tree::builder`] and reused across any number of
/// [`start`](Tree::start) calls. Traversal state is local to each call, so
/// overlapping walks on one tree do not interfere.
pub struct Tree {
    nodes: Arc<NodeMap>,
    root_key: String,
    fallback: Option<Box<FallbackFn>>,
    max_steps: Option<usize>,
}

impl std::fmt::Debug for Tree {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Tree")
            .field("nodes", &self.nodes.keys().collect::<Vec<_>>())
            .field("root_key", &self.root_key)
            .field("fallback", &self.fallback.is_some())
            .field("max_steps", &self.max_steps)
            .finish()
    }
}

impl Tree {
    pub fn builder() -> TreeBuilder {
        TreeBuilder::new()
    }

    pub(crate) fn new(
        nodes: Arc<NodeMap>,
        root_key: String,
        fallback: Option<Box<FallbackFn>>,
        max_steps: Option<usize>,
    ) -> Self {
        Self {
            nodes,
            root_key,
            fallback,
            max_steps,
        }
    }

    /// Walk the tree from the root, feeding `input` to the root's index.
    ///
    /// Resolves each step at a single suspension point: an index that decides
    /// immediately never suspends, one that defers is awaited. Returns the
    /// terminal [`Traversal`], the wrapped result of a triggered fallback, or
    /// the unrecovered failure.
    pub async fn start(&self, input: Value) -> Result<Traversal, TreeError> {
        let mut path: Vec<String> = Vec::new();
        let mut key = self.root_key.clone();
        let mut node = self
            .nodes
            .get(&key)
            .cloned()
            .ok_or_else(|| TreeError::MissingRoot(key.clone()))?;
        let mut input = input;

        loop {
            if let Some(limit) = self.max_steps {
                if path.len() >= limit {
                    log::error!("traversal exceeded step limit of {}", limit);
                    return Err(TreeError::StepLimitExceeded { limit });
                }
            }

            // The fallback protocol hands the failing call's input to the
            // recovery function, so keep a copy across the decide call.
            let ctx = StepContext {
                input: input.clone(),
                siblings: Siblings::new(Arc::clone(&self.nodes)),
            };

            match node.index().decide(ctx).await {
                Ok(decision) => {
                    path.push(key.clone());
                    match decision {
                        Some(Decision {
                            next: Some(next_key),
                            output,
                        }) => {
                            log::debug!("node '{}' routed to '{}'", key, next_key);
                            node = self.nodes.get(&next_key).cloned().ok_or_else(|| {
                                TreeError::UnresolvedNext {
                                    from: key.clone(),
                                    to: next_key.clone(),
                                }
                            })?;
                            key = next_key;
                            input = output;
                        }
                        Some(Decision { next: None, output }) => {
                            log::debug!("node '{}' ended the walk", key);
                            return Ok(Traversal {
                                last_node: key,
                                path,
                                output,
                            });
                        }
                        None => {
                            log::debug!("node '{}' returned no decision, ending the walk", key);
                            return Ok(Traversal {
                                last_node: key,
                                path,
                                output: Value::Null,
                            });
                        }
                    }
                }
                Err(error) => return self.recover(&node, &key, error, path, input),
            }
        }
    }

    /// Redirect a node failure to the nearest applicable fallback, or
    /// propagate it. Recovery is terminal: the fallback's value ends the
    /// walk, never resumes it.
    fn recover(
        &self,
        node: &TreeNode,
        key: &str,
        error: NodeError,
        path: Vec<String>,
        input: Value,
    ) -> Result<Traversal, TreeError> {
        match node.fallback_override().or_else(|| self.fallback.as_deref()) {
            Some(recovery) => {
                log::warn!("node '{}' failed, recovering via fallback: {}", key, error);
                let output = recovery(FallbackContext {
                    error,
                    node: key,
                    path: &path,
                    input,
                });
                Ok(Traversal {
                    last_node: key.to_string(),
                    path,
                    output,
                })
            }
            None => {
                log::error!("node '{}' failed with no applicable fallback: {}", key, error);
                Err(TreeError::Node {
                    key: key.to_string(),
                    source: error,
                })
            }
        }
    }
}
