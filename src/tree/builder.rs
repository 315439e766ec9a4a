// SPDX-License-Identifier: MIT

//! Tree construction
//!
//! Collects the key → node mapping, root key, tree-wide fallback, and the
//! optional step limit, then validates and produces an immutable [`Tree`].

use serde_json::Value;
use std::sync::Arc;

use crate::error::TreeError;

use super::decision::NodeMap;
use super::executor::Tree;
use super::node::{FallbackContext, FallbackFn, TreeNode};

/// Entry-node key used when none is configured.
pub const DEFAULT_ROOT_KEY: &str = "root";

pub struct TreeBuilder {
    nodes: NodeMap,
    root_key: String,
    fallback: Option<Box<FallbackFn>>,
    max_steps: Option<usize>,
}

impl TreeBuilder {
    pub fn new() -> Self {
        Self {
            nodes: NodeMap::new(),
            root_key: DEFAULT_ROOT_KEY.to_string(),
            fallback: None,
            max_steps: None,
        }
    }

    /// Register a node under `key`. Registering the same key again replaces
    /// the earlier node (mapping semantics).
    pub fn node(mut self, key: impl Into<String>, node: TreeNode) -> Self {
        self.nodes.insert(key.into(), Arc::new(node));
        self
    }

    /// Entry-node key; defaults to [`DEFAULT_ROOT_KEY`].
    pub fn root(mut self, key: impl Into<String>) -> Self {
        self.root_key = key.into();
        self
    }

    /// Tree-wide fallback, used when a failing node has no override of its
    /// own.
    pub fn fallback<F>(mut self, f: F) -> Self
    where
        F: Fn(FallbackContext<'_>) -> Value + Send + Sync + 'static,
    {
        self.fallback = Some(Box::new(f));
        self
    }

    /// Upper bound on resolved steps per traversal. Unset by default: the
    /// engine does not bound walk depth on its own.
    pub fn max_steps(mut self, limit: usize) -> Self {
        self.max_steps = Some(limit);
        self
    }

    /// Validate and build. Fails fast with [`TreeError::MissingRoot`] when
    /// the root key names no registered node.
    pub fn build(self) -> Result<Tree, TreeError> {
        if !self.nodes.contains_key(&self.root_key) {
            return Err(TreeError::MissingRoot(self.root_key));
        }

        log::debug!(
            "built tree with {} nodes, root '{}'",
            self.nodes.len(),
            self.root_key
        );

        Ok(Tree::new(
            Arc::new(self.nodes),
            self.root_key,
            self.fallback,
            self.max_steps,
        ))
    }
}

impl Default for TreeBuilder {
    fn default() -> Self {
        Self::new()
    }
}
