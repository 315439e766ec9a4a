// SPDX-License-Identifier: MIT

//! Tree nodes and the decision seam they wrap
//!
//! A [`TreeNode`] pairs caller-supplied decision logic (its *index*) with an
//! optional per-node recovery fallback. The [`Index`] trait is the one
//! contract for both synchronous and deferred logic: the walk awaits every
//! call at a single point, so an immediate implementation resolves without
//! suspending and the duality stays invisible to the caller of `start`.

use async_trait::async_trait;
use futures::future::BoxFuture;
use futures::FutureExt;
use serde_json::Value;
use std::future::Future;

use crate::error::NodeError;

use super::decision::{Decision, StepContext};

/// Decision logic bound to a node.
#[async_trait]
pub trait Index: Send + Sync {
    /// Inspect the input and decide where the walk goes next.
    ///
    /// Return `Some(Decision)` to continue or finish with an output,
    /// `Ok(None)` to finish with no output. A returned error is redirected
    /// to the nearest applicable fallback.
    async fn decide(&self, ctx: StepContext) -> Result<Option<Decision>, NodeError>;
}

/// Adapter exposing a synchronous closure as an [`Index`].
pub struct FnIndex<F>(F);

impl<F> FnIndex<F>
where
    F: Fn(StepContext) -> Result<Option<Decision>, NodeError> + Send + Sync,
{
    pub fn new(f: F) -> Self {
        Self(f)
    }
}

#[async_trait]
impl<F> Index for FnIndex<F>
where
    F: Fn(StepContext) -> Result<Option<Decision>, NodeError> + Send + Sync,
{
    async fn decide(&self, ctx: StepContext) -> Result<Option<Decision>, NodeError> {
        (self.0)(ctx)
    }
}

/// Adapter exposing a future-returning closure as an [`Index`].
pub struct AsyncFnIndex<F>(F);

impl<F> AsyncFnIndex<F>
where
    F: Fn(StepContext) -> BoxFuture<'static, Result<Option<Decision>, NodeError>> + Send + Sync,
{
    pub fn new(f: F) -> Self {
        Self(f)
    }
}

#[async_trait]
impl<F> Index for AsyncFnIndex<F>
where
    F: Fn(StepContext) -> BoxFuture<'static, Result<Option<Decision>, NodeError>> + Send + Sync,
{
    async fn decide(&self, ctx: StepContext) -> Result<Option<Decision>, NodeError> {
        (self.0)(ctx).await
    }
}

/// What a fallback receives when a node's index fails.
pub struct FallbackContext<'a> {
    /// The failure the index raised.
    pub error: NodeError,
    /// Key of the node that failed.
    pub node: &'a str,
    /// Keys of the steps resolved before the failure, in visitation order.
    pub path: &'a [String],
    /// The input value the failing index call received.
    pub input: Value,
}

/// Error-recovery function, node-scoped or tree-scoped.
///
/// Its return value ends the traversal verbatim; recovery never resumes
/// stepping into another node.
pub type FallbackFn = dyn Fn(FallbackContext<'_>) -> Value + Send + Sync;

/// A unit of decision logic plus an optional recovery override.
///
/// A node does not know its own key or tree; keys live in the owning tree's
/// mapping, and sibling lookup reaches a node only through the
/// [`StepContext`] handed to each index call.
pub struct TreeNode {
    index: Box<dyn Index>,
    fallback_override: Option<Box<FallbackFn>>,
}

impl TreeNode {
    /// Wrap an [`Index`] implementation.
    pub fn new(index: impl Index + 'static) -> Self {
        Self {
            index: Box::new(index),
            fallback_override: None,
        }
    }

    /// Node from a synchronous decision closure.
    pub fn from_fn<F>(f: F) -> Self
    where
        F: Fn(StepContext) -> Result<Option<Decision>, NodeError> + Send + Sync + 'static,
    {
        Self::new(FnIndex::new(f))
    }

    /// Node from a decision closure that awaits an external result.
    pub fn from_async_fn<F, Fut>(f: F) -> Self
    where
        F: Fn(StepContext) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Result<Option<Decision>, NodeError>> + Send + 'static,
    {
        Self::new(AsyncFnIndex::new(move |ctx| f(ctx).boxed()))
    }

    /// Attach a recovery override, invoked instead of the tree-wide fallback
    /// when this node's index fails.
    pub fn with_fallback<F>(mut self, f: F) -> Self
    where
        F: Fn(FallbackContext<'_>) -> Value + Send + Sync + 'static,
    {
        self.fallback_override = Some(Box::new(f));
        self
    }

    pub(crate) fn index(&self) -> &dyn Index {
        &*self.index
    }

    pub(crate) fn fallback_override(&self) -> Option<&FallbackFn> {
        self.fallback_override.as_deref()
    }
}
