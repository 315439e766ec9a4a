// SPDX-License-Identifier: MIT

//! arbor-rs - an embeddable decision-tree traversal engine
//!
//! A static graph of named nodes is built once; each node wraps
//! caller-supplied decision logic (its *index*) that inspects an input value
//! and either routes to a named sibling with a new output, or ends the walk.
//! [`Tree::start`] walks from the root to a leaf and returns the visited path
//! and final output. A node may decide immediately or await an external
//! result; a failing node is redirected to its own fallback, else the
//! tree-wide one, else the failure propagates to the caller.
//!
//! ```rust
//! use arbor_rs::{Decision, Tree, TreeNode};
//! use serde_json::json;
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() -> Result<(), arbor_rs::TreeError> {
//! let tree = Tree::builder()
//!     .node(
//!         "root",
//!         TreeNode::from_fn(|ctx| Ok(Some(Decision::descend("greet", ctx.input)))),
//!     )
//!     .node(
//!         "greet",
//!         TreeNode::from_fn(|ctx| {
//!             let name = ctx.input.as_str().unwrap_or("world").to_string();
//!             Ok(Some(Decision::finish(format!("hello, {name}"))))
//!         }),
//!     )
//!     .build()?;
//!
//! let result = tree.start(json!("arbor")).await?;
//! assert_eq!(result.output, json!("hello, arbor"));
//! assert_eq!(result.path, vec!["root", "greet"]);
//! # Ok(())
//! # }
//! ```

pub mod error;
pub mod tree;

pub use error::{NodeError, TreeError};
pub use tree::{
    AsyncFnIndex, Decision, FallbackContext, FallbackFn, FnIndex, Index, Siblings, StepContext,
    Traversal, Tree, TreeBuilder, TreeNode, DEFAULT_ROOT_KEY,
};
