// SPDX-License-Identifier: MIT

//! Decision-tree data model and traversal
//!
//! This module provides:
//! - `TreeNode` and the `Index` trait - a unit of decision logic plus an
//!   optional recovery override
//! - `Decision`, `StepContext`, `Siblings` - the step contract between the
//!   engine and node logic
//! - `TreeBuilder` - construction and fail-fast validation
//! - `Tree` and `Traversal` - the walk loop and its terminal result

mod builder;
mod decision;
mod executor;
mod node;

pub use builder::{TreeBuilder, DEFAULT_ROOT_KEY};
pub use decision::{Decision, Siblings, StepContext};
pub use executor::{Traversal, Tree};
pub use node::{AsyncFnIndex, FallbackContext, FallbackFn, FnIndex, Index, TreeNode};
