//! This crate answers a few questions about Binary Search Trees (BSTs) built straight from the
//! order records arrive in, mostly for educational purposes.
//!
//! ## Binary Search Tree
//!
//! A Binary Search Tree stores records in `Node`s. Each `Node` has a key and up to two child
//! `Node`s. The trees here never rebalance, so the first record becomes the root and the shape
//! of the tree is whatever the insertion order makes it. Their invariants are:
//!
//! 1. For every `Node`, all the `Node`s in its left subtree have a key less than or *equal to*
//!    its own key.
//! 2. For every `Node`, all the `Node`s in its right subtree have a key strictly greater than its
//!    own key.
//!
//! > Equal keys are routed left, so a repeated key always ends up below its earlier copies.
//!
//! ## Subtree queries
//!
//! Each query is answered in one post-order traversal. A node learns a summary of each child's
//! subtree, combines it with its own contribution and, if the result qualifies, competes to be
//! the answer. See [`query`] for the three that ship as binaries:
//!
//! - `junctions`: how many nodes have a left child with the same key.
//! - `even-majority`: the root of the largest subtree with more even than odd keys.
//! - `quadrant`: the root of the largest subtree whose points all share a quadrant.

#![deny(missing_docs, clippy::clone_on_ref_ptr)]

pub mod config;
pub mod error;
pub mod input;
pub mod logging;
pub mod query;
pub mod run;
pub mod tree;

pub use config::Config;
pub use error::{Error, Result};
pub use run::run;
