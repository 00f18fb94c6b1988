//! The three subtree queries and what they share.
//!
//! Every query is one post-order pass over the tree via [`Tree::fold_post_order`]. Children are
//! summarised first, the node combines those summaries with its own contribution, and, when the
//! node qualifies, it is offered to a [`Selection`] that remembers the best one seen so far.

use std::fmt;

use crate::input::Tokens;
use crate::tree::{Node, Tree};

pub mod even_majority;
pub mod junctions;
pub mod quadrant;

pub use even_majority::EvenMajority;
pub use junctions::Junctions;
pub use quadrant::{LargestQuadrant, Point, Quadrant};

/// The best qualifying node found so far during one traversal, and the subtree size it won with.
///
/// A candidate only replaces the current best when its size is strictly greater, so among equal
/// sizes the node visited first keeps its place.
pub struct Selection<'t, K, V> {
    best: Option<&'t Node<K, V>>,
    best_size: usize,
}

impl<K, V> Default for Selection<'_, K, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'t, K, V> Selection<'t, K, V> {
    /// Nothing selected yet.
    pub fn new() -> Self {
        Self {
            best: None,
            best_size: 0,
        }
    }

    /// Offers `node` with a subtree of `size` nodes. Returns whether it became the new best.
    pub fn offer(&mut self, node: &'t Node<K, V>, size: usize) -> bool {
        if size > self.best_size {
            self.best = Some(node);
            self.best_size = size;
            true
        } else {
            false
        }
    }

    /// The selected node, if any node was ever accepted.
    pub fn best(&self) -> Option<&'t Node<K, V>> {
        self.best
    }

    /// Size of the selected node's subtree, or 0 when nothing was selected.
    pub fn best_size(&self) -> usize {
        self.best_size
    }
}

/// One of the query programs: how it reads a record, and what it answers about the built tree.
pub trait Query {
    /// What each node carries besides its key.
    type Payload;
    /// The printable result.
    type Answer: fmt::Display + fmt::Debug;

    /// Name used in diagnostics.
    const NAME: &'static str;

    /// Reads the next `(key, payload)` record. `None` ends construction.
    fn read_record(tokens: &mut Tokens<'_>) -> Option<(i64, Self::Payload)>;

    /// Runs the query over a fully built tree.
    fn answer(tree: &Tree<i64, Self::Payload>) -> Self::Answer;
}
