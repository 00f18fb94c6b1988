//! Counting junctions: nodes whose left child holds the same key as they do.
//!
//! Because equal keys are always routed left, every repeat of a key hangs directly or further down
//! the left side of an earlier copy. The count only looks at the immediate left child though.

use std::fmt;

use crate::input::Tokens;
use crate::query::Query;
use crate::tree::{Node, Tree};

/// Whether `node` is a junction.
pub fn is_junction<K: PartialEq, V>(node: &Node<K, V>) -> bool {
    node.left().is_some_and(|left| left.key() == node.key())
}

/// Counts the junctions in the whole tree. An empty tree has none.
///
/// # Examples
///
/// ```
/// use subtree_queries::query::junctions::count_junctions;
/// use subtree_queries::tree::Tree;
///
/// let mut tree = Tree::new();
/// for key in [5, 5, 5] {
///     tree.insert(key, ()).unwrap();
/// }
///
/// assert_eq!(count_junctions(&tree), 2);
/// ```
pub fn count_junctions<K: PartialEq, V>(tree: &Tree<K, V>) -> usize {
    tree.fold_post_order(|node, left: Option<usize>, right: Option<usize>| {
        let own = usize::from(is_junction(node));
        if own == 1 {
            tracing::trace!("junction found");
        }
        left.unwrap_or(0) + right.unwrap_or(0) + own
    })
    .unwrap_or(0)
}

/// The junction count. Printed as a bare number.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct JunctionCount(pub usize);

impl fmt::Display for JunctionCount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Reads plain integers and prints how many junctions the tree has.
#[derive(Debug)]
pub struct Junctions;

impl Query for Junctions {
    type Payload = ();
    type Answer = JunctionCount;

    const NAME: &'static str = "junctions";

    fn read_record(tokens: &mut Tokens<'_>) -> Option<(i64, ())> {
        tokens.next().map(|key| (key, ()))
    }

    fn answer(tree: &Tree<i64, ()>) -> JunctionCount {
        JunctionCount(count_junctions(tree))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn count(keys: &[i64]) -> usize {
        let mut tree = Tree::new();
        for key in keys {
            tree.insert(*key, ()).unwrap();
        }
        count_junctions(&tree)
    }

    #[test]
    fn empty_tree_has_none() {
        assert_eq!(count(&[]), 0);
    }

    #[test]
    fn distinct_keys_have_none() {
        assert_eq!(count(&[4, 2, 6, 1, 3, 5, 7]), 0);
    }

    #[test]
    fn chain_of_equal_keys() {
        assert_eq!(count(&[5, 5, 5]), 2);
        assert_eq!(count(&[9, 9, 9, 9, 9]), 4);
    }

    #[test]
    fn duplicate_below_a_smaller_left_child_is_not_a_junction() {
        // 5 -> left 3, and the second 5 goes left then right of 3: it isn't 5's direct child.
        assert_eq!(count(&[5, 3, 5]), 0);
    }

    #[test]
    fn junctions_in_both_subtrees_all_count() {
        // Left: 3 with left 3. Right: 8 with left 8, which has left 8.
        assert_eq!(count(&[5, 3, 8, 3, 8, 8]), 3);
    }

    #[test]
    fn each_node_is_counted_once() {
        // A junction whose left child is itself a junction: the shared child must not be
        // visited twice.
        let mut tree = Tree::new();
        for key in [2, 2, 2, 1, 3] {
            tree.insert(key, ()).unwrap();
        }
        let mut visits = 0;
        tree.fold_post_order(|_, _: Option<()>, _| visits += 1);

        assert_eq!(visits, tree.len());
        assert_eq!(count_junctions(&tree), 2);
    }

    #[test]
    fn answer_prints_without_newline() {
        assert_eq!(JunctionCount(0).to_string(), "0");
        assert_eq!(JunctionCount(12).to_string(), "12");
    }
}
