//! Finding the largest subtree holding more even values than odd ones.

use std::fmt;

use crate::input::Tokens;
use crate::query::{Query, Selection};
use crate::tree::{Node, Tree};

/// How many values in a subtree are even and how many are odd.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ParityCount {
    /// Number of nodes in the subtree.
    pub size: usize,
    /// Number of even values.
    pub even: usize,
    /// Number of odd values.
    pub odd: usize,
}

impl ParityCount {
    /// The count for a single value.
    pub fn of(value: i64) -> Self {
        // `%` keeps the sign, so -3 % 2 == -1 and negatives land on the odd side correctly.
        if value % 2 == 0 {
            Self {
                size: 1,
                even: 1,
                odd: 0,
            }
        } else {
            Self {
                size: 1,
                even: 0,
                odd: 1,
            }
        }
    }

    /// Adds another subtree's counts to these.
    pub fn combine(self, other: Self) -> Self {
        Self {
            size: self.size + other.size,
            even: self.even + other.even,
            odd: self.odd + other.odd,
        }
    }

    /// Whether strictly more values are even than odd.
    pub fn has_even_majority(&self) -> bool {
        self.even > self.odd
    }
}

/// Finds the root of the largest subtree with an even majority. Ties go to the subtree visited
/// first in post-order. `None` when no subtree qualifies.
///
/// # Examples
///
/// ```
/// use subtree_queries::query::even_majority::largest_even_majority;
/// use subtree_queries::tree::Tree;
///
/// let mut tree = Tree::new();
/// for key in [2, 4, 6] {
///     tree.insert(key, ()).unwrap();
/// }
///
/// assert_eq!(largest_even_majority(&tree).map(|n| *n.key()), Some(2));
/// ```
pub fn largest_even_majority<V>(tree: &Tree<i64, V>) -> Option<&Node<i64, V>> {
    let mut selection = Selection::new();

    tree.fold_post_order(|node, left: Option<ParityCount>, right: Option<ParityCount>| {
        let counts = ParityCount::of(*node.key())
            .combine(left.unwrap_or_default())
            .combine(right.unwrap_or_default());

        if counts.has_even_majority() && selection.offer(node, counts.size) {
            tracing::trace!(
                key = *node.key(),
                size = counts.size,
                "new largest even-majority subtree"
            );
        }
        counts
    });

    selection.best()
}

/// The value at the root of the selected subtree, if there is one.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct EvenMajorityAnswer(pub Option<i64>);

impl fmt::Display for EvenMajorityAnswer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            Some(value) => writeln!(f, "{value}"),
            None => write!(f, "NOT FOUND"),
        }
    }
}

/// Reads plain integers and prints the root value of the largest even-majority subtree.
#[derive(Debug)]
pub struct EvenMajority;

impl Query for EvenMajority {
    type Payload = ();
    type Answer = EvenMajorityAnswer;

    const NAME: &'static str = "even-majority";

    fn read_record(tokens: &mut Tokens<'_>) -> Option<(i64, ())> {
        tokens.next().map(|key| (key, ()))
    }

    fn answer(tree: &Tree<i64, ()>) -> EvenMajorityAnswer {
        EvenMajorityAnswer(largest_even_majority(tree).map(|node| *node.key()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tree_of(keys: &[i64]) -> Tree<i64, ()> {
        let mut tree = Tree::new();
        for key in keys {
            tree.insert(*key, ()).unwrap();
        }
        tree
    }

    fn selected(keys: &[i64]) -> Option<i64> {
        largest_even_majority(&tree_of(keys)).map(|n| *n.key())
    }

    #[test]
    fn parity_of_negatives() {
        assert_eq!(ParityCount::of(-4).even, 1);
        assert_eq!(ParityCount::of(-3).odd, 1);
        assert_eq!(ParityCount::of(0).even, 1);
    }

    #[test]
    fn all_even_chain_selects_root() {
        assert_eq!(selected(&[2, 4, 6]), Some(2));
    }

    #[test]
    fn empty_tree_finds_nothing() {
        assert_eq!(selected(&[]), None);
    }

    #[test]
    fn all_odd_finds_nothing() {
        assert_eq!(selected(&[1, 3, 5, -7]), None);
    }

    #[test]
    fn balanced_parity_does_not_qualify() {
        // Root 1 (odd) with right child 2 (even): the whole tree is 1 vs 1, only the leaf wins.
        assert_eq!(selected(&[1, 2]), Some(2));
    }

    #[test]
    fn ties_keep_the_first_found() {
        // 5 is odd with two even leaves. Both leaves are size 1; 2 is visited first.
        // The whole tree has 2 even vs 1 odd so it wins outright.
        assert_eq!(selected(&[5, 2, 8]), Some(5));
        // With an odd-heavy root only the leaves qualify and the left one is found first.
        assert_eq!(selected(&[5, 2, 8, 7, 9]), Some(2));
    }

    #[test]
    fn subtree_beats_smaller_subtree_found_earlier() {
        // The leaf 4 qualifies first, then its parent 10 with children 4 and 12. The odd-heavy
        // left side keeps the root from qualifying.
        assert_eq!(selected(&[1, 0, -1, -3, -5, 10, 4, 12]), Some(10));
    }

    #[test]
    fn answer_formatting() {
        assert_eq!(EvenMajorityAnswer(Some(2)).to_string(), "2\n");
        assert_eq!(EvenMajorityAnswer(Some(-8)).to_string(), "-8\n");
        assert_eq!(EvenMajorityAnswer(None).to_string(), "NOT FOUND");
    }

    #[test]
    fn querying_twice_gives_the_same_answer() {
        let tree = tree_of(&[7, 4, 9, 2, 6, 8]);

        assert_eq!(EvenMajority::answer(&tree), EvenMajority::answer(&tree));
        assert_eq!(tree.len(), 6);
    }
}
