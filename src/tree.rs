//! An unbalanced Binary Search Tree whose shape is decided entirely by insertion order.
//!
//! Keys that are strictly greater than a node's key go to its right subtree. Everything else,
//! including keys *equal* to the node's key, goes to its left subtree. This means duplicates pile
//! up on the left and the tree keeps every inserted record instead of overwriting values.
//!
//! # Examples
//!
//! ```
//! use subtree_queries::tree::Tree;
//!
//! let mut tree = Tree::new();
//!
//! // Nothing in here yet.
//! assert_eq!(tree.find(&1), None);
//!
//! tree.insert(1, "a").unwrap();
//! tree.insert(1, "b").unwrap();
//! assert_eq!(tree.len(), 2);
//!
//! // The first record with a key sits closest to the root.
//! assert_eq!(tree.find(&1), Some(&"a"));
//!
//! // The duplicate became the root's left child.
//! let root = tree.root().unwrap();
//! assert_eq!(root.left().map(|n| *n.value()), Some("b"));
//! ```

use std::fmt;

use crate::error::{Error, Result};

type Link<K, V> = Option<Box<Node<K, V>>>;

/// A Binary Search Tree that never rebalances. Nodes are exclusively owned by their parent and the
/// tree owns the root.
pub struct Tree<K, V> {
    root: Link<K, V>,
    len: usize,
    /// Maximum number of nodes this tree may hold. `None` means unbounded.
    max_nodes: Option<usize>,
}

/// A `Node` has a key that decides where it is placed and a payload that rides along with it.
pub struct Node<K, V> {
    key: K,
    value: V,
    left: Link<K, V>,
    right: Link<K, V>,
}

impl<K, V> Default for Tree<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K, V> Drop for Tree<K, V> {
    // Stack based so a long chain built from sorted input doesn't recurse once per node.
    fn drop(&mut self) {
        let mut pending: Vec<Box<Node<K, V>>> = self.root.take().into_iter().collect();
        while let Some(mut node) = pending.pop() {
            pending.extend(node.left.take());
            pending.extend(node.right.take());
        }
    }
}

impl<K, V> fmt::Debug for Tree<K, V>
where
    K: fmt::Debug,
    V: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Tree")
            .field("len", &self.len)
            .field("max_nodes", &self.max_nodes)
            .field("keys", &self.iter().map(|(k, _)| k).collect::<Vec<_>>())
            .finish()
    }
}

impl<K, V> Tree<K, V> {
    /// Generates a new, empty `Tree` with no limit on its size.
    pub fn new() -> Self {
        Self {
            root: None,
            len: 0,
            max_nodes: None,
        }
    }

    /// Generates a new, empty `Tree` that refuses to grow past `max_nodes` nodes.
    ///
    /// # Examples
    ///
    /// ```
    /// use subtree_queries::tree::Tree;
    ///
    /// let mut tree = Tree::with_max_nodes(Some(1));
    /// assert!(tree.insert(1, ()).is_ok());
    /// assert!(tree.insert(2, ()).is_err());
    /// assert_eq!(tree.len(), 1);
    /// ```
    pub fn with_max_nodes(max_nodes: Option<usize>) -> Self {
        Self {
            root: None,
            len: 0,
            max_nodes,
        }
    }

    /// Inserts a new node holding `key` and `value`. The new node always becomes a leaf.
    ///
    /// Returns [`Error::NodeLimit`] if the tree already holds as many nodes as it is allowed to.
    pub fn insert(&mut self, key: K, value: V) -> Result<()>
    where
        K: Ord,
    {
        if let Some(limit) = self.max_nodes {
            if self.len >= limit {
                return Err(Error::NodeLimit { limit });
            }
        }

        let mut link = &mut self.root;
        while let Some(node) = link {
            link = if key > node.key {
                &mut node.right
            } else {
                &mut node.left
            };
        }
        *link = Some(Box::new(Node::new(key, value)));
        self.len += 1;

        Ok(())
    }

    /// Potentially finds the value of the first node on the search path holding the given key.
    /// With duplicate keys that is the one inserted earliest.
    pub fn find(&self, key: &K) -> Option<&V>
    where
        K: Ord,
    {
        let mut current = self.root();
        while let Some(node) = current {
            if *key > node.key {
                current = node.right();
            } else if *key == node.key {
                return Some(&node.value);
            } else {
                current = node.left();
            }
        }
        None
    }

    /// The root node, if anything has been inserted.
    pub fn root(&self) -> Option<&Node<K, V>> {
        self.root.as_deref()
    }

    /// How many nodes are in the tree.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether nothing has been inserted yet.
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Gets the number of levels in this tree. An empty tree has a height of 0 and a lone root
    /// has a height of 1.
    pub fn height(&self) -> usize {
        self.fold_post_order(|_, left: Option<usize>, right: Option<usize>| {
            left.unwrap_or(0).max(right.unwrap_or(0)) + 1
        })
        .unwrap_or(0)
    }

    /// In-order iterator over `(key, value)` pairs. Keys come out in non-decreasing order.
    pub fn iter(&self) -> Iter<'_, K, V> {
        let mut iter = Iter { stack: Vec::new() };
        iter.push_left_spine(self.root());
        iter
    }

    /// Folds the tree bottom-up. `visit` is called once per node in post-order (left subtree,
    /// right subtree, then the node) with the results already computed for its children. An
    /// empty child is passed as `None`. Returns the root's result, or `None` for an empty tree.
    ///
    /// The traversal keeps its own stack so it handles arbitrarily deep trees.
    ///
    /// # Examples
    ///
    /// ```
    /// use subtree_queries::tree::Tree;
    ///
    /// let mut tree = Tree::new();
    /// for key in [2, 1, 3] {
    ///     tree.insert(key, ()).unwrap();
    /// }
    ///
    /// let mut order = Vec::new();
    /// let size = tree.fold_post_order(|node, left: Option<usize>, right: Option<usize>| {
    ///     order.push(*node.key());
    ///     left.unwrap_or(0) + right.unwrap_or(0) + 1
    /// });
    ///
    /// assert_eq!(size, Some(3));
    /// assert_eq!(order, vec![1, 3, 2]);
    /// ```
    pub fn fold_post_order<'t, A, F>(&'t self, mut visit: F) -> Option<A>
    where
        F: FnMut(&'t Node<K, V>, Option<A>, Option<A>) -> A,
    {
        let mut steps: Vec<Step<'t, K, V>> = self.root().map(Step::Enter).into_iter().collect();
        let mut finished: Vec<A> = Vec::new();

        while let Some(step) = steps.pop() {
            match step {
                Step::Enter(node) => {
                    steps.push(Step::Exit(node));
                    // The left child is pushed last so its whole subtree finishes first.
                    steps.extend(node.right().map(Step::Enter));
                    steps.extend(node.left().map(Step::Enter));
                }
                Step::Exit(node) => {
                    let right = if node.right.is_some() {
                        finished.pop()
                    } else {
                        None
                    };
                    let left = if node.left.is_some() {
                        finished.pop()
                    } else {
                        None
                    };
                    finished.push(visit(node, left, right));
                }
            }
        }

        finished.pop()
    }
}

/// Where the post-order fold is for a node: about to descend into it, or coming back up.
enum Step<'t, K, V> {
    Enter(&'t Node<K, V>),
    Exit(&'t Node<K, V>),
}

impl<K, V> Node<K, V> {
    /// Construct a new leaf `Node` with the given `key` and `value`.
    fn new(key: K, value: V) -> Self {
        Self {
            key,
            value,
            left: None,
            right: None,
        }
    }

    /// The key this node was placed by.
    pub fn key(&self) -> &K {
        &self.key
    }

    /// The payload stored alongside the key.
    pub fn value(&self) -> &V {
        &self.value
    }

    /// The left child. Its keys are all less than or equal to this node's key.
    pub fn left(&self) -> Option<&Node<K, V>> {
        self.left.as_deref()
    }

    /// The right child. Its keys are all strictly greater than this node's key.
    pub fn right(&self) -> Option<&Node<K, V>> {
        self.right.as_deref()
    }
}

impl<K, V> fmt::Debug for Node<K, V>
where
    K: fmt::Debug,
    V: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Node")
            .field("key", &self.key)
            .field("value", &self.value)
            .field("left", &self.left.as_ref().map(|n| &n.key))
            .field("right", &self.right.as_ref().map(|n| &n.key))
            .finish()
    }
}

/// In-order iterator returned by [`Tree::iter`].
pub struct Iter<'t, K, V> {
    stack: Vec<&'t Node<K, V>>,
}

impl<'t, K, V> Iter<'t, K, V> {
    fn push_left_spine(&mut self, mut node: Option<&'t Node<K, V>>) {
        while let Some(n) = node {
            self.stack.push(n);
            node = n.left();
        }
    }
}

impl<'t, K, V> Iterator for Iter<'t, K, V> {
    type Item = (&'t K, &'t V);

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.push_left_spine(node.right());
        Some((&node.key, &node.value))
    }
}
