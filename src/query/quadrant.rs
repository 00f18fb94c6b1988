//! Finding the largest subtree whose points all lie in the same quadrant.
//!
//! Records are `id x y` triples. The tree is ordered by `id` and every node carries its point.

use std::fmt;

use crate::input::Tokens;
use crate::query::{Query, Selection};
use crate::tree::{Node, Tree};

/// A point on the integer plane.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Point {
    /// Horizontal coordinate.
    pub x: i64,
    /// Vertical coordinate.
    pub y: i64,
}

impl Point {
    /// Construct a `Point` from its coordinates.
    pub fn new(x: i64, y: i64) -> Self {
        Self { x, y }
    }

    /// The quadrant this point falls in.
    pub fn quadrant(&self) -> Quadrant {
        Quadrant::of(*self)
    }
}

/// The four quadrants of the plane.
///
/// Only points with both coordinates non-zero can be in the first three. Anything on an axis,
/// including the origin, counts as [`Quadrant::Fourth`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Quadrant {
    /// `x > 0`, `y > 0`.
    First,
    /// `x < 0`, `y > 0`.
    Second,
    /// `x < 0`, `y < 0`.
    Third,
    /// Everything else: `x > 0, y < 0` and every point on an axis.
    Fourth,
}

impl Quadrant {
    /// Classifies `point`.
    ///
    /// # Examples
    ///
    /// ```
    /// use subtree_queries::query::{Point, Quadrant};
    ///
    /// assert_eq!(Quadrant::of(Point::new(3, 4)), Quadrant::First);
    /// assert_eq!(Quadrant::of(Point::new(-3, -4)), Quadrant::Third);
    /// assert_eq!(Quadrant::of(Point::new(0, 4)), Quadrant::Fourth);
    /// ```
    pub fn of(point: Point) -> Self {
        match (point.x.signum(), point.y.signum()) {
            (1, 1) => Self::First,
            (-1, 1) => Self::Second,
            (-1, -1) => Self::Third,
            _ => Self::Fourth,
        }
    }
}

/// What a subtree reports to its parent.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct QuadrantSubtree {
    /// Number of nodes, or 0 when the subtree isn't valid.
    pub size: usize,
    /// Quadrant of the subtree's root.
    pub quadrant: Quadrant,
    /// Whether every point in the subtree is in `quadrant`.
    pub valid: bool,
}

impl QuadrantSubtree {
    /// Summarises a node given the summaries of its children. An empty child places no
    /// constraint. A non-empty child must itself be valid and share the node's quadrant.
    pub fn combine(
        quadrant: Quadrant,
        left: Option<QuadrantSubtree>,
        right: Option<QuadrantSubtree>,
    ) -> Self {
        let agrees = |child: Option<QuadrantSubtree>| {
            child.map_or(true, |c| c.valid && c.quadrant == quadrant)
        };

        if agrees(left) && agrees(right) {
            Self {
                size: left.map_or(0, |c| c.size) + right.map_or(0, |c| c.size) + 1,
                quadrant,
                valid: true,
            }
        } else {
            Self {
                size: 0,
                quadrant,
                valid: false,
            }
        }
    }
}

/// Finds the root of the largest subtree whose points share one quadrant. Ties go to the subtree
/// visited first in post-order. `None` only for an empty tree, since any leaf is valid.
///
/// Both children are always fully summarised before the node is judged, so nothing is pruned.
///
/// # Examples
///
/// ```
/// use subtree_queries::query::{quadrant::largest_single_quadrant, Point};
/// use subtree_queries::tree::Tree;
///
/// let mut tree = Tree::new();
/// tree.insert(1, Point::new(1, 1)).unwrap();
/// tree.insert(2, Point::new(2, 2)).unwrap();
/// tree.insert(3, Point::new(3, 3)).unwrap();
///
/// let root = largest_single_quadrant(&tree).unwrap();
/// assert_eq!(*root.value(), Point::new(1, 1));
/// ```
pub fn largest_single_quadrant<K>(tree: &Tree<K, Point>) -> Option<&Node<K, Point>> {
    let mut selection = Selection::new();

    tree.fold_post_order(|node, left, right| {
        let summary = QuadrantSubtree::combine(node.value().quadrant(), left, right);

        if summary.valid && selection.offer(node, summary.size) {
            tracing::trace!(
                size = summary.size,
                quadrant = ?summary.quadrant,
                "new largest single-quadrant subtree"
            );
        }
        summary
    });

    selection.best()
}

/// The point at the root of the selected subtree. Printed as `x y`, or `0 0` when nothing was
/// selected.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct QuadrantAnswer(pub Option<Point>);

impl fmt::Display for QuadrantAnswer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let point = self.0.unwrap_or_default();
        writeln!(f, "{} {}", point.x, point.y)
    }
}

/// Reads `id x y` triples and prints the point at the root of the largest single-quadrant
/// subtree.
#[derive(Debug)]
pub struct LargestQuadrant;

impl Query for LargestQuadrant {
    type Payload = Point;
    type Answer = QuadrantAnswer;

    const NAME: &'static str = "quadrant";

    /// A triple cut short by the end of input (or a bad token) is dropped.
    fn read_record(tokens: &mut Tokens<'_>) -> Option<(i64, Point)> {
        let id = tokens.next()?;
        let x = tokens.next()?;
        let y = tokens.next()?;
        Some((id, Point::new(x, y)))
    }

    fn answer(tree: &Tree<i64, Point>) -> QuadrantAnswer {
        QuadrantAnswer(largest_single_quadrant(tree).map(|node| *node.value()))
    }
}
