//! Settings for building trees.

/// Knobs for building the tree a query runs over.
///
/// The binaries take no flags and always run with [`Config::default`].
///
/// # Examples
///
/// ```
/// use subtree_queries::Config;
///
/// let config = Config::default().with_max_nodes(10);
/// assert_eq!(config.max_nodes, Some(10));
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Config {
    /// Upper bound on how many records are inserted before construction fails. `None` means the
    /// tree grows for as long as there is input.
    pub max_nodes: Option<usize>,
}

impl Config {
    /// Returns this config with construction capped at `max_nodes` nodes.
    pub fn with_max_nodes(self, max_nodes: usize) -> Self {
        Self {
            max_nodes: Some(max_nodes),
        }
    }
}
