//! Build, query, report: the whole life of one query program.

use std::io::{Read, Write};

use crate::config::Config;
use crate::error::Result;
use crate::input::{self, Tokens};
use crate::query::Query;
use crate::tree::Tree;

/// Builds a tree from `text`, one record at a time, until the records run out.
pub fn build<Q: Query>(text: &str, config: &Config) -> Result<Tree<i64, Q::Payload>> {
    let mut tokens = Tokens::new(text);
    let mut tree = Tree::with_max_nodes(config.max_nodes);

    while let Some((key, payload)) = Q::read_record(&mut tokens) {
        tree.insert(key, payload)?;
    }

    tracing::debug!(
        query = Q::NAME,
        nodes = tree.len(),
        height = tree.height(),
        "built tree"
    );
    Ok(tree)
}

/// Reads every record from `input`, runs `Q` over the resulting tree and writes the answer to
/// `output`.
///
/// # Examples
///
/// ```
/// use subtree_queries::{query::EvenMajority, run, Config};
///
/// let mut out = Vec::new();
/// run::<EvenMajority, _, _>(&b"2 4 6\n"[..], &mut out, &Config::default()).unwrap();
///
/// assert_eq!(out, b"2\n");
/// ```
pub fn run<Q, R, W>(input: R, mut output: W, config: &Config) -> Result<()>
where
    Q: Query,
    R: Read,
    W: Write,
{
    let text = input::read_all(input)?;
    let tree = build::<Q>(&text, config)?;
    let answer = Q::answer(&tree);
    tracing::debug!(query = Q::NAME, ?answer, "answered");

    write!(output, "{answer}")?;
    output.flush()?;
    Ok(())
}
