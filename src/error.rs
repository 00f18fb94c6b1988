//! The error type shared by tree construction and the query programs.

use std::io;

use thiserror::Error;

/// Everything that can stop a query program from producing its answer.
#[derive(Debug, Error)]
pub enum Error {
    /// Reading the records or writing the answer failed.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
    /// The tree was not allowed to grow any further.
    #[error("Can't allocate memory: tree is limited to {limit} nodes")]
    NodeLimit {
        /// The configured maximum number of nodes.
        limit: usize,
    },
}

/// Shorthand for results whose error is [`Error`].
pub type Result<T> = std::result::Result<T, Error>;
