//! Reading whitespace separated integers.
//!
//! Reading stops quietly at the first token that isn't an integer, exactly as it does at the end
//! of the input. Whatever was read before that point is still used.

use std::io::Read;

use crate::error::Result;

/// Reads everything from `input`. Bytes that aren't valid UTF-8 are replaced rather than
/// rejected, so they simply end up as a token that doesn't parse.
pub fn read_all<R: Read>(mut input: R) -> Result<String> {
    let mut bytes = Vec::new();
    input.read_to_end(&mut bytes)?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

/// An iterator over the integers at the start of some text. Once a token fails to parse, the
/// iterator is exhausted for good.
///
/// # Examples
///
/// ```
/// use subtree_queries::input::Tokens;
///
/// let read: Vec<i64> = Tokens::new(" 3\n-4\t5 six 7").collect();
/// assert_eq!(read, vec![3, -4, 5]);
/// ```
#[derive(Debug)]
pub struct Tokens<'a> {
    words: std::str::SplitWhitespace<'a>,
    stopped: bool,
}

impl<'a> Tokens<'a> {
    /// Tokenizes `text`.
    pub fn new(text: &'a str) -> Self {
        Self {
            words: text.split_whitespace(),
            stopped: false,
        }
    }
}

impl Iterator for Tokens<'_> {
    type Item = i64;

    fn next(&mut self) -> Option<i64> {
        if self.stopped {
            return None;
        }
        match self.words.next().map(str::parse::<i64>) {
            Some(Ok(value)) => Some(value),
            Some(Err(_)) => {
                tracing::debug!("stopped reading at a token that is not an integer");
                self.stopped = true;
                None
            }
            None => {
                self.stopped = true;
                None
            }
        }
    }
}
