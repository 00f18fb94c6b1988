#[macro_use(quickcheck)]
extern crate quickcheck_macros;

mod runs;
mod tree;

use quickcheck::{Arbitrary, Gen};

/// One whitespace separated token in a query program's input.
#[derive(Copy, Clone, Debug)]
pub(crate) enum Token {
    /// A small integer so keys repeat often.
    Int(i8),
    /// Something that doesn't parse as an integer.
    Garbage,
}

impl Arbitrary for Token {
    /// Tells quickcheck how to randomly choose a token. Garbage is rare so most inputs build a
    /// decent sized tree before stopping.
    fn arbitrary(g: &mut Gen) -> Self {
        match g.choose(&[0, 0, 0, 0, 0, 0, 0, 0, 0, 1]).unwrap() {
            0 => Token::Int(i8::arbitrary(g)),
            1 => Token::Garbage,
            _ => unreachable!(),
        }
    }
}

/// Renders tokens the way they would arrive on standard input.
pub(crate) fn render(tokens: &[Token]) -> String {
    tokens
        .iter()
        .map(|token| match token {
            Token::Int(x) => x.to_string(),
            Token::Garbage => "oops".to_string(),
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// The integers a query program actually reads from `tokens`.
pub(crate) fn read_prefix(tokens: &[Token]) -> Vec<i64> {
    tokens
        .iter()
        .map_while(|token| match token {
            Token::Int(x) => Some(i64::from(*x)),
            Token::Garbage => None,
        })
        .collect()
}
