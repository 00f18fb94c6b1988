use subtree_queries::query::even_majority::largest_even_majority;
use subtree_queries::query::junctions::count_junctions;
use subtree_queries::query::{EvenMajority, Junctions};
use subtree_queries::tree::Tree;
use subtree_queries::{run, Config};

use crate::{read_prefix, render, Token};

fn output_of<Q: subtree_queries::query::Query>(text: &str) -> String {
    let mut out = Vec::new();
    run::<Q, _, _>(text.as_bytes(), &mut out, &Config::default()).unwrap();
    String::from_utf8(out).unwrap()
}

fn tree_of(keys: &[i64]) -> Tree<i64, ()> {
    let mut tree = Tree::new();
    for key in keys {
        tree.insert(*key, ()).unwrap();
    }
    tree
}

#[quickcheck]
fn junctions_stop_at_garbage(tokens: Vec<Token>) -> bool {
    let expected = count_junctions(&tree_of(&read_prefix(&tokens)));

    output_of::<Junctions>(&render(&tokens)) == expected.to_string()
}

#[quickcheck]
fn even_majority_matches_library(tokens: Vec<Token>) -> bool {
    let tree = tree_of(&read_prefix(&tokens));
    let expected = match largest_even_majority(&tree) {
        Some(node) => format!("{}\n", node.key()),
        None => "NOT FOUND".to_string(),
    };

    output_of::<EvenMajority>(&render(&tokens)) == expected
}

#[quickcheck]
fn output_is_repeatable(tokens: Vec<Token>) -> bool {
    let text = render(&tokens);

    output_of::<EvenMajority>(&text) == output_of::<EvenMajority>(&text)
}
