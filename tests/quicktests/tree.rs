use subtree_queries::tree::Tree;

use crate::{read_prefix, Token};

#[quickcheck]
fn contains(xs: Vec<i8>) -> bool {
    let mut tree = Tree::new();
    for x in &xs {
        tree.insert(*x, *x).unwrap();
    }

    xs.iter().all(|x| tree.find(x) == Some(x))
}

#[quickcheck]
fn contains_not(xs: Vec<i8>, nots: Vec<i8>) -> bool {
    let mut tree = Tree::new();
    for x in &xs {
        tree.insert(*x, *x).unwrap();
    }

    nots.iter()
        .filter(|x| !xs.contains(*x))
        .all(|x| tree.find(x).is_none())
}

#[quickcheck]
fn keeps_every_record(xs: Vec<i8>) -> bool {
    let mut tree = Tree::new();
    for (i, x) in xs.iter().enumerate() {
        tree.insert(*x, i).unwrap();
    }

    let mut positions: Vec<usize> = tree.iter().map(|(_, i)| *i).collect();
    positions.sort_unstable();

    tree.len() == xs.len() && positions == (0..xs.len()).collect::<Vec<_>>()
}

#[quickcheck]
fn height_bounded_by_len(tokens: Vec<Token>) -> bool {
    let keys = read_prefix(&tokens);
    let mut tree = Tree::new();
    for x in &keys {
        tree.insert(*x, ()).unwrap();
    }

    tree.height() <= tree.len() && tree.len() == keys.len()
}
