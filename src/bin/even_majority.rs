//! Prints the root of the largest subtree holding more even integers than odd ones, or
//! `NOT FOUND`.

use anyhow::Context;
use subtree_queries::{logging, query::EvenMajority, run, Config};

fn main() -> anyhow::Result<()> {
    logging::init();

    run::<EvenMajority, _, _>(std::io::stdin().lock(), std::io::stdout().lock(), &Config::default())
        .context("finding the even-majority subtree failed")
}
