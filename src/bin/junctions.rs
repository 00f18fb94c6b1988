//! Prints how many nodes have a left child holding the same integer.

use anyhow::Context;
use subtree_queries::{logging, query::Junctions, run, Config};

fn main() -> anyhow::Result<()> {
    logging::init();

    run::<Junctions, _, _>(std::io::stdin().lock(), std::io::stdout().lock(), &Config::default())
        .context("counting junctions failed")
}
