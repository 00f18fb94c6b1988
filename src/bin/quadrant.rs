//! Reads `id x y` triples and prints the point at the root of the largest subtree whose points
//! share a quadrant, or `0 0`.

use anyhow::Context;
use subtree_queries::{logging, query::LargestQuadrant, run, Config};

fn main() -> anyhow::Result<()> {
    logging::init();

    run::<LargestQuadrant, _, _>(
        std::io::stdin().lock(),
        std::io::stdout().lock(),
        &Config::default(),
    )
    .context("finding the single-quadrant subtree failed")
}
