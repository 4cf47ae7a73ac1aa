//! Strategy builders for threshold-search property tests.
//!
//! Graphs are generated from a seeded [`SmallRng`] so failing cases shrink
//! to a reproducible seed. Weights stay small so the linear-scan oracle
//! remains cheap.

use proptest::prelude::*;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::{Graph, WeightedEdge};

/// Maximum node count for generated graphs.
const MAX_NODES: usize = 24;
/// Maximum number of edges per generated graph.
const MAX_EDGES: usize = 48;
/// Largest generated edge weight.
const MAX_WEIGHT: u64 = 40;

/// Generated input for a single search.
#[derive(Clone, Debug)]
pub(super) struct SearchFixture {
    pub(super) graph: Graph,
    pub(super) min_components: usize,
}

/// Produces graphs with a component target between 1 and `node_count + 2`,
/// so unsatisfiable targets are exercised too.
pub(super) fn search_fixture_strategy() -> impl Strategy<Value = SearchFixture> {
    any::<u64>().prop_map(|seed| {
        let mut rng = SmallRng::seed_from_u64(seed);
        generate_fixture(&mut rng)
    })
}

pub(super) fn generate_fixture(rng: &mut SmallRng) -> SearchFixture {
    let node_count = rng.gen_range(1..=MAX_NODES);
    let edge_count = rng.gen_range(0..=MAX_EDGES);
    let edges = (0..edge_count)
        .map(|_| {
            WeightedEdge::new(
                rng.gen_range(0..node_count),
                rng.gen_range(0..node_count),
                rng.gen_range(0..=MAX_WEIGHT),
            )
        })
        .collect();
    let graph = Graph::new(node_count, edges).expect("generated endpoints are in range");
    let min_components = rng.gen_range(1..=node_count + 2);
    SearchFixture {
        graph,
        min_components,
    }
}
