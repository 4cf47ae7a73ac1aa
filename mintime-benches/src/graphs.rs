//! Seeded synthetic graphs for benchmarking.

use mintime_core::{Graph, WeightedEdge};
use rand::{Rng, SeedableRng, rngs::SmallRng};

use crate::error::BenchSetupError;

/// Configuration for [`generate_graph`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SyntheticGraphConfig {
    /// Number of nodes; must be non-zero.
    pub node_count: usize,
    /// Number of uniformly sampled edges.
    pub edge_count: usize,
    /// Inclusive upper bound for edge weights.
    pub max_weight: u64,
    /// RNG seed.
    pub seed: u64,
}

/// Generates a random multigraph with uniformly sampled endpoints and
/// weights. The same configuration always yields the same graph.
///
/// # Errors
/// Returns [`BenchSetupError::ZeroValue`] when `node_count` is zero.
///
/// # Examples
/// ```
/// use mintime_benches::graphs::{SyntheticGraphConfig, generate_graph};
///
/// let graph = generate_graph(&SyntheticGraphConfig {
///     node_count: 10,
///     edge_count: 20,
///     max_weight: 100,
///     seed: 7,
/// })?;
/// assert_eq!(graph.edges().len(), 20);
/// # Ok::<(), mintime_benches::error::BenchSetupError>(())
/// ```
pub fn generate_graph(config: &SyntheticGraphConfig) -> Result<Graph, BenchSetupError> {
    if config.node_count == 0 {
        return Err(BenchSetupError::ZeroValue {
            context: "node_count",
        });
    }
    let mut rng = SmallRng::seed_from_u64(config.seed);
    let edges = (0..config.edge_count)
        .map(|_| {
            WeightedEdge::new(
                rng.gen_range(0..config.node_count),
                rng.gen_range(0..config.node_count),
                rng.gen_range(0..=config.max_weight),
            )
        })
        .collect();
    Ok(Graph::new(config.node_count, edges)?)
}
