//! Benchmark parameter labels.

use std::fmt;

/// Parameters identifying one threshold-search benchmark case.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SearchBenchParams {
    /// Number of nodes in the generated graph.
    pub node_count: usize,
    /// Number of generated edges.
    pub edge_count: usize,
    /// Component target handed to the search.
    pub min_components: usize,
}

impl fmt::Display for SearchBenchParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "n={},m={},k={}",
            self.node_count, self.edge_count, self.min_components
        )
    }
}
