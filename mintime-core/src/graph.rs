//! Validated weighted graphs consumed by the threshold search.
//!
//! Raw input arrives as signed `[u, v, weight]` triples; [`Graph::from_raw`]
//! rejects anything the search cannot interpret before any work starts.

use std::num::NonZeroUsize;

use crate::{Result, error::ThresholdError};

/// A single undirected weighted edge.
///
/// Endpoints are kept in input order. Self-edges are allowed and never change
/// connectivity.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct WeightedEdge {
    source: usize,
    target: usize,
    weight: u64,
}

impl WeightedEdge {
    /// Creates an edge between `source` and `target`.
    ///
    /// # Examples
    /// ```
    /// use mintime_core::WeightedEdge;
    ///
    /// let edge = WeightedEdge::new(0, 2, 7);
    /// assert_eq!((edge.source(), edge.target(), edge.weight()), (0, 2, 7));
    /// ```
    #[must_use]
    pub const fn new(source: usize, target: usize, weight: u64) -> Self {
        Self {
            source,
            target,
            weight,
        }
    }

    /// Returns the first endpoint.
    #[must_use]
    #[rustfmt::skip]
    pub const fn source(&self) -> usize { self.source }

    /// Returns the second endpoint.
    #[must_use]
    #[rustfmt::skip]
    pub const fn target(&self) -> usize { self.target }

    /// Returns the edge weight.
    #[must_use]
    #[rustfmt::skip]
    pub const fn weight(&self) -> u64 { self.weight }
}

/// An immutable graph whose edges all reference nodes in `0..node_count`.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Graph {
    node_count: NonZeroUsize,
    edges: Vec<WeightedEdge>,
}

impl Graph {
    /// Builds a graph from typed edges.
    ///
    /// # Errors
    /// Returns [`ThresholdError::InvalidNodeCount`] when `node_count == 0` and
    /// [`ThresholdError::EdgeNodeOutOfRange`] when an edge endpoint is not
    /// below `node_count`. Endpoints above `i64::MAX` are reported as
    /// `i64::MAX`.
    ///
    /// # Examples
    /// ```
    /// use mintime_core::{Graph, WeightedEdge};
    ///
    /// let graph = Graph::new(3, vec![WeightedEdge::new(0, 1, 4)])?;
    /// assert_eq!(graph.node_count().get(), 3);
    /// assert_eq!(graph.max_weight(), Some(4));
    /// # Ok::<(), mintime_core::ThresholdError>(())
    /// ```
    pub fn new(node_count: usize, edges: Vec<WeightedEdge>) -> Result<Self> {
        let node_count = NonZeroUsize::new(node_count)
            .ok_or(ThresholdError::InvalidNodeCount { got: 0 })?;
        for (position, edge) in edges.iter().enumerate() {
            for node in [edge.source, edge.target] {
                if node >= node_count.get() {
                    return Err(ThresholdError::EdgeNodeOutOfRange {
                        edge: position,
                        node: i64::try_from(node).unwrap_or(i64::MAX),
                        node_count: node_count.get(),
                    });
                }
            }
        }
        Ok(Self { node_count, edges })
    }

    /// Builds a graph from signed `[u, v, weight]` triples.
    ///
    /// # Errors
    /// Returns [`ThresholdError::InvalidNodeCount`] when `node_count` is not a
    /// positive addressable integer, [`ThresholdError::EdgeNodeOutOfRange`]
    /// when an endpoint falls outside `[0, node_count)`, and
    /// [`ThresholdError::NegativeWeight`] when a weight is below zero.
    ///
    /// # Examples
    /// ```
    /// use mintime_core::{Graph, ThresholdError};
    ///
    /// let graph = Graph::from_raw(2, &[[0, 1, 5]])?;
    /// assert_eq!(graph.edges().len(), 1);
    ///
    /// let err = Graph::from_raw(2, &[[0, 1, -5]]).unwrap_err();
    /// assert_eq!(err, ThresholdError::NegativeWeight { edge: 0, weight: -5 });
    /// # Ok::<(), ThresholdError>(())
    /// ```
    pub fn from_raw(node_count: i64, edges: &[[i64; 3]]) -> Result<Self> {
        let nodes = usize::try_from(node_count)
            .ok()
            .and_then(NonZeroUsize::new)
            .ok_or(ThresholdError::InvalidNodeCount { got: node_count })?;

        let endpoint = |position: usize, raw: i64| {
            usize::try_from(raw)
                .ok()
                .filter(|&node| node < nodes.get())
                .ok_or(ThresholdError::EdgeNodeOutOfRange {
                    edge: position,
                    node: raw,
                    node_count: nodes.get(),
                })
        };

        let edges = edges
            .iter()
            .enumerate()
            .map(|(position, &[source, target, weight])| -> Result<WeightedEdge> {
                let source = endpoint(position, source)?;
                let target = endpoint(position, target)?;
                let weight = u64::try_from(weight)
                    .map_err(|_| ThresholdError::NegativeWeight {
                        edge: position,
                        weight,
                    })?;
                Ok(WeightedEdge::new(source, target, weight))
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Self {
            node_count: nodes,
            edges,
        })
    }

    /// Returns the number of nodes.
    #[must_use]
    #[rustfmt::skip]
    pub const fn node_count(&self) -> NonZeroUsize { self.node_count }

    /// Returns the edges in input order.
    #[must_use]
    #[rustfmt::skip]
    pub const fn edges(&self) -> &[WeightedEdge] { self.edges.as_slice() }

    /// Returns the largest edge weight, or `None` for an edgeless graph.
    #[must_use]
    pub fn max_weight(&self) -> Option<u64> {
        self.edges.iter().map(WeightedEdge::weight).max()
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case(0)]
    #[case(-3)]
    fn from_raw_rejects_non_positive_node_counts(#[case] node_count: i64) {
        let err = Graph::from_raw(node_count, &[]).expect_err("must reject");
        assert_eq!(err, ThresholdError::InvalidNodeCount { got: node_count });
    }

    #[rstest]
    #[case::negative_source([-1, 0, 1], -1)]
    #[case::source_too_large([3, 0, 1], 3)]
    #[case::target_too_large([0, 7, 1], 7)]
    fn from_raw_rejects_out_of_range_endpoints(#[case] edge: [i64; 3], #[case] node: i64) {
        let err = Graph::from_raw(3, &[[0, 1, 2], edge]).expect_err("must reject");
        assert_eq!(
            err,
            ThresholdError::EdgeNodeOutOfRange {
                edge: 1,
                node,
                node_count: 3
            }
        );
    }

    #[test]
    fn from_raw_reports_first_offending_edge() {
        let err = Graph::from_raw(2, &[[0, 1, 1], [0, 1, -2], [5, 1, 1]])
            .expect_err("must reject");
        assert_eq!(err, ThresholdError::NegativeWeight { edge: 1, weight: -2 });
    }

    #[test]
    fn from_raw_keeps_edge_order_and_self_edges() {
        let graph = Graph::from_raw(3, &[[2, 1, 9], [1, 1, 0]]).expect("valid graph");
        assert_eq!(
            graph.edges(),
            &[WeightedEdge::new(2, 1, 9), WeightedEdge::new(1, 1, 0)]
        );
        assert_eq!(graph.max_weight(), Some(9));
    }

    #[test]
    fn new_rejects_empty_graph() {
        assert_eq!(
            Graph::new(0, Vec::new()),
            Err(ThresholdError::InvalidNodeCount { got: 0 })
        );
    }

    #[test]
    fn new_rejects_out_of_range_endpoint() {
        let err = Graph::new(2, vec![WeightedEdge::new(0, 2, 1)]).expect_err("must reject");
        assert_eq!(
            err,
            ThresholdError::EdgeNodeOutOfRange {
                edge: 0,
                node: 2,
                node_count: 2
            }
        );
    }

    #[test]
    fn new_saturates_unrepresentable_endpoint() {
        let err = Graph::new(2, vec![WeightedEdge::new(usize::MAX, 0, 1)])
            .expect_err("must reject");
        assert_eq!(
            err,
            ThresholdError::EdgeNodeOutOfRange {
                edge: 0,
                node: i64::MAX,
                node_count: 2
            }
        );
    }

    #[test]
    fn edgeless_graph_has_no_max_weight() {
        let graph = Graph::new(4, Vec::new()).expect("valid graph");
        assert_eq!(graph.max_weight(), None);
    }
}
