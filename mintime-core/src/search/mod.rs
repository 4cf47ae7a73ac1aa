//! Binary search for the smallest threshold that splits a graph into at
//! least `k` components.
//!
//! For a candidate `T` only the edges with `weight > T` are merged; edges at
//! or below the candidate are dropped. Raising `T` removes merges, so the
//! component count never decreases as `T` grows and the set of accepted
//! candidates is upward closed. The search returns the smallest accepted
//! candidate in `[0, max_weight]`, or `max_weight` itself when no candidate
//! can reach `k` components (`k > node_count`).
//!
//! Note the direction of the predicate: this is *not* the usual "edges of
//! weight at most `T` are usable" formulation. Callers wanting that reading
//! should not reinterpret the result.

use std::{
    num::NonZeroUsize,
    time::{Duration, Instant},
};

use tracing::{debug, info, instrument, warn};

use crate::{
    PathCompression, Result, ThresholdSearchBuilder, error::ThresholdError, graph::Graph,
    union_find::DisjointSet,
};

/// One evaluated candidate threshold.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct Probe {
    candidate: u64,
    components: usize,
    feasible: bool,
}

impl Probe {
    /// Returns the candidate threshold that was tested.
    #[must_use]
    #[rustfmt::skip]
    pub const fn candidate(&self) -> u64 { self.candidate }

    /// Returns the number of components left after merging heavier edges.
    #[must_use]
    #[rustfmt::skip]
    pub const fn components(&self) -> usize { self.components }

    /// Returns `true` when the candidate met the component target.
    #[must_use]
    #[rustfmt::skip]
    pub const fn is_feasible(&self) -> bool { self.feasible }
}

/// Result of a completed threshold search.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct SearchOutcome {
    threshold: u64,
    probes: Vec<Probe>,
    satisfiable: bool,
}

impl SearchOutcome {
    /// Returns the computed threshold.
    #[must_use]
    #[rustfmt::skip]
    pub const fn threshold(&self) -> u64 { self.threshold }

    /// Returns the probes in evaluation order.
    #[must_use]
    #[rustfmt::skip]
    pub const fn probes(&self) -> &[Probe] { self.probes.as_slice() }

    /// Returns `false` when the component target exceeds the node count.
    ///
    /// An unsatisfiable search still yields a threshold: the maximum edge
    /// weight, or zero for an edgeless graph.
    #[must_use]
    #[rustfmt::skip]
    pub const fn is_satisfiable(&self) -> bool { self.satisfiable }
}

/// Configured threshold search.
///
/// Instances are stateless between runs; every probe builds its own
/// [`DisjointSet`].
///
/// # Examples
/// ```
/// use mintime_core::{Graph, ThresholdSearchBuilder};
///
/// let graph = Graph::from_raw(4, &[[0, 1, 3], [1, 2, 1], [2, 3, 4]])?;
/// let search = ThresholdSearchBuilder::new().with_min_components(3).build()?;
/// let outcome = search.run(&graph)?;
/// assert_eq!(outcome.threshold(), 3);
/// assert!(outcome.is_satisfiable());
/// # Ok::<(), mintime_core::ThresholdError>(())
/// ```
#[derive(Debug, Clone)]
pub struct ThresholdSearch {
    min_components: NonZeroUsize,
    compression: PathCompression,
    time_budget: Option<Duration>,
}

impl ThresholdSearch {
    pub(crate) fn new(
        min_components: NonZeroUsize,
        compression: PathCompression,
        time_budget: Option<Duration>,
    ) -> Self {
        Self {
            min_components,
            compression,
            time_budget,
        }
    }

    /// Returns a builder for configuring a search.
    #[must_use]
    pub fn builder() -> ThresholdSearchBuilder {
        ThresholdSearchBuilder::new()
    }

    /// Returns the component target `k`.
    #[must_use]
    #[rustfmt::skip]
    pub const fn min_components(&self) -> NonZeroUsize { self.min_components }

    /// Returns the compression mode used by every probe.
    #[must_use]
    #[rustfmt::skip]
    pub const fn path_compression(&self) -> PathCompression { self.compression }

    /// Returns the configured time budget, if any.
    #[must_use]
    #[rustfmt::skip]
    pub const fn time_budget(&self) -> Option<Duration> { self.time_budget }

    /// Counts the components left when only edges heavier than `candidate`
    /// are merged.
    ///
    /// # Examples
    /// ```
    /// use mintime_core::{Graph, ThresholdSearch};
    ///
    /// let graph = Graph::from_raw(4, &[[0, 1, 3], [1, 2, 1], [2, 3, 4]])?;
    /// let search = ThresholdSearch::builder().build()?;
    /// assert_eq!(search.components_above(&graph, 0), 1);
    /// assert_eq!(search.components_above(&graph, 2), 2);
    /// assert_eq!(search.components_above(&graph, 4), 4);
    /// # Ok::<(), mintime_core::ThresholdError>(())
    /// ```
    #[must_use]
    pub fn components_above(&self, graph: &Graph, candidate: u64) -> usize {
        let mut set = DisjointSet::with_compression(graph.node_count().get(), self.compression);
        for edge in graph.edges() {
            if edge.weight() > candidate {
                // Graph construction guarantees both endpoints are in range.
                set.union_roots(edge.source(), edge.target());
            }
        }
        set.count_distinct_roots()
    }

    /// Runs the binary search over `[0, max_weight]`.
    ///
    /// # Errors
    /// Returns [`ThresholdError::DeadlineExceeded`] when a time budget is
    /// configured and runs out before the search converges.
    #[instrument(
        name = "search.run",
        err,
        skip(self, graph),
        fields(
            nodes = graph.node_count().get(),
            edges = graph.edges().len(),
            min_components = self.min_components.get(),
            compression = ?self.compression
        ),
    )]
    pub fn run(&self, graph: &Graph) -> Result<SearchOutcome> {
        let target = self.min_components.get();
        let satisfiable = target <= graph.node_count().get();
        if !satisfiable {
            warn!(
                min_components = target,
                nodes = graph.node_count().get(),
                "component target exceeds node count; no candidate can be accepted",
            );
        }

        let Some(max_weight) = graph.max_weight() else {
            debug!("graph has no edges, threshold is zero");
            return Ok(SearchOutcome {
                threshold: 0,
                probes: Vec::new(),
                satisfiable,
            });
        };

        let started = Instant::now();
        let mut low = 0_u64;
        let mut high = max_weight;
        let mut answer = max_weight;
        let mut probes = Vec::new();

        while low <= high {
            self.check_budget(started, probes.len())?;

            let candidate = low.midpoint(high);
            let components = self.components_above(graph, candidate);
            let feasible = components >= target;
            debug!(candidate, components, feasible, "probe evaluated");
            probes.push(Probe {
                candidate,
                components,
                feasible,
            });

            if feasible {
                answer = candidate;
                let Some(next) = candidate.checked_sub(1) else {
                    break;
                };
                high = next;
            } else {
                let Some(next) = candidate.checked_add(1) else {
                    break;
                };
                low = next;
            }
        }

        info!(
            threshold = answer,
            probes = probes.len(),
            satisfiable,
            "threshold search completed"
        );
        Ok(SearchOutcome {
            threshold: answer,
            probes,
            satisfiable,
        })
    }

    fn check_budget(&self, started: Instant, probes: usize) -> Result<()> {
        match self.time_budget {
            Some(budget) if started.elapsed() >= budget => {
                Err(ThresholdError::DeadlineExceeded { budget, probes })
            }
            _ => Ok(()),
        }
    }
}

/// Computes the smallest threshold `T` such that merging only the edges with
/// `weight > T` leaves at least `min_components` components among
/// `node_count` nodes.
///
/// Returns 0 for an edgeless graph. When `min_components > node_count` no
/// threshold qualifies and the maximum edge weight is returned.
///
/// # Errors
/// Returns an [`crate::ErrorKind::InvalidArgument`] error when `node_count`
/// or `min_components` is not positive, when an edge endpoint lies outside
/// `[0, node_count)`, or when a weight is negative.
///
/// # Examples
/// ```
/// use mintime_core::min_time;
///
/// assert_eq!(min_time(1, &[], 1)?, 0);
/// assert_eq!(min_time(4, &[[0, 1, 3], [1, 2, 1], [2, 3, 4]], 4)?, 4);
/// assert_eq!(min_time(2, &[[0, 1, 5]], 2)?, 5);
/// # Ok::<(), mintime_core::ThresholdError>(())
/// ```
pub fn min_time(node_count: i64, edges: &[[i64; 3]], min_components: i64) -> Result<u64> {
    let graph = Graph::from_raw(node_count, edges)?;
    if min_components <= 0 {
        return Err(ThresholdError::InvalidMinComponents {
            got: min_components,
        });
    }
    // Targets beyond the address space behave like any other `k > n`.
    let min_components = usize::try_from(min_components).unwrap_or(usize::MAX);

    let search = ThresholdSearchBuilder::new()
        .with_min_components(min_components)
        .build()?;
    Ok(search.run(&graph)?.threshold())
}

#[cfg(test)]
mod property;
