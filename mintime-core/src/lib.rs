//! mintime core library.
//!
//! Finds the smallest threshold `T` at which merging only the edges heavier
//! than `T` leaves a weighted undirected graph split into at least `k`
//! components. The search combines a rank-balanced, path-compressing
//! [`DisjointSet`] with a binary search that rebuilds connectivity for every
//! candidate.
//!
//! # Examples
//! ```
//! use mintime_core::min_time;
//!
//! let edges = [[0, 1, 3], [1, 2, 1], [2, 3, 4]];
//! assert_eq!(min_time(4, &edges, 2)?, 1);
//! # Ok::<(), mintime_core::ThresholdError>(())
//! ```

mod builder;
mod error;
mod graph;
mod search;
#[cfg(test)]
mod test_utils;
mod union_find;

pub use crate::{
    builder::ThresholdSearchBuilder,
    error::{ErrorKind, Result, ThresholdError, ThresholdErrorCode},
    graph::{Graph, WeightedEdge},
    search::{Probe, SearchOutcome, ThresholdSearch, min_time},
    union_find::{DisjointSet, PathCompression},
};
