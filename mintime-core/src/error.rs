//! Error types for the mintime core library.
//!
//! Defines the error enum exposed by the public API, its stable codes, the
//! coarse [`ErrorKind`] taxonomy, and a convenient result alias.

use std::{fmt, time::Duration};

use thiserror::Error;

macro_rules! define_error_codes {
    (
        $(#[$enum_meta:meta])*
        enum $CodeTy:ident for $ErrTy:ident {
            $(
                $(#[$variant_meta:meta])*
                $CodeVariant:ident => $ErrVariant:ident $( { $($pattern:tt)* } )? => $code:expr
            ),+ $(,)?
        }
    ) => {
        $(#[$enum_meta])*
        #[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
        #[non_exhaustive]
        pub enum $CodeTy {
            $(
                $(#[$variant_meta])*
                $CodeVariant,
            )+
        }

        impl $CodeTy {
            /// Return the stable machine-readable representation of this error code.
            #[must_use]
            pub const fn as_str(self) -> &'static str {
                match self {
                    $(Self::$CodeVariant => $code,)+
                }
            }
        }

        impl fmt::Display for $CodeTy {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl $ErrTy {
            #[doc = concat!(
                "Retrieve the stable [`",
                stringify!($CodeTy),
                "`] for this error."
            )]
            #[must_use]
            pub const fn code(&self) -> $CodeTy {
                match self {
                    $(Self::$ErrVariant $( { $($pattern)* } )? => $CodeTy::$CodeVariant,)+
                }
            }
        }
    };
}

/// Coarse classification of [`ThresholdError`] values.
///
/// Every malformed input maps to [`ErrorKind::InvalidArgument`]; the search
/// itself has no transient failure modes, so nothing here is retryable.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
#[non_exhaustive]
pub enum ErrorKind {
    /// The caller supplied a value outside the accepted domain.
    InvalidArgument,
    /// The configured time budget ran out before the search converged.
    DeadlineExceeded,
}

/// Error type produced when validating input or running a threshold search.
#[non_exhaustive]
#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum ThresholdError {
    /// The node count was zero, negative, or not addressable on this target.
    #[error("node count must be a positive addressable integer (got {got})")]
    InvalidNodeCount {
        /// The rejected node count.
        got: i64,
    },
    /// The required component count was zero or negative.
    #[error("min_components must be at least 1 (got {got})")]
    InvalidMinComponents {
        /// The rejected component count.
        got: i64,
    },
    /// An edge referenced an endpoint outside `[0, node_count)`.
    #[error("edge {edge} references node {node}, but node_count is {node_count}")]
    EdgeNodeOutOfRange {
        /// Position of the offending edge in the input sequence.
        edge: usize,
        /// The out-of-range endpoint as supplied.
        ///
        /// Typed endpoints from [`crate::Graph::new`] above `i64::MAX`
        /// saturate to `i64::MAX`.
        node: i64,
        /// Number of nodes in the graph.
        node_count: usize,
    },
    /// An edge carried a negative weight.
    #[error("edge {edge} has negative weight {weight}")]
    NegativeWeight {
        /// Position of the offending edge in the input sequence.
        edge: usize,
        /// The rejected weight.
        weight: i64,
    },
    /// A union-find lookup addressed a node the structure does not hold.
    #[error("node {node} is out of range for a disjoint set of {node_count} nodes")]
    NodeOutOfRange {
        /// The requested node.
        node: usize,
        /// Number of nodes held by the disjoint set.
        node_count: usize,
    },
    /// The configured time budget was exhausted mid-search.
    #[error("threshold search exceeded its {budget:?} budget after {probes} probes")]
    DeadlineExceeded {
        /// The configured budget.
        budget: Duration,
        /// Probes completed before the budget ran out.
        probes: usize,
    },
}

define_error_codes! {
    /// Stable codes describing [`ThresholdError`] variants.
    enum ThresholdErrorCode for ThresholdError {
        /// The node count was zero, negative, or not addressable.
        InvalidNodeCount => InvalidNodeCount { .. } => "MINTIME_INVALID_NODE_COUNT",
        /// The required component count was zero or negative.
        InvalidMinComponents => InvalidMinComponents { .. } => "MINTIME_INVALID_MIN_COMPONENTS",
        /// An edge referenced an endpoint outside the graph.
        EdgeNodeOutOfRange => EdgeNodeOutOfRange { .. } => "MINTIME_EDGE_NODE_OUT_OF_RANGE",
        /// An edge carried a negative weight.
        NegativeWeight => NegativeWeight { .. } => "MINTIME_NEGATIVE_WEIGHT",
        /// A union-find lookup addressed a missing node.
        NodeOutOfRange => NodeOutOfRange { .. } => "MINTIME_NODE_OUT_OF_RANGE",
        /// The configured time budget was exhausted.
        DeadlineExceeded => DeadlineExceeded { .. } => "MINTIME_DEADLINE_EXCEEDED",
    }
}

impl ThresholdError {
    /// Returns the coarse [`ErrorKind`] for this error.
    ///
    /// # Examples
    /// ```
    /// use mintime_core::{ErrorKind, ThresholdError};
    ///
    /// let err = ThresholdError::NegativeWeight { edge: 0, weight: -1 };
    /// assert_eq!(err.kind(), ErrorKind::InvalidArgument);
    /// ```
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::DeadlineExceeded { .. } => ErrorKind::DeadlineExceeded,
            _ => ErrorKind::InvalidArgument,
        }
    }
}

/// Convenient alias for results returned by the core API.
pub type Result<T> = core::result::Result<T, ThresholdError>;
