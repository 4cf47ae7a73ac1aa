//! Tests for error codes and kinds exposed by `mintime-core`.

use std::time::Duration;

use mintime_core::{ErrorKind, ThresholdError, ThresholdErrorCode};
use rstest::rstest;

#[rstest]
#[case(
    ThresholdError::InvalidNodeCount { got: 0 },
    ThresholdErrorCode::InvalidNodeCount,
    "MINTIME_INVALID_NODE_COUNT",
    ErrorKind::InvalidArgument,
)]
#[case(
    ThresholdError::InvalidMinComponents { got: -1 },
    ThresholdErrorCode::InvalidMinComponents,
    "MINTIME_INVALID_MIN_COMPONENTS",
    ErrorKind::InvalidArgument,
)]
#[case(
    ThresholdError::EdgeNodeOutOfRange { edge: 2, node: 5, node_count: 3 },
    ThresholdErrorCode::EdgeNodeOutOfRange,
    "MINTIME_EDGE_NODE_OUT_OF_RANGE",
    ErrorKind::InvalidArgument,
)]
#[case(
    ThresholdError::NegativeWeight { edge: 0, weight: -7 },
    ThresholdErrorCode::NegativeWeight,
    "MINTIME_NEGATIVE_WEIGHT",
    ErrorKind::InvalidArgument,
)]
#[case(
    ThresholdError::NodeOutOfRange { node: 4, node_count: 2 },
    ThresholdErrorCode::NodeOutOfRange,
    "MINTIME_NODE_OUT_OF_RANGE",
    ErrorKind::InvalidArgument,
)]
#[case(
    ThresholdError::DeadlineExceeded { budget: Duration::from_millis(5), probes: 3 },
    ThresholdErrorCode::DeadlineExceeded,
    "MINTIME_DEADLINE_EXCEEDED",
    ErrorKind::DeadlineExceeded,
)]
fn returns_expected_code_and_kind(
    #[case] error: ThresholdError,
    #[case] expected: ThresholdErrorCode,
    #[case] code: &str,
    #[case] kind: ErrorKind,
) {
    assert_eq!(error.code(), expected);
    assert_eq!(error.code().as_str(), code);
    assert_eq!(error.code().to_string(), code);
    assert_eq!(error.kind(), kind);
}

#[rstest]
fn messages_name_the_offending_input() {
    let err = ThresholdError::EdgeNodeOutOfRange {
        edge: 2,
        node: -1,
        node_count: 3,
    };
    assert_eq!(
        err.to_string(),
        "edge 2 references node -1, but node_count is 3"
    );
    assert_eq!(
        ThresholdError::NegativeWeight { edge: 1, weight: -4 }.to_string(),
        "edge 1 has negative weight -4"
    );
}
