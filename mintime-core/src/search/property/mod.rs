//! Property-based tests for the threshold search.
//!
//! Checks the binary search against a linear-scan oracle built on naive
//! component labelling, and verifies bounds, idempotence, and monotonicity in
//! the component target across generated graphs.

mod oracle;
mod strategies;
