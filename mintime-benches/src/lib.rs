//! Benchmark support crate for mintime.
//!
//! Provides seeded synthetic graphs and parameter labels used by the
//! Criterion benchmarks of the threshold search.

pub mod error;
pub mod graphs;
pub mod params;
