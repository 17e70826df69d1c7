//! Closed-loop latency micro-benchmark harness.
//!
//! [`runner`] times an injected operation a fixed number of times, one call
//! in flight at a time, and hands the full latency vector to [`stats`] for
//! the mean and percentile report. Any failure anywhere aborts the whole
//! run; a partial sample set is never summarized.

pub mod runner;
pub mod stats;
