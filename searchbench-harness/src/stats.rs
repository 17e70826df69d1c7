use searchbench_common::{Result, SearchBenchError, PERCENTILES};
use std::time::Duration;

/// Aggregate statistics for one benchmark run.
#[derive(Debug, Clone, PartialEq)]
pub struct Summary {
    pub runs: usize,
    /// Arithmetic mean latency in nanoseconds.
    pub mean_ns: f64,
    /// One `(fraction, latency)` entry per canonical fraction, ascending.
    pub percentiles: Vec<(f64, Duration)>,
}

/// Reduce a full run's samples to a [`Summary`].
///
/// Takes ownership of the vector: the mean is computed over the collection
/// order first, then the samples are sorted in place for rank extraction.
/// An empty sample set is an explicit error, never a division by zero.
pub fn summarize(mut samples: Vec<Duration>) -> Result<Summary> {
    if samples.is_empty() {
        return Err(SearchBenchError::NoSamples);
    }

    let runs = samples.len();
    let mean_ns = samples.iter().map(|d| d.as_nanos() as f64).sum::<f64>() / runs as f64;

    samples.sort_unstable();

    let percentiles = PERCENTILES
        .iter()
        .map(|&p| Ok((p, percentile(&samples, p)?)))
        .collect::<Result<Vec<_>>>()?;

    Ok(Summary { runs, mean_ns, percentiles })
}

/// Value at fractional rank `p` within `sorted` (ascending order required).
///
/// The selected index is `floor(p * n) - 1`, so `p = 1.0` lands on the
/// maximum. When `p * n < 1` the formula goes negative and is clamped to
/// index 0; a single-sample run therefore answers every percentile with
/// that one sample. Fractions outside `(0.0, 1.0]` are rejected.
pub fn percentile(sorted: &[Duration], p: f64) -> Result<Duration> {
    if sorted.is_empty() {
        return Err(SearchBenchError::NoSamples);
    }
    if !(p > 0.0 && p <= 1.0) {
        return Err(SearchBenchError::InvalidPercentile(p));
    }

    let rank = (p * sorted.len() as f64).floor() as i64 - 1;
    let idx = rank.clamp(0, sorted.len() as i64 - 1) as usize;
    Ok(sorted[idx])
}
