use searchbench_common::{Result, SearchBenchError};
use std::hint::black_box;
use std::time::{Duration, Instant};

/// Execute `op` exactly `runs` times, strictly sequentially, timing each call.
///
/// The timer wraps only the call itself; whatever setup the caller amortizes
/// outside the closure stays outside the measurement. The first `Err` from
/// `op` aborts the loop and propagates — no retries, no skips, and the
/// samples collected up to that point are discarded.
///
/// Returns one `Duration` per iteration, in execution order.
pub fn run<F, T>(runs: usize, mut op: F) -> Result<Vec<Duration>>
where
    F: FnMut() -> Result<T>,
{
    if runs == 0 {
        return Err(SearchBenchError::NoSamples);
    }

    let mut latencies = Vec::with_capacity(runs);
    for _ in 0..runs {
        let start = Instant::now();
        let outcome = op();
        let elapsed = start.elapsed();

        // Keep the measured work observable to the optimizer.
        black_box(outcome?);

        latencies.push(elapsed);
    }

    Ok(latencies)
}
