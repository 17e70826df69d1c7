use clap::Parser;
use searchbench_client::{Client, ClientConfig};
use searchbench_common::SearchBenchError;
use searchbench_harness::runner;
use searchbench_harness::stats::{self, Summary};
use std::process;

// Backend and query are fixed; the only knob is how many timed requests to issue.
const BENCH_ADDR: &str = "localhost:9200";
const BENCH_INDEX: &str = "bench_index";

#[derive(Parser)]
#[command(name = "searchbench", about = "Closed-loop search latency micro-benchmark")]
struct Args {
    /// Number of timed search requests to issue
    #[arg(long, default_value_t = 1000)]
    runs: usize,
}

fn main() {
    let args = Args::parse();

    if args.runs == 0 {
        eprintln!("--runs must be a positive integer");
        process::exit(2);
    }

    // Client construction is amortized outside the loop; each timed iteration
    // covers exactly one search end-to-end.
    let client = Client::new(ClientConfig { addr: BENCH_ADDR.to_string() }).unwrap_or_else(|e| {
        eprintln!("Failed to construct search client: {e}");
        process::exit(2);
    });

    let query = serde_json::json!({
        "query": { "query_string": { "query": "*" } },
        "size": 10
    });

    let samples = runner::run(args.runs, || {
        let response = client.search(BENCH_INDEX, &query)?;
        match response.hits {
            Some(hits) => Ok(hits),
            None => Err(SearchBenchError::EmptyResult(BENCH_INDEX.to_string())),
        }
    })
    .unwrap_or_else(|e| {
        eprintln!("Benchmark run failed: {e}");
        process::exit(1);
    });

    let summary = stats::summarize(samples).unwrap_or_else(|e| {
        eprintln!("Failed to summarize run: {e}");
        process::exit(1);
    });

    print_report(&summary);
}

fn print_report(summary: &Summary) {
    println!("took mean {}ns", summary.mean_ns);
    for &(p, value) in &summary.percentiles {
        println!("Percentile {} : {} ns", p, value.as_nanos());
    }
}
