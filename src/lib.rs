mod constants;
pub mod models;
pub use constants::{DEFAULT_BENCHMARK_CONFIG, DEFAULT_NUM_WORKERS};
pub use models::{
    count_words_concurrent, count_words_parallel, count_words_sequential, BenchmarkConfig,
    BenchmarkReport, BenchmarkRunner, Error, Partitioner, Tokenizer, WordAccumulator,
};
pub mod types;
mod utils;
pub use types::{Chunk, Line, Token, WordFrequency, WordFrequencyMap};

use std::path::Path;

/// Runs the full sequential / shared-memory / message-passing comparison over
/// the text file at `file_path` and returns the timing report.
pub fn run_word_count_benchmark(
    file_path: &Path,
    config: BenchmarkConfig,
) -> Result<BenchmarkReport, Error> {
    let report = BenchmarkRunner::new(config).run_on_file(file_path)?;

    Ok(report)
}
