use std::fmt;
use std::fs;
use std::path::Path;
use std::time::{Duration, Instant};

use log::{info, warn};

use crate::models::{
    count_words_concurrent, count_words_parallel, count_words_sequential, BenchmarkConfig, Error,
};
use crate::types::{Line, WordFrequencyMap};

/// Wall-clock timings and speedup ratios for one three-way comparison run.
pub struct BenchmarkReport {
    pub sequential_time: Duration,
    pub concurrent_time: Duration,
    pub parallel_time: Duration,
    /// `sequential_time / concurrent_time`.
    pub concurrent_speedup: f64,
    /// `sequential_time / parallel_time`.
    pub parallel_speedup: f64,
    /// Advisory only: whether all three strategies produced identical mappings.
    pub results_agree: bool,
    /// The sequential strategy's global mapping, reported as the run's result.
    pub word_count: WordFrequencyMap,
}

impl fmt::Display for BenchmarkReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Sequential Processing Time: {:.2} seconds",
            self.sequential_time.as_secs_f64()
        )?;
        writeln!(
            f,
            "Shared-Memory Processing Time: {:.2} seconds",
            self.concurrent_time.as_secs_f64()
        )?;
        writeln!(
            f,
            "Message-Passing Processing Time: {:.2} seconds",
            self.parallel_time.as_secs_f64()
        )?;
        writeln!(f)?;
        writeln!(f, "Speedup Comparison:")?;
        writeln!(
            f,
            "Speedup with Shared-Memory Workers: {:.2}x",
            self.concurrent_speedup
        )?;
        writeln!(
            f,
            "Speedup with Message-Passing Workers: {:.2}x",
            self.parallel_speedup
        )?;
        writeln!(f)?;
        writeln!(f, "Unique words: {}", self.word_count.len())?;
        write!(f, "Results agree: {}", self.results_agree)
    }
}

/// Runs the three counting strategies over one input and times each of them.
pub struct BenchmarkRunner {
    config: BenchmarkConfig,
}

impl BenchmarkRunner {
    pub fn new(config: BenchmarkConfig) -> Self {
        Self { config }
    }

    /// Reads the whole input file up front, then runs the comparison.
    ///
    /// A missing or unreadable file aborts the benchmark before any strategy runs.
    pub fn run_on_file(&self, file_path: &Path) -> Result<BenchmarkReport, Error> {
        let text = fs::read_to_string(file_path)?;
        let lines: Vec<Line> = text.lines().map(|line| line.to_string()).collect();

        self.run(&lines)
    }

    /// Runs Sequential, Concurrent, and Parallel in turn over the same lines.
    ///
    /// The input is never mutated. The equality check across the three global
    /// mappings is advisory; a disagreement is logged as a warning rather than
    /// failing the run.
    pub fn run(&self, lines: &[Line]) -> Result<BenchmarkReport, Error> {
        let num_workers = self.config.num_workers;
        if num_workers == 0 {
            return Err(Error::InvalidWorkerCount(num_workers));
        }

        info!("Counting {} lines sequentially", lines.len());
        let started_at = Instant::now();
        let sequential_count = count_words_sequential(lines);
        let sequential_time = started_at.elapsed();

        info!("Counting with {} shared-memory workers", num_workers);
        let started_at = Instant::now();
        let concurrent_count = count_words_concurrent(lines, num_workers)?;
        let concurrent_time = started_at.elapsed();

        info!("Counting with {} message-passing workers", num_workers);
        let started_at = Instant::now();
        let parallel_count = count_words_parallel(lines, num_workers)?;
        let parallel_time = started_at.elapsed();

        let results_agree =
            sequential_count == concurrent_count && sequential_count == parallel_count;
        if !results_agree {
            warn!("Strategy results disagree; reporting the sequential mapping");
        }

        Ok(BenchmarkReport {
            sequential_time,
            concurrent_time,
            parallel_time,
            concurrent_speedup: speedup(sequential_time, concurrent_time),
            parallel_speedup: speedup(sequential_time, parallel_time),
            results_agree,
            word_count: sequential_count,
        })
    }
}

fn speedup(sequential_time: Duration, strategy_time: Duration) -> f64 {
    sequential_time.as_secs_f64() / strategy_time.as_secs_f64()
}
