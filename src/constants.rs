use crate::models::BenchmarkConfig;

/// Worker count applied to both non-sequential strategies when none is given.
pub const DEFAULT_NUM_WORKERS: usize = 4;

pub const DEFAULT_BENCHMARK_CONFIG: BenchmarkConfig = BenchmarkConfig {
    num_workers: DEFAULT_NUM_WORKERS,
};
