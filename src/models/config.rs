/// Knobs for one benchmark run.
///
/// `num_workers` controls the shared-memory and message-passing strategies
/// identically so that their results stay comparable.
#[derive(Copy, Clone)]
pub struct BenchmarkConfig {
    pub num_workers: usize,
}
