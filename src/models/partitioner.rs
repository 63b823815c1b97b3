use crate::types::{Chunk, Line};

/// Splits an ordered sequence of lines into contiguous chunks, one per worker.
#[derive(Copy, Clone)]
pub struct Partitioner {
    pub num_chunks: usize,
}

impl Partitioner {
    /// `num_chunks` must be at least 1; strategies validate the worker count
    /// before constructing a `Partitioner`.
    pub fn new(num_chunks: usize) -> Self {
        Self { num_chunks }
    }

    /// Produces exactly `num_chunks` chunks.
    ///
    /// Chunks `0..N-2` receive `total / N` lines each; the last chunk receives
    /// every remaining line. The remainder deliberately lands in the last chunk
    /// instead of being rebalanced, so all strategies see identical chunk shapes.
    /// With fewer lines than chunks the leading chunks are empty and the last
    /// chunk takes the whole input.
    pub fn partition(&self, lines: &[Line]) -> Vec<Chunk> {
        let base = lines.len() / self.num_chunks;

        (0..self.num_chunks)
            .map(|i| {
                if i < self.num_chunks - 1 {
                    lines[i * base..(i + 1) * base].to_vec()
                } else {
                    lines[i * base..].to_vec()
                }
            })
            .collect()
    }
}
