use crate::models::Tokenizer;
use crate::types::{Line, WordFrequencyMap};

/// Counts token frequencies within one chunk of lines.
///
/// Accumulation is a pure function of the lines it is given. No shared state is
/// touched, so an accumulator is safe to run in any execution context without
/// internal synchronization.
pub struct WordAccumulator {
    tokenizer: Tokenizer,
}

impl WordAccumulator {
    pub fn new(tokenizer: Tokenizer) -> Self {
        Self { tokenizer }
    }

    /// Tokenizes every line in order and counts occurrences into a local mapping.
    ///
    /// An empty chunk yields an empty mapping and contributes nothing to a merge.
    pub fn count_lines(&self, lines: &[Line]) -> WordFrequencyMap {
        let mut local_count = WordFrequencyMap::new();

        for line in lines {
            for word in self.tokenizer.tokenize(line) {
                *local_count.entry(word).or_insert(0) += 1;
            }
        }

        local_count
    }
}
