use crate::types::WordFrequencyMap;

/// Adds every (token, count) pair from `local_counts` into `global_counts`.
///
/// The local mapping is consumed; each local mapping is merged exactly once.
pub fn merge_word_counts(global_counts: &mut WordFrequencyMap, local_counts: WordFrequencyMap) {
    for (word, count) in local_counts {
        *global_counts.entry(word).or_insert(0) += count;
    }
}
