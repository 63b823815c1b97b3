use std::sync::mpsc;
use std::sync::{Arc, Mutex, PoisonError};
use std::thread;

use crate::models::{Error, Partitioner, Tokenizer, WordAccumulator};
use crate::types::{Line, WordFrequencyMap};
use crate::utils::merge_word_counts;

/// Tokenizes and accumulates the entire input in a single pass, with no
/// partitioning and no merge step. Used as the correctness baseline and the
/// timing reference for speedup ratios.
pub fn count_words_sequential(lines: &[Line]) -> WordFrequencyMap {
    let accumulator = WordAccumulator::new(Tokenizer::word_parser());
    accumulator.count_lines(lines)
}

/// Counts words with `num_workers` threads merging into one shared mapping.
///
/// Each worker accumulates its chunk into a private local mapping with no lock
/// held, then folds the local counts into the shared mapping inside the mutex
/// critical section, so no two workers can interleave increments on the same
/// key. The shared mapping is only read back after every worker has joined.
pub fn count_words_concurrent(
    lines: &[Line],
    num_workers: usize,
) -> Result<WordFrequencyMap, Error> {
    if num_workers == 0 {
        return Err(Error::InvalidWorkerCount(num_workers));
    }

    let chunks = Partitioner::new(num_workers).partition(lines);
    let word_count = Arc::new(Mutex::new(WordFrequencyMap::new()));
    let mut handles = Vec::with_capacity(num_workers);

    for chunk in chunks {
        let shared_count = Arc::clone(&word_count);

        handles.push(thread::spawn(move || {
            let accumulator = WordAccumulator::new(Tokenizer::word_parser());
            let local_count = accumulator.count_lines(&chunk);

            let mut global_count = shared_count
                .lock()
                .unwrap_or_else(PoisonError::into_inner);
            merge_word_counts(&mut global_count, local_count);
        }));
    }

    for handle in handles {
        handle.join().map_err(|_| {
            Error::WorkerFailure("a shared-memory worker panicked before merging".to_string())
        })?;
    }

    let global_count = Arc::try_unwrap(word_count)
        .map_err(|_| {
            Error::WorkerFailure("the shared mapping still has owners after join".to_string())
        })?
        .into_inner()
        .unwrap_or_else(PoisonError::into_inner);

    Ok(global_count)
}

/// Counts words with `num_workers` workers that share no mutable state.
///
/// Each worker sends its local mapping over a channel exactly once. The
/// orchestrator receives all `num_workers` mappings before merging them in a
/// single-owner pass, so no locking is involved anywhere. A worker that dies
/// before delivering its mapping fails the whole run; its counts are never
/// silently dropped from the totals.
pub fn count_words_parallel(
    lines: &[Line],
    num_workers: usize,
) -> Result<WordFrequencyMap, Error> {
    if num_workers == 0 {
        return Err(Error::InvalidWorkerCount(num_workers));
    }

    let chunks = Partitioner::new(num_workers).partition(lines);
    let (sender, receiver) = mpsc::channel();
    let mut handles = Vec::with_capacity(num_workers);

    for chunk in chunks {
        let result_sender = sender.clone();

        handles.push(thread::spawn(move || {
            let accumulator = WordAccumulator::new(Tokenizer::word_parser());
            let local_count = accumulator.count_lines(&chunk);

            // A send failure means the orchestrator already gave up on this run.
            let _ = result_sender.send(local_count);
        }));
    }

    // Without this, `recv` below could never observe a dead worker.
    drop(sender);

    let mut local_counts = Vec::with_capacity(num_workers);
    for _ in 0..num_workers {
        let local_count = receiver.recv().map_err(|_| {
            Error::WorkerFailure(
                "a worker terminated before delivering its local mapping".to_string(),
            )
        })?;
        local_counts.push(local_count);
    }

    for handle in handles {
        handle.join().map_err(|_| {
            Error::WorkerFailure("a worker panicked after delivering its local mapping".to_string())
        })?;
    }

    let mut global_count = WordFrequencyMap::new();
    for local_count in local_counts {
        merge_word_counts(&mut global_count, local_count);
    }

    Ok(global_count)
}
