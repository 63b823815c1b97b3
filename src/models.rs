pub mod benchmark_runner;
pub use benchmark_runner::{BenchmarkReport, BenchmarkRunner};

pub mod config;
pub use config::BenchmarkConfig;

pub mod error;
pub use error::Error;

pub mod partitioner;
pub use partitioner::Partitioner;

pub mod strategies;
pub use strategies::{count_words_concurrent, count_words_parallel, count_words_sequential};

pub mod tokenizer;
pub use tokenizer::Tokenizer;

pub mod word_accumulator;
pub use word_accumulator::WordAccumulator;
