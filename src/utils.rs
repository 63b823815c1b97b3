pub mod merge_word_counts;

pub use merge_word_counts::merge_word_counts;
