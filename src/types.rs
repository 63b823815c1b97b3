use std::collections::HashMap;

// Types listed here are either shared across multiple files and/or exposed via the library.

/// Represents a word token as an owned `String`. Tokens are the basic units used for
/// frequency counting and are always compared by exact value equality.
pub type Token = String;

/// Represents one record of input text as an owned `String`. Lines are immutable once read.
pub type Line = String;

/// A contiguous run of input lines assigned to exactly one worker. Chunks partition the
/// full input with no overlap and no gaps.
pub type Chunk = Vec<Line>;

/// Represents the total number of occurrences of a token within the processed input.
pub type WordFrequency = usize;

/// Represents a map of tokens to their frequency counts. The key is the `Token`, and the
/// value is the `WordFrequency`. Insertion order is irrelevant.
pub type WordFrequencyMap = HashMap<Token, WordFrequency>;
