use crate::types::Token;

#[derive(Copy, Clone)]
pub struct Tokenizer {
    pub fold_case: bool,
}

impl Tokenizer {
    /// Configuration for word-frequency counting (case-folded tokens)
    pub fn word_parser() -> Self {
        Self { fold_case: true }
    }

    /// Tokenizer function to split one line into individual word tokens.
    ///
    /// A word token is a maximal run of alphanumeric or underscore characters;
    /// everything else (punctuation, whitespace) is a delimiter and produces no
    /// token. An empty line produces an empty sequence.
    pub fn tokenize(self, line: &str) -> Vec<Token> {
        line.split(|c: char| !c.is_alphanumeric() && c != '_')
            .filter(|word| !word.is_empty())
            .map(|word| {
                if self.fold_case {
                    word.to_lowercase()
                } else {
                    word.to_string()
                }
            })
            .collect()
    }
}
