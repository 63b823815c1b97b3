use wordcount_bench::Tokenizer;

#[cfg(test)]
mod word_parser_tokenizer_tests {
    use super::*;

    #[test]
    fn test_tokenize_simple_line() {
        let tokenizer = Tokenizer::word_parser();

        let line = "a b a";
        let tokens = tokenizer.tokenize(line);
        assert_eq!(tokens, vec!["a", "b", "a"]);
    }

    #[test]
    fn test_tokenize_folds_case() {
        let tokenizer = Tokenizer::word_parser();

        let line = "Word word WORD";
        let tokens = tokenizer.tokenize(line);
        assert_eq!(tokens, vec!["word", "word", "word"]);
    }

    #[test]
    fn test_tokenize_is_idempotent() {
        let tokenizer = Tokenizer::word_parser();

        let line = "The quick brown fox jumps over the lazy dog";
        let first = tokenizer.tokenize(line);
        let second = tokenizer.tokenize(line);
        assert_eq!(first, second);
    }

    #[test]
    fn test_tokenize_with_punctuation() {
        let tokenizer = Tokenizer::word_parser();

        let line = "Hello, world! (This is fine.)";
        let tokens = tokenizer.tokenize(line);
        assert_eq!(tokens, vec!["hello", "world", "this", "is", "fine"]);
    }

    #[test]
    fn test_tokenize_keeps_underscores_and_digits() {
        let tokenizer = Tokenizer::word_parser();

        let line = "snake_case word0 word1";
        let tokens = tokenizer.tokenize(line);
        assert_eq!(tokens, vec!["snake_case", "word0", "word1"]);
    }

    #[test]
    fn test_tokenize_with_multiple_spaces() {
        let tokenizer = Tokenizer::word_parser();

        let line = "spaced    out     words";
        let tokens = tokenizer.tokenize(line);
        assert_eq!(tokens, vec!["spaced", "out", "words"]);
    }

    #[test]
    fn test_tokenize_with_tabs() {
        let tokenizer = Tokenizer::word_parser();

        let line = "one\ttwo\tthree";
        let tokens = tokenizer.tokenize(line);
        assert_eq!(tokens, vec!["one", "two", "three"]);
    }

    #[test]
    fn test_tokenize_empty_line() {
        let tokenizer = Tokenizer::word_parser();

        let line = "";
        let tokens = tokenizer.tokenize(line);
        assert_eq!(tokens, Vec::<String>::new());
    }

    #[test]
    fn test_tokenize_only_delimiters() {
        let tokenizer = Tokenizer::word_parser();

        let line = "... --- !!! ,,,";
        let tokens = tokenizer.tokenize(line);
        assert_eq!(tokens, Vec::<String>::new());
    }

    #[test]
    fn test_tokenize_without_case_folding() {
        let tokenizer = Tokenizer { fold_case: false };

        let line = "Word word";
        let tokens = tokenizer.tokenize(line);
        assert_eq!(tokens, vec!["Word", "word"]);
    }
}
