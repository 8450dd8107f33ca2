/// Splits text into the tokens a [`Scorer`](crate::Scorer) looks up.
pub trait Tokenizer {
    fn tokenize(&self, text: &str) -> Vec<String>;
}

/// Default tokenizer: lowercases, removes every char that is not a word
/// char (alphanumeric or `_`) or whitespace, then splits on whitespace.
///
/// Punctuation is deleted rather than replaced, so `"don't"` becomes
/// `"dont"` and `"well-known"` becomes `"wellknown"`.
///
/// # Example
/// ```
/// use lexicon_sentiment::{Tokenizer, WordTokenizer};
/// let words = WordTokenizer.tokenize("(_test] {Test2!=");
/// assert_eq!(words, vec!["_test".to_string(), "test2".to_string()]);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct WordTokenizer;

impl Tokenizer for WordTokenizer {
    fn tokenize(&self, text: &str) -> Vec<String> {
        text.to_lowercase()
            .chars()
            .filter(|c| c.is_alphanumeric() || *c == '_' || c.is_whitespace())
            .collect::<String>()
            .split_whitespace()
            .map(String::from)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lowercases_and_strips_punctuation() {
        let words = WordTokenizer.tokenize("This is GOOD! Really, good?");
        assert_eq!(words, vec!["this", "is", "good", "really", "good"]);
    }

    #[test]
    fn empty_and_blank_input() {
        assert!(WordTokenizer.tokenize("").is_empty());
        assert!(WordTokenizer.tokenize("  \t\n ").is_empty());
        assert!(WordTokenizer.tokenize("?!... --").is_empty());
    }

    #[test]
    fn keeps_unicode_letters() {
        let words = WordTokenizer.tokenize("Überraschung, café!");
        assert_eq!(words, vec!["überraschung", "café"]);
    }

    #[test]
    fn apostrophes_are_removed_inside_words() {
        assert_eq!(WordTokenizer.tokenize("Don't"), vec!["dont"]);
    }
}
