//! Tokenization and n-gram expansion.
//!
//! Text is lowercased and split into words (ASCII word characters and
//! apostrophes) or clusters of two or more non-whitespace characters, so
//! emoticons such as `:)` or `!!!` survive as tokens of their own. Non-ASCII
//! letters are not word characters: they only survive inside a cluster.

use regex::Regex;
use std::sync::LazyLock;

// NOTE: expect() is acceptable here, the pattern is a compile-time constant.
static TOKEN_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[A-Za-z0-9_']+|\S{2,}").expect("Invalid regex: token pattern"));

/// Split text into lowercase base tokens, in input order.
pub fn extract_words(text: &str) -> Vec<String> {
    let lower = text.to_lowercase();
    TOKEN_PATTERN
        .find_iter(&lower)
        .map(|m| m.as_str().to_string())
        .collect()
}

/// Expand base tokens into every contiguous phrase of 1..=`order` tokens.
///
/// All unigrams come first in positional order, then all bigrams, and so on.
/// Scoring depends on this size-major ordering.
pub fn expand_ngrams(words: &[String], order: usize) -> Vec<String> {
    (1..=order)
        .flat_map(|size| words.windows(size).map(|window| window.join(" ")))
        .collect()
}

/// Tokenize `text` and expand it up to `order`-grams.
pub fn tokenize(text: &str, order: usize) -> Vec<String> {
    expand_ngrams(&extract_words(text), order)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lowercases_and_splits() {
        assert_eq!(extract_words("Hello World"), vec!["hello", "world"]);
    }

    #[test]
    fn test_keeps_apostrophes() {
        assert_eq!(extract_words("I don't know"), vec!["i", "don't", "know"]);
    }

    #[test]
    fn test_punctuation_clusters() {
        assert_eq!(
            extract_words("great :) wow!!! ok."),
            vec!["great", ":)", "wow", "!!!", "ok"]
        );
    }

    #[test]
    fn test_single_punctuation_dropped() {
        assert_eq!(extract_words("yes ! no"), vec!["yes", "no"]);
    }

    #[test]
    fn test_non_ascii_letters_split_words() {
        assert_eq!(extract_words("Café naïve"), vec!["caf", "na", "ïve"]);
        assert_eq!(extract_words("über"), vec!["über"]);
        assert_eq!(extract_words("é b"), vec!["b"]);
    }

    #[test]
    fn test_ngram_order_is_size_major() {
        let phrases = tokenize("a b c", 2);
        assert_eq!(phrases, vec!["a", "b", "c", "a b", "b c"]);
    }

    #[test]
    fn test_order_larger_than_token_count() {
        let phrases = tokenize("only two", 4);
        assert_eq!(phrases, vec!["only", "two", "only two"]);
    }

    #[test]
    fn test_empty_text() {
        assert!(tokenize("", 3).is_empty());
        assert!(tokenize("   ", 1).is_empty());
    }

    #[test]
    fn test_no_deduplication() {
        assert_eq!(tokenize("good good", 1), vec!["good", "good"]);
    }
}
