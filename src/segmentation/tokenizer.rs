//! Word-level tokenization.
use unicode_segmentation::UnicodeSegmentation;

/// Turns a sentence into ordered raw tokens.
pub trait Tokenize {
    fn tokenize(&self, sentence: &str) -> Vec<String>;
}

/// Tokenizes on Unicode word boundaries (UAX#29).
///
/// Every non-whitespace segment is a token, punctuation included.
/// Tokens are not case-folded.
#[derive(Debug, Clone, Copy, Default)]
pub struct WordTokenizer;

impl Tokenize for WordTokenizer {
    fn tokenize(&self, sentence: &str) -> Vec<String> {
        sentence
            .split_word_bounds()
            .filter(|segment| !segment.trim().is_empty())
            .map(String::from)
            .collect()
    }
}
