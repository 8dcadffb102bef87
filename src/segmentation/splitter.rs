//! Rule-based sentence splitting.
use lazy_static::lazy_static;
use regex::Regex;

use crate::error::Error;

lazy_static! {
    /// Terminator run, optionally followed by closing quotes/brackets, then whitespace.
    static ref SENTENCE_BOUNDARY: Regex =
        Regex::new(r#"[.!?…]+["'”’)\]]*\s+"#).expect("invalid default sentence pattern");
}

/// Splits raw text into sentences.
pub trait SplitSentences {
    /// Split `text` into ordered sentences.
    /// Empty strings are valid sentences and must be kept.
    fn split<'a>(&self, text: &'a str) -> Vec<&'a str>;
}

/// Splits after each match of a boundary pattern.
///
/// The terminator is kept in the preceding sentence while trailing whitespace is dropped.
/// Like [str::split], an empty input yields a single empty sentence, and a boundary at
/// the very end of the text yields a trailing empty sentence.
#[derive(Debug, Clone)]
pub struct RegexSplitter {
    boundary: Regex,
}

impl RegexSplitter {
    /// Use a custom boundary pattern.
    ///
    /// Whitespace at the end of a match is considered as separator and isn't kept,
    /// the rest of the match stays with the preceding sentence.
    pub fn new(pattern: &str) -> Result<Self, Error> {
        let boundary = Regex::new(pattern)
            .map_err(|e| Error::Custom(format!("invalid sentence pattern {pattern:?}: {e}")))?;
        Ok(Self { boundary })
    }
}

impl Default for RegexSplitter {
    fn default() -> Self {
        Self {
            boundary: SENTENCE_BOUNDARY.clone(),
        }
    }
}

impl SplitSentences for RegexSplitter {
    fn split<'a>(&self, text: &'a str) -> Vec<&'a str> {
        let mut sentences = Vec::new();
        let mut start = 0;
        for boundary in self.boundary.find_iter(text) {
            let kept = boundary.as_str().trim_end().len();
            sentences.push(&text[start..boundary.start() + kept]);
            start = boundary.end();
        }
        sentences.push(&text[start..]);
        sentences
    }
}
