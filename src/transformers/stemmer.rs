//! Stemming.
use rust_stemmers::{Algorithm, Stemmer};

use crate::error::Error;

pub trait Stem {
    fn stem(&self, token: &str) -> Result<String, Error>;
}

/// Snowball stemmer.
///
/// Tokens are lowercased before stemming, so the stem is always lowercase.
pub struct Snowball {
    inner: Stemmer,
}

impl Snowball {
    pub fn new(algorithm: Algorithm) -> Self {
        Self {
            inner: Stemmer::create(algorithm),
        }
    }

    /// Create a stemmer from a language name (`english`, `french`...).
    ///
    /// Returns [Error::ResourceUnavailable] if there's no stemmer for that language.
    pub fn from_language(language: &str) -> Result<Self, Error> {
        let algorithm = match language.to_lowercase().as_str() {
            "arabic" => Algorithm::Arabic,
            "danish" => Algorithm::Danish,
            "dutch" => Algorithm::Dutch,
            "english" => Algorithm::English,
            "finnish" => Algorithm::Finnish,
            "french" => Algorithm::French,
            "german" => Algorithm::German,
            "greek" => Algorithm::Greek,
            "hungarian" => Algorithm::Hungarian,
            "italian" => Algorithm::Italian,
            "norwegian" => Algorithm::Norwegian,
            "portuguese" => Algorithm::Portuguese,
            "romanian" => Algorithm::Romanian,
            "russian" => Algorithm::Russian,
            "spanish" => Algorithm::Spanish,
            "swedish" => Algorithm::Swedish,
            "tamil" => Algorithm::Tamil,
            "turkish" => Algorithm::Turkish,
            other => {
                return Err(Error::ResourceUnavailable(format!(
                    "no stemmer for language {other:?}"
                )))
            }
        };
        Ok(Self::new(algorithm))
    }
}

impl Default for Snowball {
    /// English stemmer
    fn default() -> Self {
        Self::new(Algorithm::English)
    }
}

impl Stem for Snowball {
    fn stem(&self, token: &str) -> Result<String, Error> {
        Ok(self.inner.stem(&token.to_lowercase()).into_owned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn english() {
        let s = Snowball::default();
        assert_eq!(s.stem("running").unwrap(), "run");
        assert_eq!(s.stem("Cats").unwrap(), "cat");
        assert_eq!(s.stem("generously").unwrap(), "generous");
    }

    #[test]
    fn punctuation_is_kept() {
        let s = Snowball::default();
        assert_eq!(s.stem(",").unwrap(), ",");
    }

    #[test]
    fn from_language() {
        assert!(Snowball::from_language("English").is_ok());
        assert!(matches!(
            Snowball::from_language("klingon"),
            Err(Error::ResourceUnavailable(_))
        ));
    }
}
