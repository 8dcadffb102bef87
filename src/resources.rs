/*! Linguistic resources

Resources are resolved once, before any record is read, so that a missing
resource fails the run before anything is written.
!*/
use std::path::Path;

use log::info;

use crate::error::Error;
use crate::transformers::{Morphy, Snowball};

pub struct Resources {
    pub lemmatizer: Morphy,
    pub stemmer: Snowball,
}

impl Resources {
    /// Load the lemma table and the stemmer for `language`.
    ///
    /// The bundled English noun table is used when `lemmas` is `None`.
    pub fn provision(lemmas: Option<&Path>, language: &str) -> Result<Self, Error> {
        let lemmatizer = match lemmas {
            Some(path) => Morphy::from_path(path)?,
            None => Morphy::bundled()?,
        };
        let stemmer = Snowball::from_language(language)?;

        info!(
            "resources ready: {} known lemmas, {} stemmer",
            lemmatizer.len(),
            language
        );
        Ok(Self {
            lemmatizer,
            stemmer,
        })
    }
}
