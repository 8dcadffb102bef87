/*! Dictionary-based lemmatization.

[Morphy] follows the WordNet morphological processing for nouns:

1. If the word is a known exception (`geese` → `goose`), the exception lemma is used.
1. Otherwise, the word and the candidates obtained by detaching known suffixes
   (`ies` → `y`, `ches` → `ch`...) are looked up in the set of known lemmas,
   and the shortest known one is kept.
1. If there's none, the word is its own lemma.

Lemma tables are tab-separated `form\tlemma` files, without header.
An English noun table is bundled in the binary and used when no other table is given.
!*/
use std::collections::{HashMap, HashSet};
use std::io::Read;
use std::path::Path;

use log::{debug, info};

use crate::error::Error;

static BUNDLED_TABLE: &str = include_str!("../../resources/lemmas.tsv");

/// Noun suffix detachment rules, tried in order.
static NOUN_RULES: [(&str, &str); 9] = [
    ("s", ""),
    ("ses", "s"),
    ("ves", "f"),
    ("xes", "x"),
    ("zes", "z"),
    ("ches", "ch"),
    ("shes", "sh"),
    ("men", "man"),
    ("ies", "y"),
];

pub trait Lemmatize {
    fn lemmatize(&self, token: &str) -> Result<String, Error>;
}

#[derive(Debug, Default, Clone)]
pub struct Morphy {
    exceptions: HashMap<String, String>,
    lemmas: HashSet<String>,
}

impl Morphy {
    /// Load a lemma table from `path`.
    ///
    /// Any failure (missing file, malformed row) is reported as [Error::ResourceUnavailable].
    pub fn from_path(path: &Path) -> Result<Self, Error> {
        info!("loading lemma table from {:?}", path);
        let file = std::fs::File::open(path).map_err(|e| {
            Error::ResourceUnavailable(format!("could not open lemma table {path:?}: {e}"))
        })?;
        Self::from_reader(file)
    }

    /// Load the bundled English noun table.
    pub fn bundled() -> Result<Self, Error> {
        debug!("loading bundled lemma table");
        Self::from_reader(BUNDLED_TABLE.as_bytes())
    }

    /// Load a lemma table from a reader.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self, Error> {
        let mut rdr = csv::ReaderBuilder::new()
            .delimiter(b'\t')
            .has_headers(false)
            .quoting(false)
            .from_reader(reader);

        let mut morphy = Self::default();
        for entry in rdr.deserialize() {
            let (form, lemma): (String, String) = entry
                .map_err(|e| Error::ResourceUnavailable(format!("malformed lemma table: {e}")))?;
            morphy.insert(form, lemma);
        }

        debug!(
            "lemma table: {} lemmas, {} exceptions",
            morphy.lemmas.len(),
            morphy.exceptions.len()
        );
        Ok(morphy)
    }

    /// Register `lemma` as a known lemma, and `form` as an exception if it differs.
    pub fn insert(&mut self, form: String, lemma: String) {
        if form != lemma {
            self.exceptions.insert(form, lemma.clone());
        }
        self.lemmas.insert(lemma);
    }

    /// Number of known lemmas.
    pub fn len(&self) -> usize {
        self.lemmas.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lemmas.is_empty()
    }

    fn candidates<'a>(&'a self, word: &'a str) -> impl Iterator<Item = String> + 'a {
        let detached = NOUN_RULES.iter().filter_map(move |(suffix, replacement)| {
            word.strip_suffix(suffix)
                .map(|stripped| format!("{stripped}{replacement}"))
        });

        std::iter::once(word.to_string())
            .chain(detached)
            .filter(|candidate| self.lemmas.contains(candidate))
    }
}

impl Lemmatize for Morphy {
    fn lemmatize(&self, token: &str) -> Result<String, Error> {
        if let Some(lemma) = self.exceptions.get(token) {
            return Ok(lemma.clone());
        }

        // min_by_key keeps the first candidate on ties, so the word itself wins over
        // a detached form of the same length.
        let lemma = self
            .candidates(token)
            .min_by_key(|candidate| candidate.chars().count())
            .unwrap_or_else(|| token.to_string());
        Ok(lemma)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn morphy() -> Morphy {
        let table = "cat\tcat
dog\tdog
box\tbox
church\tchurch
fly\tfly
man\tman
bus\tbus
geese\tgoose
";
        Morphy::from_reader(table.as_bytes()).unwrap()
    }

    #[test]
    fn rules() {
        let m = morphy();
        assert_eq!(m.lemmatize("cats").unwrap(), "cat");
        assert_eq!(m.lemmatize("boxes").unwrap(), "box");
        assert_eq!(m.lemmatize("churches").unwrap(), "church");
        assert_eq!(m.lemmatize("flies").unwrap(), "fly");
        assert_eq!(m.lemmatize("men").unwrap(), "man");
    }

    #[test]
    fn known_lemma_is_kept() {
        let m = morphy();
        assert_eq!(m.lemmatize("bus").unwrap(), "bus");
    }

    #[test]
    fn exception() {
        let m = morphy();
        assert_eq!(m.lemmatize("geese").unwrap(), "goose");
        assert_eq!(m.lemmatize("goose").unwrap(), "goose");
    }

    #[test]
    fn unknown_is_identity() {
        let m = morphy();
        assert_eq!(m.lemmatize("running").unwrap(), "running");
        assert_eq!(m.lemmatize("Cats").unwrap(), "Cats");

        let empty = Morphy::default();
        assert!(empty.is_empty());
        assert_eq!(empty.lemmatize("cats").unwrap(), "cats");
    }

    #[test]
    fn bundled_table() {
        let m = Morphy::bundled().unwrap();
        assert!(!m.is_empty());
        assert_eq!(m.lemmatize("cats").unwrap(), "cat");
        assert_eq!(m.lemmatize("geese").unwrap(), "goose");
        assert_eq!(m.lemmatize("children").unwrap(), "child");
        assert_eq!(m.lemmatize("churches").unwrap(), "church");
        assert_eq!(m.lemmatize("running").unwrap(), "running");
    }

    #[test]
    fn malformed_table() {
        let table = "cat\tcat\ndog\n";
        assert!(matches!(
            Morphy::from_reader(table.as_bytes()),
            Err(Error::ResourceUnavailable(_))
        ));
    }

    #[test]
    fn missing_table() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nope.tsv");
        assert!(matches!(
            Morphy::from_path(&path),
            Err(Error::ResourceUnavailable(_))
        ));
    }
}
