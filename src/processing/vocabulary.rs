/*! Vocabulary extraction

The vocabulary is the set of distinct raw token texts of a corpus.
Lemmas and stems are not part of it.
!*/
use std::collections::HashSet;
use std::path::Path;

use itertools::Itertools;
use log::{debug, info};

use crate::error::Error;
use crate::types::Record;

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Vocabulary {
    tokens: HashSet<String>,
}

impl Vocabulary {
    /// Collect distinct token texts from every sentence of every record.
    pub fn build(records: &[Record]) -> Self {
        let mut vocabulary = Self::default();
        for record in records {
            vocabulary.add_record(record);
        }
        debug!("vocabulary size: {}", vocabulary.len());
        vocabulary
    }

    pub fn add_record(&mut self, record: &Record) {
        for token in record.tokens() {
            if !self.tokens.contains(token.text()) {
                self.tokens.insert(token.text().to_string());
            }
        }
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    pub fn contains(&self, token: &str) -> bool {
        self.tokens.contains(token)
    }

    /// Iterate over tokens, in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.tokens.iter().map(String::as_str)
    }

    /// Write the vocabulary as a single-column csv file (no header), overwriting `dst`.
    ///
    /// Tokens are sorted so that the same vocabulary always yields the same file.
    /// Parent folders are created if needed.
    pub fn persist(&self, dst: &Path) -> Result<(), Error> {
        info!("writing {} tokens to {:?}", self.len(), dst);
        if let Some(parent) = dst.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }

        let mut out = csv::WriterBuilder::new()
            .has_headers(false)
            .from_path(dst)?;
        for token in self.iter().sorted() {
            out.write_record([token])?;
        }
        out.flush()?;
        Ok(())
    }
}
