//! Lemma/stem annotation of records.
use log::debug;

use crate::error::Error;
use crate::types::Record;

use super::{Annotate, Lemmatize, Stem};

/// Annotates each token of a record with its lemma and stem.
///
/// Lemma and stem are both computed from the raw token text.
/// A record is only annotated once every one of its tokens has been processed,
/// so that a failure leaves it untouched.
pub struct Normalizer {
    lemmatizer: Box<dyn Lemmatize>,
    stemmer: Box<dyn Stem>,
}

impl Normalizer {
    pub fn new(lemmatizer: Box<dyn Lemmatize>, stemmer: Box<dyn Stem>) -> Self {
        Self {
            lemmatizer,
            stemmer,
        }
    }

    /// Annotate every record, stopping at the first error.
    pub fn normalize(&self, records: &mut [Record]) -> Result<(), Error> {
        for record in records.iter_mut() {
            self.annotate(record)?;
        }
        debug!("normalized {} records", records.len());
        Ok(())
    }
}

impl Annotate<Record> for Normalizer {
    fn annotate(&self, record: &mut Record) -> Result<(), Error> {
        let annotations = record
            .tokens()
            .map(|token| {
                let lemma = self.lemmatizer.lemmatize(token.text())?;
                let stem = self.stemmer.stem(token.text())?;
                Ok::<_, Error>((lemma, stem))
            })
            .collect::<Result<Vec<_>, Error>>()?;

        for (token, (lemma, stem)) in record.tokens_mut().zip(annotations) {
            token.annotate(lemma, stem);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transformers::{Morphy, Snowball};
    use crate::types::{Sentence, Token};

    struct Upper;
    impl Lemmatize for Upper {
        fn lemmatize(&self, token: &str) -> Result<String, Error> {
            Ok(token.to_uppercase())
        }
    }

    struct Prefix;
    impl Stem for Prefix {
        fn stem(&self, token: &str) -> Result<String, Error> {
            Ok(token.chars().take(2).collect())
        }
    }

    /// Fails on a single word.
    struct FailingOn(&'static str);
    impl Stem for FailingOn {
        fn stem(&self, token: &str) -> Result<String, Error> {
            if token == self.0 {
                Err(Error::Custom(format!("can't stem {token}")))
            } else {
                Ok(token.to_string())
            }
        }
    }

    fn records() -> Vec<Record> {
        vec![
            Record::new(
                "a".to_string(),
                vec![
                    ["cats", "run"].into_iter().collect(),
                    Sentence::default(),
                ],
            ),
            Record::new("b".to_string(), vec![["cats"].into_iter().collect()]),
        ]
    }

    #[test]
    fn annotates_every_token() {
        let n = Normalizer::new(Box::new(Upper), Box::new(Prefix));
        let mut records = records();
        n.normalize(&mut records).unwrap();

        let tokens: Vec<&Token> = records.iter().flat_map(Record::tokens).collect();
        assert_eq!(tokens.len(), 3);
        for token in tokens {
            assert_eq!(token.lemma(), Some(token.text().to_uppercase().as_str()));
            assert_eq!(
                token.stem(),
                Some(token.text().chars().take(2).collect::<String>().as_str())
            );
        }
    }

    #[test]
    fn same_text_same_annotation() {
        let n = Normalizer::new(Box::new(Morphy::default()), Box::new(Snowball::default()));
        let mut records = records();
        n.normalize(&mut records).unwrap();

        let first = &records[0].sentences()[0].tokens()[0];
        let other = &records[1].sentences()[0].tokens()[0];
        assert_eq!(first, other);

        // running twice gives the same result
        let snapshot = records.clone();
        n.normalize(&mut records).unwrap();
        assert_eq!(snapshot, records);
    }

    #[test]
    fn failure_is_propagated() {
        let n = Normalizer::new(Box::new(Upper), Box::new(FailingOn("run")));
        let mut records = records();
        assert!(n.normalize(&mut records).is_err());

        // "cats" comes before the failing token but stays unannotated
        assert!(records
            .iter()
            .flat_map(Record::tokens)
            .all(|t| t.lemma().is_none() && t.stem().is_none()));
    }

    #[test]
    fn failing_record_is_left_untouched() {
        let n = Normalizer::new(Box::new(Upper), Box::new(FailingOn("b")));
        let mut record = Record::new(
            "l".to_string(),
            vec![["a"].into_iter().collect(), ["b"].into_iter().collect()],
        );
        assert!(n.annotate(&mut record).is_err());
        assert!(record.tokens().all(|t| !t.is_annotated()));

        let mut ok = Record::new("l".to_string(), vec![["a", "c"].into_iter().collect()]);
        n.annotate(&mut ok).unwrap();
        assert!(ok.tokens().all(Token::is_annotated));
    }
}
