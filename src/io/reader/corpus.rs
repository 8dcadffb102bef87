/*! Corpus reader

Reads a headerless `label,title,text` csv file and builds a [Record] for each row,
splitting title and text into sentences and tokenizing them.
!*/
use std::io::Read;
use std::path::Path;

use csv::StringRecord;
use log::{debug, info};

use crate::error::Error;
use crate::segmentation::{RegexSplitter, SplitSentences, Tokenize, WordTokenizer};
use crate::types::{Record, Sentence, Token};

use super::Row;

pub struct CorpusReader {
    splitter: Box<dyn SplitSentences>,
    tokenizer: Box<dyn Tokenize>,
}

impl CorpusReader {
    pub fn new(splitter: Box<dyn SplitSentences>, tokenizer: Box<dyn Tokenize>) -> Self {
        Self {
            splitter,
            tokenizer,
        }
    }

    /// Read every record of the corpus located at `path`.
    ///
    /// Fails on the first malformed row: no partial corpus is returned.
    pub fn read(&self, path: &Path) -> Result<Vec<Record>, Error> {
        info!("reading corpus {:?}", path);
        let file = std::fs::File::open(path)?;
        self.read_from(file)
    }

    /// Read every record from a csv reader.
    ///
    /// Blank lines are rows without fields, and are reported as malformed.
    pub fn read_from<R: Read>(&self, mut reader: R) -> Result<Vec<Record>, Error> {
        let mut data = Vec::new();
        reader.read_to_end(&mut data)?;

        // flexible so that rows of the wrong size are reported as malformed rows
        // rather than generic csv errors.
        let mut rdr = csv::ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .from_reader(data.as_slice());

        let mut records = Vec::new();
        let mut record = StringRecord::new();
        loop {
            // the csv reader silently skips blank lines, so look for them between records.
            let offset = usize::try_from(rdr.position().byte()).unwrap_or(data.len());
            if let Some(line) = blank_line_at(&data, offset) {
                return Err(Error::MalformedRow { line, nb_fields: 0 });
            }
            if !rdr.read_record(&mut record)? {
                break;
            }
            let row = Row::try_from(&record)?;
            records.push(self.to_record(row));
        }

        debug!("read {} records", records.len());
        Ok(records)
    }

    /// Build a record, title sentences first.
    fn to_record(&self, row: Row) -> Record {
        let title_sentences = self.sentences(&row.title);
        let text_sentences = self.sentences(&row.text);
        Record::from_parts(row.label, title_sentences, text_sentences)
    }

    fn sentences(&self, text: &str) -> Vec<Sentence> {
        self.splitter
            .split(text)
            .into_iter()
            .map(|sentence| {
                Sentence::new(
                    self.tokenizer
                        .tokenize(sentence)
                        .into_iter()
                        .map(Token::new)
                        .collect(),
                )
            })
            .collect()
    }
}

/// Line number of the blank line starting at `offset`, if any.
///
/// `offset` is a record boundary. The csv reader stops right after the `\r` of a `\r\n`
/// terminator, so the trailing `\n` is not a line on its own.
fn blank_line_at(data: &[u8], offset: usize) -> Option<u64> {
    let mut start = offset.min(data.len());
    if start > 0 && data[start - 1] == b'\r' && data.get(start) == Some(&b'\n') {
        start += 1;
    }
    match data.get(start) {
        Some(b'\n') | Some(b'\r') => {
            let line = data[..start].iter().filter(|b| **b == b'\n').count() + 1;
            Some(line as u64)
        }
        _ => None,
    }
}

impl Default for CorpusReader {
    /// Uses [RegexSplitter] and [WordTokenizer].
    fn default() -> Self {
        Self::new(Box::<RegexSplitter>::default(), Box::new(WordTokenizer))
    }
}
