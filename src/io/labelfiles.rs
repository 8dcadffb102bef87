/*! Label-separated token file writer.

Each record is written into `dst/<label>/<index>.tsv`, where `index` is the number of
records of that label already written by this [LabelFiles].

Record files hold one `text\tlemma\tstem` row per token, each sentence being followed
by an empty line.
!*/
use std::{
    collections::HashMap,
    fs::File,
    io::{BufWriter, Write},
    path::{Component, Path, PathBuf},
};

use log::{debug, info};

use crate::error::Error;
use crate::types::{Record, Sentence};

pub struct LabelFiles {
    dst: PathBuf,
    counters: HashMap<String, usize>,
}

impl LabelFiles {
    /// Create a new writer rooted at `dst`.
    /// Nothing is created on disk until records are written.
    pub fn new(dst: &Path) -> Self {
        Self {
            dst: dst.to_path_buf(),
            counters: HashMap::new(),
        }
    }

    /// Index that the next record of `label` will get.
    pub fn next_index(&self, label: &str) -> usize {
        self.counters.get(label).copied().unwrap_or_default()
    }

    /// Write records in order.
    ///
    /// Indices keep increasing across calls on the same [LabelFiles].
    pub fn write(&mut self, records: &[Record]) -> Result<(), Error> {
        info!("writing {} records into {:?}", records.len(), self.dst);
        for record in records {
            self.write_single(record)?;
        }
        Ok(())
    }

    /// Write a single record, creating the label folder if needed.
    pub fn write_single(&mut self, record: &Record) -> Result<PathBuf, Error> {
        let label = record.label();
        let folder = self.label_folder(label)?;
        std::fs::create_dir_all(&folder)?;

        let index = self.next_index(label);
        let path = folder.join(format!("{index}.tsv"));
        debug!("writing record {index} of label {label} to {:?}", path);

        let mut out = BufWriter::new(File::create(&path)?);
        for sentence in record.sentences() {
            Self::write_sentence(&mut out, sentence)?;
        }
        out.flush()?;

        // only count records that have been fully written
        self.counters.insert(label.to_string(), index + 1);
        Ok(path)
    }

    /// Write token rows followed by the sentence separator (empty line).
    fn write_sentence<W: Write>(out: &mut W, sentence: &Sentence) -> Result<(), Error> {
        {
            let mut rows = csv::WriterBuilder::new()
                .delimiter(b'\t')
                .has_headers(false)
                .from_writer(&mut *out);
            for token in sentence.tokens() {
                rows.serialize(token.row())?;
            }
            rows.flush()?;
        }
        out.write_all(b"\n")?;
        Ok(())
    }

    /// Get the folder of `label`.
    ///
    /// Labels have to be a single, normal path component so that records can't be
    /// written outside of `dst`.
    fn label_folder(&self, label: &str) -> Result<PathBuf, Error> {
        let mut components = Path::new(label).components();
        match (components.next(), components.next()) {
            (Some(Component::Normal(c)), None) if c == label => Ok(self.dst.join(label)),
            _ => Err(Error::InvalidLabel(label.to_string())),
        }
    }
}
