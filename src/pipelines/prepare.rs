//! Dataset preparation pipeline
//!
//! Turns a `label,title,text` corpus into token files ready for training.
//!
//! # Processing
//! 1. Linguistic resources (lemma table, stemmer) are loaded.
//! 1. The whole corpus is read, each row becoming a record of tokenized sentences (title first).
//! 1. Every token gets its lemma and stem.
//! 1. The vocabulary (distinct raw token texts) is written.
//! 1. Each record is written in `dst/<label>/<index>.tsv`.
//!
//! Any error stops the pipeline. Files that have already been written are left as is.
use std::path::PathBuf;

use log::{debug, info};

use crate::error::Error;
use crate::io::{reader::CorpusReader, LabelFiles};
use crate::pipelines::pipeline::Pipeline;
use crate::processing::Vocabulary;
use crate::resources::Resources;
use crate::segmentation::{RegexSplitter, WordTokenizer};
use crate::transformers::Normalizer;

/// Default location of the vocabulary file.
pub const DICTIONARY_PATH: &str = "assets/dictionary.csv";

#[derive(Debug, Clone)]
pub struct PrepareConfig {
    /// csv corpus
    pub src: PathBuf,
    /// root of per-label folders
    pub dst: PathBuf,
    /// vocabulary file
    pub dictionary: PathBuf,
    /// `form\tlemma` table, the bundled one when `None`
    pub lemmas: Option<PathBuf>,
    /// stemmer language
    pub language: String,
}

impl PrepareConfig {
    pub fn new(src: PathBuf, dst: PathBuf) -> Self {
        Self {
            src,
            dst,
            dictionary: PathBuf::from(DICTIONARY_PATH),
            lemmas: None,
            language: "english".to_string(),
        }
    }
}

pub struct Prepare {
    config: PrepareConfig,
}

impl Prepare {
    pub fn new(config: PrepareConfig) -> Self {
        debug!("using config {:?}", config);
        Self { config }
    }
}

impl Pipeline<()> for Prepare {
    fn version() -> &'static str {
        env!("CARGO_PKG_VERSION")
    }

    fn run(&self) -> Result<(), Error> {
        let config = &self.config;
        let resources = Resources::provision(config.lemmas.as_deref(), &config.language)?;

        let reader = CorpusReader::new(Box::<RegexSplitter>::default(), Box::new(WordTokenizer));
        let mut records = reader.read(&config.src)?;
        info!("read {} records from {:?}", records.len(), config.src);

        let normalizer = Normalizer::new(
            Box::new(resources.lemmatizer),
            Box::new(resources.stemmer),
        );
        normalizer.normalize(&mut records)?;

        Vocabulary::build(&records).persist(&config.dictionary)?;

        let mut labelfiles = LabelFiles::new(&config.dst);
        labelfiles.write(&records)?;

        info!("done");
        Ok(())
    }
}
