//! # corpus-tokenizer
//!
//! Prepares a labeled text classification corpus for machine learning.
//!
//! Each `label,title,text` row of the source corpus is split into sentences and tokens,
//! each token is lemmatized and stemmed, then:
//! - the vocabulary (distinct raw tokens) is written to `assets/dictionary.csv`,
//! - each row is written to `<dst>/<label>/<index>.tsv`, one `token\tlemma\tstem` row per token
//!   and an empty line after each sentence.
//!
//! ## Getting started
//!
//! ```sh
//! corpus-tokenizer corpus.csv dataset/
//! ```
//!
//! Logging is controlled by `RUST_LOG` (`RUST_LOG=info corpus-tokenizer ...`).
use corpus_tokenizer::error::Error;
use corpus_tokenizer::pipelines::{Pipeline, Prepare, PrepareConfig};
use log::{debug, error, info};
use structopt::StructOpt;

mod cli;

fn main() -> Result<(), Error> {
    env_logger::init();

    let opt = cli::Prepare::from_args();
    debug!("cli args\n{:#?}", opt);

    info!("corpus-tokenizer {}", Prepare::version());
    let p = Prepare::new(PrepareConfig::from(opt));
    if let Err(e) = p.run() {
        error!("{e}");
        return Err(e);
    }
    Ok(())
}
