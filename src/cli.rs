//! Command line arguments and parameters management/parsing.
use std::path::PathBuf;

use structopt::StructOpt;

use corpus_tokenizer::pipelines::PrepareConfig;

#[derive(Debug, StructOpt)]
/// Prepare a labeled corpus for classification.
///
/// ```sh
/// corpus-tokenizer 0.1.0
/// Tokenize, lemmatize and stem a labeled corpus.
///
/// USAGE:
///     corpus-tokenizer <src> <dst>
///
/// FLAGS:
///     -h, --help       Prints help information
///     -V, --version    Prints version information
///
/// ARGS:
///     <src>    source corpus (label,title,text csv)
///     <dst>    destination of per-label token files
/// ```
#[structopt(
    name = "corpus-tokenizer",
    about = "Tokenize, lemmatize and stem a labeled corpus."
)]
pub struct Prepare {
    #[structopt(parse(from_os_str), help = "source corpus (label,title,text csv)")]
    pub src: PathBuf,
    #[structopt(parse(from_os_str), help = "destination of per-label token files")]
    pub dst: PathBuf,
}

impl From<Prepare> for PrepareConfig {
    fn from(p: Prepare) -> PrepareConfig {
        PrepareConfig::new(p.src, p.dst)
    }
}
