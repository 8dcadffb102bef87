/*! Sentence splitting and tokenization.

Both steps are behind traits ([SplitSentences], [Tokenize]) so that
[crate::io::reader::CorpusReader] can be fed other implementations.

Defaults are [RegexSplitter] and [WordTokenizer].
!*/
mod splitter;
mod tokenizer;

pub use splitter::{RegexSplitter, SplitSentences};
pub use tokenizer::{Tokenize, WordTokenizer};
