/*! Corpus data model.

A [Record] holds a label and [Sentence]s, that hold [Token]s.
Records are created by [crate::io::reader::CorpusReader], annotated in place
by [crate::transformers::Normalizer] and then only read.
!*/
mod record;
mod sentence;
mod token;

pub use record::Record;
pub use sentence::Sentence;
pub use token::{Token, TokenRow};
