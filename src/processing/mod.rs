/*! Corpus-wide processing

Operations that need to see the whole (annotated) corpus at once.
!*/
mod vocabulary;

pub use vocabulary::Vocabulary;
