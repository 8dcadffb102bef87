/*! Corpus reading utilities

Rows are first parsed into [Row]s, then segmented into [crate::types::Record]s by [CorpusReader].
!*/
mod corpus;
mod row;

pub use corpus::CorpusReader;
pub use row::Row;
