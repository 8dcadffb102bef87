/*!
# IO utilities

Corpus loading and token file saving.

- [reader::CorpusReader] reads a `label,title,text` csv file into [crate::types::Record]s.
- [LabelFiles] writes each record into its own file, in a folder per label.
!*/
mod labelfiles;
pub mod reader;

pub use labelfiles::LabelFiles;
