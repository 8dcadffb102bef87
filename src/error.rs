//! Error enum
use std::fmt;

#[derive(Debug)]
pub enum Error {
    Io(std::io::Error),
    Csv(csv::Error),
    /// A corpus row that does not hold exactly `label,title,text`.
    /// `line` is 1-based, as reported by the csv reader.
    MalformedRow {
        line: u64,
        nb_fields: usize,
    },
    /// A label that can't be used as a directory name.
    InvalidLabel(String),
    /// A linguistic resource (lemma table, stemmer language) that couldn't be obtained.
    ResourceUnavailable(String),
    Custom(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(e) => write!(f, "io error: {e}"),
            Error::Csv(e) => write!(f, "csv error: {e}"),
            Error::MalformedRow { line, nb_fields } => write!(
                f,
                "malformed row at line {line}: expected 3 fields (label, title, text), got {nb_fields}"
            ),
            Error::InvalidLabel(label) => write!(f, "invalid label: {label:?}"),
            Error::ResourceUnavailable(r) => write!(f, "resource unavailable: {r}"),
            Error::Custom(s) => write!(f, "{s}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Io(e) => Some(e),
            Error::Csv(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Error {
        Error::Io(e)
    }
}

impl From<csv::Error> for Error {
    fn from(e: csv::Error) -> Error {
        Error::Csv(e)
    }
}

impl From<String> for Error {
    fn from(s: String) -> Error {
        Error::Custom(s)
    }
}
