//! Raw corpus row.
use csv::StringRecord;

use crate::error::Error;

/// A well-formed corpus row. The label is non-empty, title and text may be empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Row {
    pub label: String,
    pub title: String,
    pub text: String,
}

impl TryFrom<&StringRecord> for Row {
    type Error = Error;

    /// Checks that the record has exactly three fields and a non-empty label.
    fn try_from(record: &StringRecord) -> Result<Self, Self::Error> {
        let line = record.position().map(|p| p.line()).unwrap_or_default();
        match (record.get(0), record.get(1), record.get(2), record.len()) {
            (Some(label), Some(title), Some(text), 3) if !label.is_empty() => Ok(Row {
                label: label.to_string(),
                title: title.to_string(),
                text: text.to_string(),
            }),
            (_, _, _, nb_fields) => Err(Error::MalformedRow { line, nb_fields }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn well_formed() {
        let record = StringRecord::from(vec!["pos", "Cat", "Cats run"]);
        let row = Row::try_from(&record).unwrap();
        assert_eq!(
            row,
            Row {
                label: "pos".to_string(),
                title: "Cat".to_string(),
                text: "Cats run".to_string()
            }
        );
    }

    #[test]
    fn empty_title_and_text() {
        let record = StringRecord::from(vec!["pos", "", ""]);
        assert!(Row::try_from(&record).is_ok());
    }

    #[test]
    fn too_few_fields() {
        let record = StringRecord::from(vec!["onlylabel", "onlytitle"]);
        assert!(matches!(
            Row::try_from(&record),
            Err(Error::MalformedRow { nb_fields: 2, .. })
        ));
    }

    #[test]
    fn too_many_fields() {
        let record = StringRecord::from(vec!["a", "b", "c", "d"]);
        assert!(matches!(
            Row::try_from(&record),
            Err(Error::MalformedRow { nb_fields: 4, .. })
        ));
    }

    #[test]
    fn empty_label() {
        let record = StringRecord::from(vec!["", "title", "text"]);
        assert!(matches!(
            Row::try_from(&record),
            Err(Error::MalformedRow { nb_fields: 3, .. })
        ));
    }
}
