//! Token: a single lexical unit and its normalized forms.
use serde::Serialize;

/// Lemma and stem of a token.
///
/// Both are set together, so a [Token] is either fully annotated or not at all.
#[derive(Debug, Clone, PartialEq, Eq)]
struct Annotation {
    lemma: String,
    stem: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    text: String,
    annotation: Option<Annotation>,
}

impl Token {
    /// Create a new, not yet annotated token.
    pub fn new(text: String) -> Self {
        Self {
            text,
            annotation: None,
        }
    }

    /// Get a reference to the raw token text.
    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn lemma(&self) -> Option<&str> {
        self.annotation.as_ref().map(|a| a.lemma.as_str())
    }

    pub fn stem(&self) -> Option<&str> {
        self.annotation.as_ref().map(|a| a.stem.as_str())
    }

    pub fn is_annotated(&self) -> bool {
        self.annotation.is_some()
    }

    /// Set lemma and stem.
    /// Replaces a previous annotation if there's one.
    pub fn annotate(&mut self, lemma: String, stem: String) {
        self.annotation = Some(Annotation { lemma, stem });
    }

    /// Get a serializable `(text, lemma, stem)` view of the token.
    /// Missing annotations are serialized as empty fields.
    pub fn row(&self) -> TokenRow<'_> {
        TokenRow(
            self.text(),
            self.lemma().unwrap_or_default(),
            self.stem().unwrap_or_default(),
        )
    }
}

impl From<&str> for Token {
    fn from(text: &str) -> Self {
        Token::new(text.to_string())
    }
}

/// `(text, lemma, stem)` row, as written in record files.
#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct TokenRow<'a>(pub &'a str, pub &'a str, pub &'a str);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_is_not_annotated() {
        let t = Token::from("running");
        assert_eq!(t.text(), "running");
        assert!(!t.is_annotated());
        assert_eq!(t.lemma(), None);
        assert_eq!(t.stem(), None);
    }

    #[test]
    fn annotate_sets_both() {
        let mut t = Token::from("cats");
        t.annotate("cat".to_string(), "cat".to_string());
        assert!(t.is_annotated());
        assert_eq!(t.lemma(), Some("cat"));
        assert_eq!(t.stem(), Some("cat"));

        // text is left untouched
        assert_eq!(t.text(), "cats");
    }

    #[test]
    fn row_of_unannotated() {
        let t = Token::from("foo");
        assert_eq!(t.row(), TokenRow("foo", "", ""));
    }
}
