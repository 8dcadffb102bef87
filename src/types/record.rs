use super::{Sentence, Token};

/// A labeled example.
///
/// Sentences coming from the title always precede the ones coming from the body text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    label: String,
    sentences: Vec<Sentence>,
}

impl Record {
    pub fn new(label: String, sentences: Vec<Sentence>) -> Self {
        Self { label, sentences }
    }

    /// Build a record from title and text sentences, in that order.
    pub fn from_parts(
        label: String,
        title_sentences: Vec<Sentence>,
        text_sentences: Vec<Sentence>,
    ) -> Self {
        let mut sentences = title_sentences;
        sentences.extend(text_sentences);
        Self::new(label, sentences)
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn sentences(&self) -> &[Sentence] {
        self.sentences.as_ref()
    }

    pub fn sentences_mut(&mut self) -> &mut [Sentence] {
        self.sentences.as_mut()
    }

    /// Iterate over every token of the record, in order.
    pub fn tokens(&self) -> impl Iterator<Item = &Token> {
        self.sentences.iter().flat_map(|s| s.tokens().iter())
    }

    pub fn tokens_mut(&mut self) -> impl Iterator<Item = &mut Token> {
        self.sentences.iter_mut().flat_map(|s| s.tokens_mut().iter_mut())
    }

    pub fn nb_tokens(&self) -> usize {
        self.sentences.iter().map(Sentence::len).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn title_first() {
        let title: Vec<Sentence> = vec![["Title"].into_iter().collect()];
        let text: Vec<Sentence> = vec![
            ["first", "one"].into_iter().collect(),
            ["second"].into_iter().collect(),
        ];

        let r = Record::from_parts("label".to_string(), title, text);
        assert_eq!(r.label(), "label");
        assert_eq!(r.sentences().len(), 3);

        let texts: Vec<&str> = r.tokens().map(Token::text).collect();
        assert_eq!(texts, vec!["Title", "first", "one", "second"]);
        assert_eq!(r.nb_tokens(), 4);
    }
}
