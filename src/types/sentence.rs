use super::Token;

/// Ordered sequence of [Token].
///
/// Empty sentences are valid (they come from empty segments) and are kept as is.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Sentence {
    tokens: Vec<Token>,
}

impl Sentence {
    pub fn new(tokens: Vec<Token>) -> Self {
        Self { tokens }
    }

    pub fn tokens(&self) -> &[Token] {
        self.tokens.as_ref()
    }

    /// Mutable access to tokens.
    /// The sentence structure itself (number, order of tokens) can't be changed.
    pub fn tokens_mut(&mut self) -> &mut [Token] {
        self.tokens.as_mut()
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }
}

impl<S: AsRef<str>> FromIterator<S> for Sentence {
    fn from_iter<T: IntoIterator<Item = S>>(iter: T) -> Self {
        Self::new(iter.into_iter().map(|s| Token::from(s.as_ref())).collect())
    }
}
