/*! Record transformers.

Annotate records in place. The only annotation currently done is lemmatization and stemming
of every token, see [Normalizer].

Lemmatizers implement [Lemmatize] and stemmers implement [Stem].
Default implementations are [Morphy] and [Snowball].
!*/
mod annotate;
mod lemmatizer;
mod normalizer;
mod stemmer;

pub use annotate::Annotate;
pub use lemmatizer::{Lemmatize, Morphy};
pub use normalizer::Normalizer;
pub use stemmer::{Snowball, Stem};
