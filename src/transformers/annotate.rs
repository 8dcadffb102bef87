//! Annotate trait
use crate::error::Error;

/// Annotations add derived information to an item, in place.
pub trait Annotate<T> {
    fn annotate(&self, item: &mut T) -> Result<(), Error>;
}
