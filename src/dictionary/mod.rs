//! Keyed UI text and the batch flatten/reassemble codec.

mod catalog;
mod flatten;
mod value;

pub use catalog::builtin;
pub use flatten::{FlattenedRequest, flatten};
pub use value::{TextDictionary, TextValue};
