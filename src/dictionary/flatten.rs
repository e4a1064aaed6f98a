//! Flattening a dictionary into one batch of strings and rebuilding it.
//!
//! Leaves are visited in dictionary order; list elements in list order;
//! tuple elements tuple by tuple, position by position. Reassembly walks the
//! same dictionary again, so the two traversals can never disagree.

use super::{TextDictionary, TextValue};
use crate::error::BackendError;

/// The translatable strings of a dictionary, in traversal order.
///
/// Borrows both the strings and the dictionary they came from; the
/// dictionary is the template used to rebuild the translated result.
#[derive(Debug, Clone)]
pub struct FlattenedRequest<'a> {
    source: &'a TextDictionary,
    leaves: Vec<&'a str>,
}

impl<'a> FlattenedRequest<'a> {
    pub fn leaves(&self) -> &[&'a str] {
        &self.leaves
    }

    pub fn len(&self) -> usize {
        self.leaves.len()
    }

    pub fn is_empty(&self) -> bool {
        self.leaves.is_empty()
    }

    /// Rebuilds a dictionary of the source's shape from translated leaves.
    ///
    /// # Errors
    ///
    /// Returns [`BackendError::ShapeMismatch`] if `translated` does not have
    /// exactly one string per request leaf. Nothing is truncated or padded.
    pub fn reassemble(&self, translated: Vec<String>) -> Result<TextDictionary, BackendError> {
        let expected = self.leaves.len();
        let actual = translated.len();
        if expected != actual {
            return Err(BackendError::ShapeMismatch { expected, actual });
        }

        let mut cursor = translated.into_iter();
        let mut take = || {
            cursor
                .next()
                .ok_or(BackendError::ShapeMismatch { expected, actual })
        };

        let mut rebuilt = TextDictionary::new();
        for (key, value) in self.source.iter() {
            let value = match value {
                TextValue::Text(_) => TextValue::Text(take()?),
                TextValue::List(items) => {
                    TextValue::List(items.iter().map(|_| take()).collect::<Result<_, _>>()?)
                }
                TextValue::Tuples(tuples) => TextValue::Tuples(
                    tuples
                        .iter()
                        .map(|tuple| tuple.iter().map(|_| take()).collect::<Result<_, _>>())
                        .collect::<Result<_, _>>()?,
                ),
            };
            rebuilt.insert(key, value);
        }

        Ok(rebuilt)
    }
}

/// Collects every leaf of `dictionary` in traversal order.
pub fn flatten(dictionary: &TextDictionary) -> FlattenedRequest<'_> {
    let mut leaves = Vec::with_capacity(dictionary.leaf_count());

    for (_, value) in dictionary.iter() {
        match value {
            TextValue::Text(text) => leaves.push(text.as_str()),
            TextValue::List(items) => leaves.extend(items.iter().map(String::as_str)),
            TextValue::Tuples(tuples) => {
                leaves.extend(tuples.iter().flatten().map(String::as_str));
            }
        }
    }

    FlattenedRequest {
        source: dictionary,
        leaves,
    }
}
