use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::collections::HashMap;
use std::fmt;

/// A single dictionary value.
///
/// The variant is the value's shape. Translation never changes it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TextValue {
    /// One string.
    Text(String),
    /// An ordered list of strings.
    List(Vec<String>),
    /// An ordered list of string tuples, e.g. `[icon, title, description]`.
    Tuples(Vec<Vec<String>>),
}

impl TextValue {
    /// Number of translatable strings held by this value.
    pub fn leaf_count(&self) -> usize {
        match self {
            Self::Text(_) => 1,
            Self::List(items) => items.len(),
            Self::Tuples(tuples) => tuples.iter().map(Vec::len).sum(),
        }
    }

    /// Returns `true` if `other` has the same variant, lengths, and tuple arities.
    ///
    /// An empty list and an empty tuple list have the same shape; JSON cannot
    /// tell them apart.
    pub fn same_shape(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Text(_), Self::Text(_)) => true,
            (Self::List(a), Self::List(b)) => a.len() == b.len(),
            (Self::Tuples(a), Self::Tuples(b)) => {
                a.len() == b.len() && a.iter().zip(b).all(|(x, y)| x.len() == y.len())
            }
            (Self::List(l), Self::Tuples(t)) | (Self::Tuples(t), Self::List(l)) => {
                l.is_empty() && t.is_empty()
            }
            _ => false,
        }
    }

    /// Takes the variant of `template` when both are empty lists.
    fn retag_empty(&mut self, template: &Self) {
        match (&*self, template) {
            (Self::List(items), Self::Tuples(_)) if items.is_empty() => {
                *self = Self::Tuples(Vec::new());
            }
            (Self::Tuples(tuples), Self::List(_)) if tuples.is_empty() => {
                *self = Self::List(Vec::new());
            }
            _ => {}
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(text) => Some(text),
            _ => None,
        }
    }

    pub fn as_list(&self) -> Option<&[String]> {
        match self {
            Self::List(items) => Some(items),
            _ => None,
        }
    }

    pub fn as_tuples(&self) -> Option<&[Vec<String>]> {
        match self {
            Self::Tuples(tuples) => Some(tuples),
            _ => None,
        }
    }
}

impl From<&str> for TextValue {
    fn from(text: &str) -> Self {
        Self::Text(text.to_string())
    }
}

impl From<String> for TextValue {
    fn from(text: String) -> Self {
        Self::Text(text)
    }
}

impl<const N: usize> From<[&str; N]> for TextValue {
    fn from(items: [&str; N]) -> Self {
        Self::List(items.iter().map(ToString::to_string).collect())
    }
}

impl<const N: usize, const M: usize> From<[[&str; M]; N]> for TextValue {
    fn from(tuples: [[&str; M]; N]) -> Self {
        Self::Tuples(
            tuples
                .iter()
                .map(|tuple| tuple.iter().map(ToString::to_string).collect())
                .collect(),
        )
    }
}

/// Keyed UI text in declaration order.
///
/// Iteration, serialization, and flattening all follow the order in which
/// keys were first inserted. Re-inserting an existing key replaces its value
/// in place.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextDictionary {
    entries: Vec<(String, TextValue)>,
    index: HashMap<String, usize>,
}

impl TextDictionary {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a value, returning the previous one if the key existed.
    pub fn insert(
        &mut self,
        key: impl Into<String>,
        value: impl Into<TextValue>,
    ) -> Option<TextValue> {
        let key = key.into();
        let value = value.into();

        if let Some(&position) = self.index.get(&key) {
            return Some(std::mem::replace(&mut self.entries[position].1, value));
        }

        self.index.insert(key.clone(), self.entries.len());
        self.entries.push((key, value));
        None
    }

    pub fn get(&self, key: &str) -> Option<&TextValue> {
        self.index.get(key).map(|&position| &self.entries[position].1)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.index.contains_key(key)
    }

    /// Looks up a scalar, falling back to `default` when the key is missing
    /// or holds a list.
    pub fn text_or<'a>(&'a self, key: &str, default: &'a str) -> &'a str {
        self.get(key).and_then(TextValue::as_text).unwrap_or(default)
    }

    /// Looks up a list, falling back to `default` when the key is missing
    /// or holds another shape.
    pub fn list_or<'a>(&'a self, key: &str, default: &'a [String]) -> &'a [String] {
        self.get(key).and_then(TextValue::as_list).unwrap_or(default)
    }

    /// Looks up a tuple list, falling back to `default` when the key is
    /// missing or holds another shape.
    pub fn tuples_or<'a>(&'a self, key: &str, default: &'a [Vec<String>]) -> &'a [Vec<String>] {
        self.get(key).and_then(TextValue::as_tuples).unwrap_or(default)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &TextValue)> {
        self.entries.iter().map(|(key, value)| (key.as_str(), value))
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(key, _)| key.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Total number of translatable strings across all values.
    pub fn leaf_count(&self) -> usize {
        self.entries.iter().map(|(_, value)| value.leaf_count()).sum()
    }

    /// Gives empty lists the variant used for the same key in `template`.
    ///
    /// Dictionaries read back from JSON need this before they stand in for
    /// a translation of `template`.
    pub fn conform_to(&mut self, template: &Self) {
        for (key, value) in &mut self.entries {
            if let Some(expected) = template.get(key) {
                value.retag_empty(expected);
            }
        }
    }

    /// Returns `true` if both dictionaries have the same keys in the same
    /// order and every value has the same shape.
    pub fn same_shape(&self, other: &Self) -> bool {
        self.len() == other.len()
            && self
                .entries
                .iter()
                .zip(&other.entries)
                .all(|((ka, va), (kb, vb))| ka == kb && va.same_shape(vb))
    }
}

impl<K, V> FromIterator<(K, V)> for TextDictionary
where
    K: Into<String>,
    V: Into<TextValue>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut dictionary = Self::new();
        for (key, value) in iter {
            dictionary.insert(key, value);
        }
        dictionary
    }
}

impl Serialize for TextDictionary {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (key, value) in &self.entries {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}

struct DictionaryVisitor;

impl<'de> Visitor<'de> for DictionaryVisitor {
    type Value = TextDictionary;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a map of strings, string lists, or lists of string tuples")
    }

    fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
        let mut dictionary = TextDictionary::new();
        while let Some((key, value)) = access.next_entry::<String, TextValue>()? {
            dictionary.insert(key, value);
        }
        Ok(dictionary)
    }
}

impl<'de> Deserialize<'de> for TextDictionary {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_map(DictionaryVisitor)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn sample() -> TextDictionary {
        TextDictionary::from_iter([
            ("header", TextValue::from("AI Tamil Tutor")),
            ("points", TextValue::from(["one", "two"])),
            (
                "features",
                TextValue::from([["🗣️", "Chat", "Talk"], ["🎧", "Listen", "Hear"]]),
            ),
        ])
    }

    #[test]
    fn test_insertion_order_is_preserved() {
        let dict = sample();
        let keys: Vec<_> = dict.keys().collect();
        assert_eq!(keys, vec!["header", "points", "features"]);
    }

    #[test]
    fn test_reinsert_replaces_in_place() {
        let mut dict = sample();
        let previous = dict.insert("header", "Tutor");

        assert_eq!(previous, Some(TextValue::from("AI Tamil Tutor")));
        assert_eq!(dict.len(), 3);
        assert_eq!(dict.keys().next(), Some("header"));
        assert_eq!(dict.text_or("header", ""), "Tutor");
    }

    #[test]
    fn test_lookup_falls_back_to_default() {
        let dict = sample();
        assert_eq!(dict.text_or("missing", "Fallback"), "Fallback");
        // wrong shape also falls back
        assert_eq!(dict.text_or("points", "Fallback"), "Fallback");
        assert!(dict.list_or("header", &[]).is_empty());
        assert_eq!(dict.list_or("points", &[]).len(), 2);
        assert_eq!(dict.tuples_or("features", &[]).len(), 2);
    }

    #[test]
    fn test_leaf_count() {
        assert_eq!(sample().leaf_count(), 1 + 2 + 6);
        assert_eq!(TextDictionary::new().leaf_count(), 0);
    }

    #[test]
    fn test_same_shape() {
        let dict = sample();
        let mut other = sample();
        other.insert("header", "Something else");
        assert!(dict.same_shape(&other));

        other.insert("points", TextValue::from(["only one"]));
        assert!(!dict.same_shape(&other));
    }

    #[test]
    fn test_empty_tuples_survive_json() {
        let mut source = TextDictionary::new();
        source.insert("features", TextValue::Tuples(Vec::new()));

        let json = serde_json::to_string(&source).unwrap();
        let mut loaded: TextDictionary = serde_json::from_str(&json).unwrap();

        assert_eq!(loaded.get("features"), Some(&TextValue::List(Vec::new())));
        assert!(loaded.same_shape(&source));

        loaded.conform_to(&source);
        assert_eq!(loaded, source);
    }

    #[test]
    fn test_json_keeps_document_order() {
        let json = r#"{"zeta": "z", "alpha": ["a", "b"], "mid": [["1", "2"]]}"#;
        let dict: TextDictionary = serde_json::from_str(json).unwrap();

        let keys: Vec<_> = dict.keys().collect();
        assert_eq!(keys, vec!["zeta", "alpha", "mid"]);
        assert_eq!(dict.get("mid"), Some(&TextValue::from([["1", "2"]])));

        let written = serde_json::to_string(&dict).unwrap();
        assert_eq!(
            written,
            r#"{"zeta":"z","alpha":["a","b"],"mid":[["1","2"]]}"#
        );
    }

    #[test]
    fn test_json_rejects_nested_objects() {
        let json = r#"{"bad": {"nested": "x"}}"#;
        assert!(serde_json::from_str::<TextDictionary>(json).is_err());
    }
}
