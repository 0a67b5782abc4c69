//! Default values for document keys.

use std::collections::BTreeMap;

use bytes::Bytes;
use serde::{Deserialize, Serialize};

use crate::document::{DataMap, Mappings};

/// A table of baseline values for document keys.
///
/// Schema types publish one of these for the keys that have a sensible
/// default. Nothing applies it implicitly: whoever builds a new document
/// decides whether to call [`DefaultMappings::apply`].
///
/// Serializes as a plain JSON object so it can be embedded in an
/// application's own configuration.
///
/// # Example
///
/// ```rust
/// use lsf_core_store::{DefaultMappings, Mappings};
///
/// let defaults = DefaultMappings::new().with("journal-model", "Rotation");
///
/// let mut m = Mappings::new();
/// m.insert("id".to_string(), "app".into());
/// assert_eq!(defaults.apply(&mut m), 1);
/// assert_eq!(&m["journal-model"][..], b"Rotation");
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DefaultMappings(BTreeMap<String, String>);

impl DefaultMappings {
    pub fn new() -> Self {
        Self(BTreeMap::new())
    }

    /// Add a default, builder style.
    #[must_use]
    pub fn with(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.0.insert(name.into(), value.into());
        self
    }

    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) -> Option<String> {
        self.0.insert(name.into(), value.into())
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.0.get(name).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Fill in every key of the table that `mappings` lacks.
    ///
    /// Keys that are present keep their value, even when it is empty.
    /// Returns the number of keys that were filled.
    pub fn apply(&self, mappings: &mut Mappings) -> usize {
        let mut filled = 0;
        for (name, value) in &self.0 {
            if !mappings.contains_key(name) {
                mappings.insert(name.clone(), Bytes::from(value.clone()));
                filled += 1;
            }
        }
        filled
    }

    /// Copy of `data`'s mappings with the defaults applied.
    pub fn applied_to(&self, data: &dyn DataMap) -> Mappings {
        let mut mappings = data.mappings();
        self.apply(&mut mappings);
        mappings
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for DefaultMappings {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}
