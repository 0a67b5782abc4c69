//! Key/value documents - the persisted shape of schema objects.

use std::collections::{BTreeMap, HashMap};

use bytes::Bytes;

/// The flat key/value record every schema object encodes to.
///
/// Uses `BTreeMap` so that iteration (and therefore any serialized form) is
/// ordered by key.
pub type Mappings = BTreeMap<String, Bytes>;

/// Anything that can expose its contents as [`Mappings`].
///
/// This is the read accessor schema decoders consume. Implementations must
/// not fail: a source with nothing to offer returns an empty map.
pub trait DataMap {
    fn mappings(&self) -> Mappings;
}

/// A [`DataMap`] that lives under a key in some store.
pub trait Document: DataMap {
    /// The key the document is stored under.
    fn key(&self) -> &str;
}

impl DataMap for Mappings {
    fn mappings(&self) -> Mappings {
        self.clone()
    }
}

impl DataMap for HashMap<String, Bytes> {
    fn mappings(&self) -> Mappings {
        self.iter().map(|(k, v)| (k.clone(), v.clone())).collect()
    }
}

impl DataMap for HashMap<String, Vec<u8>> {
    fn mappings(&self) -> Mappings {
        self.iter()
            .map(|(k, v)| (k.clone(), Bytes::copy_from_slice(v)))
            .collect()
    }
}

impl<T: DataMap + ?Sized> DataMap for &T {
    fn mappings(&self) -> Mappings {
        (**self).mappings()
    }
}

impl<T: DataMap + ?Sized> DataMap for Box<T> {
    fn mappings(&self) -> Mappings {
        self.as_ref().mappings()
    }
}

impl<T: Document + ?Sized> Document for &T {
    fn key(&self) -> &str {
        (**self).key()
    }
}

impl<T: Document + ?Sized> Document for Box<T> {
    fn key(&self) -> &str {
        self.as_ref().key()
    }
}

/// A document backed by an owned [`Mappings`] table.
///
/// # Example
///
/// ```rust
/// use lsf_core_store::{DataMap, Document, MapDocument};
///
/// let mut doc = MapDocument::new("streams/app");
/// doc.insert("id", "app");
///
/// assert_eq!(doc.key(), "streams/app");
/// assert_eq!(doc.get("id").map(|b| &b[..]), Some(&b"app"[..]));
/// assert_eq!(doc.mappings().len(), 1);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MapDocument {
    key: String,
    mappings: Mappings,
}

impl MapDocument {
    /// Create an empty document stored under `key`.
    pub fn new(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            mappings: Mappings::new(),
        }
    }

    /// Create a document from existing mappings.
    pub fn with_mappings(key: impl Into<String>, mappings: Mappings) -> Self {
        Self {
            key: key.into(),
            mappings,
        }
    }

    /// Set `name` to `value`, returning the previous value if any.
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<Bytes>) -> Option<Bytes> {
        self.mappings.insert(name.into(), value.into())
    }

    pub fn get(&self, name: &str) -> Option<&Bytes> {
        self.mappings.get(name)
    }

    pub fn remove(&mut self, name: &str) -> Option<Bytes> {
        self.mappings.remove(name)
    }

    pub fn len(&self) -> usize {
        self.mappings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.mappings.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &Bytes)> {
        self.mappings.iter()
    }

    pub fn as_mappings(&self) -> &Mappings {
        &self.mappings
    }

    pub fn into_mappings(self) -> Mappings {
        self.mappings
    }
}

impl DataMap for MapDocument {
    fn mappings(&self) -> Mappings {
        self.mappings.clone()
    }
}

impl Document for MapDocument {
    fn key(&self) -> &str {
        &self.key
    }
}
