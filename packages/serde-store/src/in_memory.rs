//! In-memory store holding encoded documents.

use std::collections::BTreeMap;

use bytes::Bytes;
use lsf_core_store::{Codec, Error, Format, MapDocument, Mappings, Reader, Writer};

use crate::JsonCodec;

/// A store that keeps every document as encoded bytes in memory.
///
/// Documents go through the codec on every write and read, so what comes
/// back is exactly what a persistent store using the same codec would
/// return.
///
/// # Example
///
/// ```rust
/// use lsf_serde_store::InMemoryStore;
/// use lsf_core_store::{Mappings, Reader, Writer};
///
/// let mut store = InMemoryStore::new();
///
/// let mut m = Mappings::new();
/// m.insert("id".to_string(), "app".into());
/// store.write("streams/app", m.clone()).unwrap();
///
/// let doc = store.read("streams/app").unwrap().unwrap();
/// assert_eq!(doc.into_mappings(), m);
/// ```
pub struct InMemoryStore<C: Codec = JsonCodec> {
    codec: C,
    format: Format,
    documents: BTreeMap<String, Bytes>,
}

impl InMemoryStore<JsonCodec> {
    /// Create an empty store persisting documents as JSON.
    pub fn new() -> Self {
        Self::with_codec(JsonCodec, Format::JSON)
    }
}

impl Default for InMemoryStore<JsonCodec> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: Codec> InMemoryStore<C> {
    /// Create an empty store using `codec` with `format`.
    pub fn with_codec(codec: C, format: Format) -> Self {
        Self {
            codec,
            format,
            documents: BTreeMap::new(),
        }
    }

    /// The encoded bytes stored under `key`.
    pub fn raw(&self, key: &str) -> Option<&Bytes> {
        self.documents.get(key)
    }

    /// Stored keys, in ascending order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.documents.keys().map(String::as_str)
    }

    pub fn remove(&mut self, key: &str) -> Option<Bytes> {
        self.documents.remove(key)
    }

    pub fn len(&self) -> usize {
        self.documents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }
}

impl<C: Codec> Reader for InMemoryStore<C> {
    fn read(&mut self, key: &str) -> Result<Option<MapDocument>, Error> {
        log::debug!("Reading {}...", key);
        let Some(bytes) = self.documents.get(key) else {
            return Ok(None);
        };

        let mappings = self.codec.decode(bytes, &self.format)?;
        Ok(Some(MapDocument::with_mappings(key, mappings)))
    }
}

impl<C: Codec> Writer for InMemoryStore<C> {
    fn write(&mut self, key: &str, mappings: Mappings) -> Result<String, Error> {
        if key.is_empty() {
            return Err(Error::invalid_key(key, "document keys must not be empty"));
        }

        log::debug!("Writing {}...", key);
        let bytes = self.codec.encode(&mappings, &self.format)?;
        self.documents.insert(key.to_string(), bytes);
        Ok(key.to_string())
    }
}
