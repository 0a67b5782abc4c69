//! Core traits: Reader, Writer, Codec, and the schema encode/decode pair.

use bytes::Bytes;

use crate::{DataMap, Error, Format, MapDocument, Mappings};

/// Read documents by key.
///
/// # Object Safety
///
/// This trait is object-safe: you can use `Box<dyn Reader>`.
pub trait Reader: Send + Sync {
    /// Read the document stored under `key`.
    ///
    /// # Returns
    ///
    /// * `Ok(None)` - Nothing is stored under the key.
    /// * `Ok(Some(document))` - The stored document.
    /// * `Err(Error)` - An error occurred.
    fn read(&mut self, key: &str) -> Result<Option<MapDocument>, Error>;
}

/// Write documents by key.
///
/// # Object Safety
///
/// This trait is object-safe: you can use `Box<dyn Writer>`.
pub trait Writer: Send + Sync {
    /// Store `mappings` under `key`, replacing whatever was there.
    ///
    /// Returns the key the document ended up under.
    fn write(&mut self, key: &str, mappings: Mappings) -> Result<String, Error>;
}

/// Combined read/write.
pub trait Store: Reader + Writer {}
impl<T: Reader + Writer> Store for T {}

/// Codec for converting between [`Mappings`] and persisted bytes.
pub trait Codec: Send + Sync {
    fn decode(&self, bytes: &Bytes, format: &Format) -> Result<Mappings, Error>;

    fn encode(&self, mappings: &Mappings, format: &Format) -> Result<Bytes, Error>;

    fn supports(&self, format: &Format) -> bool;
}

/// A schema object that can be written out as [`Mappings`].
pub trait Encodable {
    fn mappings(&self) -> Mappings;
}

/// A schema object that can be rebuilt from any [`DataMap`].
///
/// Decoding is total: absent or malformed entries produce empty attributes,
/// never an error.
pub trait Decodable: Sized {
    fn decode(data: &dyn DataMap) -> Self;
}

impl<T: Reader + ?Sized> Reader for &mut T {
    fn read(&mut self, key: &str) -> Result<Option<MapDocument>, Error> {
        (*self).read(key)
    }
}

impl<T: Writer + ?Sized> Writer for &mut T {
    fn write(&mut self, key: &str, mappings: Mappings) -> Result<String, Error> {
        (*self).write(key, mappings)
    }
}

impl<T: Reader + ?Sized> Reader for Box<T> {
    fn read(&mut self, key: &str) -> Result<Option<MapDocument>, Error> {
        self.as_mut().read(key)
    }
}

impl<T: Writer + ?Sized> Writer for Box<T> {
    fn write(&mut self, key: &str, mappings: Mappings) -> Result<String, Error> {
        self.as_mut().write(key, mappings)
    }
}

impl<T: Codec + ?Sized> Codec for Box<T> {
    fn decode(&self, bytes: &Bytes, format: &Format) -> Result<Mappings, Error> {
        self.as_ref().decode(bytes, format)
    }

    fn encode(&self, mappings: &Mappings, format: &Format) -> Result<Bytes, Error> {
        self.as_ref().encode(mappings, format)
    }

    fn supports(&self, format: &Format) -> bool {
        self.as_ref().supports(format)
    }
}
