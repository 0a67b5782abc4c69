//! Typed reader and writer extension traits.

use lsf_core_store::{Decodable, Encodable, Error, Reader, Writer};

/// Extension trait for typed reads.
///
/// This trait is automatically implemented for all `Reader` implementations.
///
/// # Example
///
/// ```rust,ignore
/// use lsf_serde_store::TypedReader;
/// use lsf_schema::LogStream;
///
/// fn load(store: &mut dyn Reader, id: &str) -> Result<Option<LogStream>, Error> {
///     store.read_as(&format!("streams/{}", id))
/// }
/// ```
pub trait TypedReader: Reader {
    /// Read the document under `key` and decode it into `T`.
    ///
    /// Only the store can fail here; once a document is found, decoding is
    /// total.
    fn read_as<T: Decodable>(&mut self, key: &str) -> Result<Option<T>, Error> {
        let Some(document) = self.read(key)? else {
            return Ok(None);
        };

        Ok(Some(T::decode(&document)))
    }
}

impl<R: Reader + ?Sized> TypedReader for R {}

/// Extension trait for typed writes.
///
/// This trait is automatically implemented for all `Writer` implementations.
pub trait TypedWriter: Writer {
    /// Encode `data` and write it under `key`.
    fn write_as<T: Encodable + ?Sized>(&mut self, key: &str, data: &T) -> Result<String, Error> {
        self.write(key, data.mappings())
    }
}

impl<W: Writer + ?Sized> TypedWriter for W {}
