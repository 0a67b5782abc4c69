//! Persistence helpers for LSF documents
//!
//! This layer sits on top of the document traits and adds:
//! - `JsonCodec`: mappings <-> a flat JSON object of strings
//! - `TypedReader` / `TypedWriter`: read and write schema objects directly
//! - `InMemoryStore`: a codec-backed store, handy for tests and tooling
//!
//! # Example
//!
//! ```rust,ignore
//! use lsf_serde_store::{InMemoryStore, TypedReader, TypedWriter};
//! use lsf_schema::LogStream;
//!
//! let mut store = InMemoryStore::new();
//! store.write_as("streams/app", &stream)?;
//! let back: Option<LogStream> = store.read_as("streams/app")?;
//! ```

pub use bytes::Bytes;

mod codec;
mod in_memory;
mod typed;

pub use codec::JsonCodec;
pub use in_memory::InMemoryStore;
pub use typed::{TypedReader, TypedWriter};

// Re-export core types for convenience
pub use lsf_core_store::{
    Codec, DataMap, Decodable, Document, Encodable, Error, Format, MapDocument, Mappings, Reader,
    Store, Writer,
};
