//! Core LSF: Document Layer
//!
//! Schema objects persist as flat key/value records. This layer defines that
//! shape and the seams around it:
//! - `Mappings`: the key/value record itself (`String` keys, byte values)
//! - `DataMap` / `Document`: read accessors schema decoders consume
//! - `DefaultMappings`: caller-supplied baseline values for missing keys
//! - `Reader` / `Writer` / `Codec`: how documents move in and out of stores
//!
//! # Example
//!
//! ```rust
//! use lsf_core_store::{DataMap, MapDocument};
//!
//! fn ids(docs: &[MapDocument]) -> Vec<String> {
//!     docs.iter()
//!         .filter_map(|d| d.mappings().get("id").map(|b| String::from_utf8_lossy(b).into_owned()))
//!         .collect()
//! }
//! ```

pub use bytes::Bytes;

mod defaults;
mod document;
mod error;
mod format;
mod traits;

pub use defaults::DefaultMappings;
pub use document::{DataMap, Document, MapDocument, Mappings};
pub use error::Error;
pub use format::Format;
pub use traits::{Codec, Decodable, Encodable, Reader, Store, Writer};
