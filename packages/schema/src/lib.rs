//! LSF Schema: log streams and their persisted form
//!
//! A log stream is a named log source: an identity, a base path for its log
//! files, a filename pattern and a journal model naming its rotation policy.
//! This crate defines:
//! - `LogStream`: the stream descriptor, with encode (`mappings`) and
//!   decode to and from the flat key/value `Mappings` record
//! - `LogStreamElem`: the canonical names of the persisted elements
//! - `JournalModel`: the rotation-policy symbol, kept opaque
//! - `LogRecord`: per-command tracking state a stream owns
//! - `logstream_digest`: decode a document and render it as one line of text
//!
//! # Example
//!
//! ```rust
//! use lsf_core_store::MapDocument;
//! use lsf_schema::{logstream_digest, LogStream, LogStreamElem};
//!
//! let mut doc = MapDocument::new("streams/app");
//! doc.insert(LogStreamElem::ID, "app");
//! doc.insert(LogStreamElem::BASE_PATH, "/var/log/app");
//!
//! let stream = LogStream::decode(&doc);
//! assert_eq!(stream.path, "/var/log/app");
//! assert_eq!(logstream_digest(&doc), "logstream app /var/log/app   map[]");
//! ```

mod journal_model;
mod log_record;
mod logstream;

pub use journal_model::JournalModel;
pub use log_record::LogRecord;
pub use logstream::{logstream_digest, LogStream, LogStreamElem, ANON_STREAM_ID};
