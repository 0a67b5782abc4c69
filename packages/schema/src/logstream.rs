//! The LogStream type - a named log source and its persisted shape.
//!
//! Every stream has an identity that is unique within its home port. The
//! empty identity is reserved for anonymous streams.

use std::collections::btree_map::Entry;
use std::collections::BTreeMap;
use std::fmt;

use bytes::Bytes;
use lsf_core_store::{DataMap, Decodable, DefaultMappings, Document, Encodable, Mappings};
use serde::{Deserialize, Serialize};

use crate::{JournalModel, LogRecord};

/// Identity of a stream that has not been given one.
pub const ANON_STREAM_ID: &str = "";

/// Names of the persisted elements of a [`LogStream`].
///
/// Encode and decode both go through these; the strings are the on-disk
/// schema and must not change.
pub struct LogStreamElem;

impl LogStreamElem {
    pub const ID: &'static str = "id";
    pub const BASE_PATH: &'static str = "basepath";
    pub const PATTERN: &'static str = "pattern";
    pub const JOURNAL_MODEL: &'static str = "journal-model";

    /// Every element, in canonical order.
    pub const ALL: [&'static str; 4] = [
        Self::ID,
        Self::BASE_PATH,
        Self::PATTERN,
        Self::JOURNAL_MODEL,
    ];
}

/// Descriptor of a named log source.
///
/// Only `id`, `path`, `pattern` and `journal_model` are persisted. `fields`
/// and the per-command records are runtime state: they start out empty on
/// every decode and are never written by [`LogStream::mappings`].
///
/// Nothing here is synchronized. Callers sharing a stream across threads
/// while mutating `fields` or records bring their own locking.
///
/// # Example
///
/// ```rust
/// use std::collections::BTreeMap;
/// use lsf_schema::{JournalModel, LogStream};
///
/// let stream = LogStream::new(
///     "stream-1",
///     "/var/log/app",
///     JournalModel::ROTATION,
///     "app.%Y%m%d.log",
///     BTreeMap::new(),
/// );
///
/// let decoded = LogStream::decode(&stream.mappings());
/// assert_eq!(decoded, stream);
/// assert_eq!(
///     stream.to_string(),
///     "logstream stream-1 /var/log/app Rotation app.%Y%m%d.log map[]"
/// );
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LogStream {
    /// Unique (in context of its port) identifier of the stream.
    pub id: String,
    /// Base path of the stream's log files.
    #[serde(rename = "basepath")]
    pub path: String,
    #[serde(rename = "journal-model")]
    pub journal_model: JournalModel,
    /// Log filename pattern.
    pub pattern: String,
    /// The stream's semantic structure.
    pub fields: BTreeMap<String, String>,
    #[serde(skip)]
    records: BTreeMap<String, LogRecord>,
}

impl LogStream {
    pub fn new(
        id: impl Into<String>,
        path: impl Into<String>,
        journal_model: JournalModel,
        pattern: impl Into<String>,
        fields: BTreeMap<String, String>,
    ) -> Self {
        Self {
            id: id.into(),
            path: path.into(),
            journal_model,
            pattern: pattern.into(),
            fields,
            records: BTreeMap::new(),
        }
    }

    /// Baseline values for elements a new stream may leave out.
    ///
    /// Neither [`LogStream::mappings`] nor [`LogStream::decode`] applies
    /// these.
    pub fn default_mappings() -> DefaultMappings {
        DefaultMappings::new().with(LogStreamElem::JOURNAL_MODEL, JournalModel::ROTATION.as_str())
    }

    pub fn is_anonymous(&self) -> bool {
        self.id == ANON_STREAM_ID
    }

    /// The persisted form of this stream: exactly the four [`LogStreamElem`]
    /// entries.
    pub fn mappings(&self) -> Mappings {
        let mut m = Mappings::new();
        m.insert(LogStreamElem::ID.to_string(), Bytes::from(self.id.clone()));
        m.insert(LogStreamElem::BASE_PATH.to_string(), Bytes::from(self.path.clone()));
        m.insert(LogStreamElem::PATTERN.to_string(), Bytes::from(self.pattern.clone()));
        m.insert(
            LogStreamElem::JOURNAL_MODEL.to_string(),
            Bytes::from(self.journal_model.as_str().to_string()),
        );
        m
    }

    /// Rebuild a stream from its persisted form.
    ///
    /// Never fails. Missing elements come back as empty strings, entries
    /// outside [`LogStreamElem`] are ignored, and the journal model is taken
    /// as-is.
    pub fn decode(data: &dyn DataMap) -> Self {
        let m = data.mappings();
        Self {
            id: element(&m, LogStreamElem::ID),
            path: element(&m, LogStreamElem::BASE_PATH),
            journal_model: JournalModel::from(element(&m, LogStreamElem::JOURNAL_MODEL)),
            pattern: element(&m, LogStreamElem::PATTERN),
            fields: BTreeMap::new(),
            records: BTreeMap::new(),
        }
    }

    // === Records ===

    pub fn records(&self) -> &BTreeMap<String, LogRecord> {
        &self.records
    }

    pub fn record(&self, command: &str) -> Option<&LogRecord> {
        self.records.get(command)
    }

    pub fn record_mut(&mut self, command: &str) -> Option<&mut LogRecord> {
        self.records.get_mut(command)
    }

    /// The record for `command`, created on first use.
    pub fn record_or_insert(&mut self, command: &str) -> &mut LogRecord {
        match self.records.entry(command.to_string()) {
            Entry::Occupied(e) => e.into_mut(),
            Entry::Vacant(e) => e.insert(LogRecord::new(command)),
        }
    }

    pub fn remove_record(&mut self, command: &str) -> Option<LogRecord> {
        self.records.remove(command)
    }
}

fn element(m: &Mappings, name: &str) -> String {
    match m.get(name) {
        Some(bytes) => String::from_utf8_lossy(bytes).into_owned(),
        None => {
            log::trace!("logstream element '{}' absent, decoding as empty", name);
            String::new()
        }
    }
}

impl fmt::Display for LogStream {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "logstream {} {} {} {} {}",
            self.id,
            self.path,
            self.journal_model,
            self.pattern,
            FieldsDisplay(&self.fields)
        )
    }
}

/// Renders fields as `map[k1:v1 k2:v2]`, keys ascending.
struct FieldsDisplay<'a>(&'a BTreeMap<String, String>);

impl fmt::Display for FieldsDisplay<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("map[")?;
        for (i, (name, value)) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{}:{}", name, value)?;
        }
        f.write_str("]")
    }
}

impl Encodable for LogStream {
    fn mappings(&self) -> Mappings {
        LogStream::mappings(self)
    }
}

impl Decodable for LogStream {
    fn decode(data: &dyn DataMap) -> Self {
        LogStream::decode(data)
    }
}

/// Decode `doc` as a stream and render it.
///
/// This is a text summary for logs and audit trails, not a hash.
pub fn logstream_digest(doc: &dyn Document) -> String {
    LogStream::decode(&doc).to_string()
}
