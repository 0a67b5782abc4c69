use std::collections::BTreeMap;

use lsf_core_store::{Document, Mappings, Reader, Writer};
use lsf_schema::{logstream_digest, JournalModel, LogStream, LogStreamElem};
use lsf_serde_store::{InMemoryStore, TypedReader, TypedWriter};

fn app_stream() -> LogStream {
    LogStream::new(
        "stream-1",
        "/var/log/app",
        JournalModel::ROTATION,
        "app.%Y%m%d.log",
        BTreeMap::new(),
    )
}

#[test]
fn stream_survives_a_store_roundtrip() {
    let mut store = InMemoryStore::new();
    let mut stream = app_stream();
    stream.fields.insert("level".to_string(), "string".to_string());
    stream.record_or_insert("track");

    store.write_as("streams/stream-1", &stream).unwrap();
    let back: LogStream = store.read_as("streams/stream-1").unwrap().unwrap();

    assert_eq!(back.id, "stream-1");
    assert_eq!(back.path, "/var/log/app");
    assert_eq!(back.pattern, "app.%Y%m%d.log");
    assert!(back.journal_model.is_rotation());
    assert!(back.fields.is_empty());
    assert!(back.records().is_empty());
}

#[test]
fn persisted_bytes_use_the_canonical_keys() {
    let mut store = InMemoryStore::new();
    store.write_as("streams/stream-1", &app_stream()).unwrap();

    let raw = store.raw("streams/stream-1").unwrap();
    assert_eq!(
        std::str::from_utf8(raw).unwrap(),
        r#"{"basepath":"/var/log/app","id":"stream-1","journal-model":"Rotation","pattern":"app.%Y%m%d.log"}"#
    );
}

#[test]
fn digest_of_a_stored_document() {
    let mut store = InMemoryStore::new();
    store.write_as("streams/stream-1", &app_stream()).unwrap();

    let doc = store.read("streams/stream-1").unwrap().unwrap();
    assert_eq!(doc.key(), "streams/stream-1");
    assert_eq!(
        logstream_digest(&doc),
        "logstream stream-1 /var/log/app Rotation app.%Y%m%d.log map[]"
    );
    assert_eq!(logstream_digest(&doc), LogStream::decode(&doc).to_string());
}

#[test]
fn foreign_document_decodes_permissively() {
    let mut store = InMemoryStore::new();
    let mut m = Mappings::new();
    m.insert("owner".to_string(), "ops".into());
    store.write("streams/odd", m).unwrap();

    let stream: LogStream = store.read_as("streams/odd").unwrap().unwrap();
    assert!(stream.is_anonymous());
    assert_eq!(stream.to_string(), "logstream     map[]");
}

#[test]
fn caller_applies_defaults_before_persisting() {
    let mut store = InMemoryStore::new();

    let mut m = Mappings::new();
    m.insert(LogStreamElem::ID.to_string(), "web".into());
    m.insert(LogStreamElem::BASE_PATH.to_string(), "/var/log/web".into());
    m.insert(LogStreamElem::PATTERN.to_string(), "web.log".into());
    LogStream::default_mappings().apply(&mut m);
    store.write("streams/web", m).unwrap();

    let stream: LogStream = store.read_as("streams/web").unwrap().unwrap();
    assert_eq!(stream.journal_model, JournalModel::ROTATION);
}

#[test]
fn unknown_journal_model_roundtrips_through_store() {
    let mut store = InMemoryStore::new();
    let stream = LogStream::new(
        "s",
        "/p",
        JournalModel::new("Hourly"),
        "p.log",
        BTreeMap::new(),
    );

    store.write_as("streams/s", &stream).unwrap();
    let back: LogStream = store.read_as("streams/s").unwrap().unwrap();
    assert_eq!(back.journal_model.as_str(), "Hourly");
}
