//! JSON codec implementation.

use bytes::Bytes;
use lsf_core_store::{Codec, Error, Format, Mappings};

/// A codec that persists mappings as a flat JSON object of strings.
///
/// Keys come out in ascending order. Every value must be UTF-8: a document
/// holding arbitrary bytes cannot be represented and fails to encode.
///
/// # Example
///
/// ```rust
/// use lsf_serde_store::JsonCodec;
/// use lsf_core_store::{Codec, Format, Mappings};
///
/// let codec = JsonCodec;
/// let mut m = Mappings::new();
/// m.insert("id".to_string(), "app".into());
///
/// let bytes = codec.encode(&m, &Format::JSON).unwrap();
/// assert_eq!(&bytes[..], br#"{"id":"app"}"#);
/// assert_eq!(codec.decode(&bytes, &Format::JSON).unwrap(), m);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonCodec;

impl Codec for JsonCodec {
    fn decode(&self, bytes: &Bytes, format: &Format) -> Result<Mappings, Error> {
        if !self.supports(format) {
            return Err(Error::UnsupportedFormat(format.clone()));
        }

        let json: serde_json::Value =
            serde_json::from_slice(bytes).map_err(|e| Error::decode(format.clone(), e.to_string()))?;

        let serde_json::Value::Object(object) = json else {
            log::debug!("Rejecting non-object JSON document");
            return Err(Error::decode(format.clone(), "expected a JSON object"));
        };

        object
            .into_iter()
            .map(|(key, value)| match value {
                serde_json::Value::String(s) => Ok((key, Bytes::from(s))),
                other => Err(Error::decode(
                    format.clone(),
                    format!("value for '{}' is not a string: {}", key, other),
                )),
            })
            .collect()
    }

    fn encode(&self, mappings: &Mappings, format: &Format) -> Result<Bytes, Error> {
        if !self.supports(format) {
            return Err(Error::UnsupportedFormat(format.clone()));
        }

        let mut object = serde_json::Map::new();
        for (key, value) in mappings {
            let text = std::str::from_utf8(value).map_err(|e| {
                log::debug!("Value for '{}' is not UTF-8: {}", key, e);
                Error::encode(format.clone(), format!("value for '{}' is not UTF-8", key))
            })?;
            object.insert(key.clone(), serde_json::Value::String(text.to_string()));
        }

        let bytes = serde_json::to_vec(&serde_json::Value::Object(object))
            .map_err(|e| Error::encode(format.clone(), e.to_string()))?;

        Ok(Bytes::from(bytes))
    }

    fn supports(&self, format: &Format) -> bool {
        format == &Format::JSON
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use collection_literals::btree;

    #[test]
    fn keys_are_sorted_in_output() {
        let m: Mappings = btree! {
            "pattern".to_string() => Bytes::from_static(b"app.log"),
            "id".to_string() => Bytes::from_static(b"app"),
            "basepath".to_string() => Bytes::from_static(b"/var/log"),
        };

        let bytes = JsonCodec.encode(&m, &Format::JSON).unwrap();
        assert_eq!(
            &bytes[..],
            br#"{"basepath":"/var/log","id":"app","pattern":"app.log"}"#
        );
    }

    #[test]
    fn empty_values_survive() {
        let m: Mappings = btree! {
            "id".to_string() => Bytes::new(),
        };

        let bytes = JsonCodec.encode(&m, &Format::JSON).unwrap();
        assert_eq!(&bytes[..], br#"{"id":""}"#);
        assert_eq!(JsonCodec.decode(&bytes, &Format::JSON).unwrap(), m);
    }

    #[test]
    fn non_utf8_value_fails_to_encode() {
        let m: Mappings = btree! {
            "id".to_string() => Bytes::from_static(&[0xff, 0xfe]),
        };

        let result = JsonCodec.encode(&m, &Format::JSON);
        assert!(matches!(result, Err(Error::Encode { .. })));
    }

    #[test]
    fn non_object_fails_to_decode() {
        let result = JsonCodec.decode(&Bytes::from_static(b"[1, 2]"), &Format::JSON);
        assert!(matches!(result, Err(Error::Decode { .. })));
    }

    #[test]
    fn non_string_value_fails_to_decode() {
        let result = JsonCodec.decode(&Bytes::from_static(br#"{"id": 7}"#), &Format::JSON);
        match result {
            Err(Error::Decode { message, .. }) => assert!(message.contains("'id'")),
            other => panic!("expected decode error, got {:?}", other),
        }
    }

    #[test]
    fn malformed_json_fails_to_decode() {
        let result = JsonCodec.decode(&Bytes::from_static(b"{\"id\":"), &Format::JSON);
        assert!(matches!(result, Err(Error::Decode { .. })));
    }

    #[test]
    fn rejects_other_formats() {
        let cbor = Format::from_static("application/cbor");
        assert!(!JsonCodec.supports(&cbor));

        let result = JsonCodec.decode(&Bytes::from_static(b"{}"), &cbor);
        assert!(matches!(result, Err(Error::UnsupportedFormat(_))));

        let result = JsonCodec.encode(&Mappings::new(), &cbor);
        assert!(matches!(result, Err(Error::UnsupportedFormat(_))));
    }
}
