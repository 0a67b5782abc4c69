//! Error types for the document layer.

use crate::format::Format;

/// Errors raised by stores and codecs.
///
/// Decoding a schema object from a document never produces one of these;
/// they come from moving documents in and out of a store.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// Codec failed to decode bytes into mappings.
    #[error("decode error ({format}): {message}")]
    Decode { format: Format, message: String },

    /// Codec failed to encode mappings into bytes.
    #[error("encode error ({format}): {message}")]
    Encode { format: Format, message: String },

    /// Format not supported by codec.
    #[error("unsupported format: {0}")]
    UnsupportedFormat(Format),

    /// A document key was rejected by the store.
    #[error("invalid key '{key}': {message}")]
    InvalidKey { key: String, message: String },

    /// Generic error with message.
    #[error("{message}")]
    Other { message: String },
}

impl Error {
    pub fn decode(format: Format, message: impl Into<String>) -> Self {
        Error::Decode {
            format,
            message: message.into(),
        }
    }

    pub fn encode(format: Format, message: impl Into<String>) -> Self {
        Error::Encode {
            format,
            message: message.into(),
        }
    }

    pub fn invalid_key(key: impl Into<String>, message: impl Into<String>) -> Self {
        Error::InvalidKey {
            key: key.into(),
            message: message.into(),
        }
    }
}
