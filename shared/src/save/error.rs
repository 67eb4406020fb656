use larder_serde::SerdeErr;
use thiserror::Error;

/// Errors that can occur while reading state back out of a save document
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PersistError {
    /// A key the reader requires is absent
    #[error("Save document has no key {key:?}")]
    MissingKey { key: String },

    /// A key holds a value of an unexpected type
    #[error("Save document key {key:?} holds a {found} value, expected {expected}")]
    WrongType {
        key: String,
        expected: &'static str,
        found: &'static str,
    },

    /// A stored value is outside the range its reader accepts
    #[error("Save document key {key:?} holds out-of-range value {value}")]
    OutOfRange { key: String, value: i64 },

    /// The binary form of a document could not be decoded
    #[error("Failed to decode save document: {0}")]
    Decode(#[from] SerdeErr),
}
