use thiserror::Error;

/// Returned when a reader runs out of bits or meets a value it cannot decode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("Failed to deserialize value from bit stream. The payload is truncated or malformed")]
pub struct SerdeErr;
