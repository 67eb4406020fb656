use larder_serde::SerdeErr;
use thiserror::Error;

use crate::{messages::message_kind::MessageKind, transport::TransportError, types::HostType};

/// Errors that can occur during message kind operations
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MessageKindsError {
    /// Network ID not found in registry
    #[error("Network ID {net_id} not found in message registry. Message kind must be registered with Protocol via add_message()")]
    NetIdNotFound { net_id: u16 },

    /// Message kind not found in registry
    #[error("Message kind {kind} not found in registry. Message kind must be registered with Protocol via add_message()")]
    MessageKindNotFound { kind: MessageKind },
}

/// Errors that can occur while routing a decoded message to its handler
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DispatchError {
    /// Message kind is not registered with the protocol in use
    #[error("Cannot dispatch {kind}: it is not registered with this Protocol")]
    UnregisteredKind { kind: MessageKind },

    /// Message arrived from a side that is not allowed to send it
    #[error("Rejected {kind} sent by {origin:?}. Its registered direction does not permit that sender")]
    WrongSide { kind: MessageKind, origin: HostType },
}

/// General message-level errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MessageError {
    /// Message kinds error
    #[error("Message kinds error: {0}")]
    MessageKinds(#[from] MessageKindsError),

    /// Local host tried to send a kind it is not allowed to send
    #[error("{host:?} is not allowed to send {kind}. Check the direction it was registered with")]
    WrongSide { kind: MessageKind, host: HostType },

    /// Payload could not be decoded
    #[error("Failed to decode message payload: {0}")]
    Serde(#[from] SerdeErr),

    /// Dispatch error
    #[error("Dispatch error: {0}")]
    Dispatch(#[from] DispatchError),

    /// Transport error
    #[error("Transport error: {0}")]
    Transport(#[from] TransportError),
}
