use thiserror::Error;

use crate::messages::{message_direction::MessageDirection, message_kind::MessageKind};

/// Errors that can occur during protocol operations
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ProtocolError {
    /// Protocol is locked and cannot be modified
    #[error("Protocol is already locked and cannot be modified. Protocol.lock() has been called and no further changes are allowed")]
    AlreadyLocked,

    /// Message kind registered more than once
    #[error("Message kind {kind} is already registered with this Protocol. Each kind may only be added once")]
    DuplicateKind { kind: MessageKind },

    /// A food sync kind the server and client exchange was never registered
    #[error("Message kind {kind} is not registered with this Protocol. Servers and clients need every food sync kind, add FoodSyncPlugin")]
    MissingKind { kind: MessageKind },

    /// A food sync kind was registered with a direction the handlers do not use
    #[error("Message kind {kind} is registered as {found:?} but must be {expected:?}")]
    WrongDirection {
        kind: MessageKind,
        expected: MessageDirection,
        found: MessageDirection,
    },
}
