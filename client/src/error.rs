use thiserror::Error;

use larder_shared::{DispatchError, MessageError};

/// Errors surfaced by the Client, either returned directly or delivered as
/// an `ErrorEvent` from `Client::receive()`
#[derive(Debug, PartialEq, Error)]
pub enum LarderClientError {
    /// The Client has disconnected and can no longer talk to the server
    #[error("Client is not connected to a server")]
    NotConnected,

    /// A message to the server could not be sent
    #[error("Failed to send to server: {0}")]
    Send(MessageError),

    /// A packet from the server could not be received or decoded
    #[error("Failed to receive from server: {0}")]
    Receive(MessageError),

    /// A message from the server was refused before reaching its handler
    #[error("Rejected message from server: {0}")]
    Dispatch(#[from] DispatchError),
}
