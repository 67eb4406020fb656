use thiserror::Error;

/// Errors that can occur while moving packets between hosts
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TransportError {
    /// The other end of the transport has gone away
    #[error("Transport is closed. The remote host disconnected or the channel was dropped")]
    Closed,

    /// The transport refused a payload
    #[error("Transport rejected a payload of {size} bytes: {reason}")]
    Rejected { size: usize, reason: String },
}

/// Outbound half of a reliable, in-order packet transport
pub trait PacketSender: Send {
    fn send(&self, payload: &[u8]) -> Result<(), TransportError>;
}

/// Inbound half of a reliable, in-order packet transport
pub trait PacketReceiver: Send {
    /// Returns the next packet, or `None` when nothing is waiting
    fn receive(&mut self) -> Result<Option<Box<[u8]>>, TransportError>;
}
