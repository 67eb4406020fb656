use crate::{messages::sync_message::SyncMessage, types::HostType};

/// Who a dispatched message came from.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MessageContext<P> {
    /// The side that sent the message
    pub origin: HostType,
    /// The remote peer, as the receiving side identifies it
    pub peer: P,
}

impl<P> MessageContext<P> {
    pub fn new(origin: HostType, peer: P) -> Self {
        Self { origin, peer }
    }
}

/// Receives messages that passed the direction check in
/// `MessageKinds::dispatch`. A returned message is sent back to the peer.
pub trait MessageHandler<P> {
    fn handle(&mut self, context: &MessageContext<P>, message: SyncMessage) -> Option<SyncMessage>;
}
