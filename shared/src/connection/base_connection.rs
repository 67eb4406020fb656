use log::debug;

use crate::{
    messages::{error::MessageError, message_kinds::MessageKinds, sync_message::SyncMessage},
    transport::{PacketReceiver, PacketSender},
    types::HostType,
};

/// Represents a connection to a remote host: the local host's role plus the
/// transport halves used to talk to it
pub struct BaseConnection {
    host_type: HostType,
    sender: Box<dyn PacketSender>,
    receiver: Box<dyn PacketReceiver>,
}

impl BaseConnection {
    pub fn new(
        host_type: HostType,
        sender: Box<dyn PacketSender>,
        receiver: Box<dyn PacketReceiver>,
    ) -> Self {
        Self {
            host_type,
            sender,
            receiver,
        }
    }

    pub fn host_type(&self) -> HostType {
        self.host_type
    }

    /// Encode `message` and hand it to the transport. Fails without sending
    /// anything if the local host may not send this kind.
    pub fn send(&self, message_kinds: &MessageKinds, message: &SyncMessage) -> Result<(), MessageError> {
        let bytes = message_kinds.encode(self.host_type, message)?;
        debug!("{:?} sending {} ({} bytes)", self.host_type, message.kind(), bytes.len());
        self.sender.send(&bytes)?;
        Ok(())
    }

    /// Drain every waiting packet, decoding each one. A transport failure
    /// ends the drain after being reported.
    pub fn receive(&mut self, message_kinds: &MessageKinds) -> Vec<Result<SyncMessage, MessageError>> {
        let mut output = Vec::new();
        loop {
            match self.receiver.receive() {
                Ok(Some(bytes)) => output.push(message_kinds.decode(&bytes)),
                Ok(None) => break,
                Err(error) => {
                    output.push(Err(error.into()));
                    break;
                }
            }
        }
        output
    }
}
