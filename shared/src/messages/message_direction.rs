use crate::types::HostType;

/// Which side of a connection may send a message kind.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MessageDirection {
    ServerToClient,
    ClientToServer,
    Bidirectional,
}

impl MessageDirection {
    pub fn can_send_to_server(&self) -> bool {
        match self {
            MessageDirection::ServerToClient => false,
            MessageDirection::ClientToServer => true,
            MessageDirection::Bidirectional => true,
        }
    }

    pub fn can_send_to_client(&self) -> bool {
        match self {
            MessageDirection::ServerToClient => true,
            MessageDirection::ClientToServer => false,
            MessageDirection::Bidirectional => true,
        }
    }

    /// Whether a host of type `sender` is allowed to originate this kind
    pub fn can_send_from(&self, sender: HostType) -> bool {
        match sender {
            HostType::Server => self.can_send_to_client(),
            HostType::Client => self.can_send_to_server(),
        }
    }

    /// Whether a host of type `receiver` is allowed to accept this kind
    pub fn can_receive_at(&self, receiver: HostType) -> bool {
        self.can_send_from(receiver.invert())
    }
}
