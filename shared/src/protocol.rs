use crate::messages::{
    message_direction::MessageDirection, message_kind::MessageKind, message_kinds::MessageKinds,
};

pub mod error;
pub use error::ProtocolError;

// Protocol Plugin
pub trait ProtocolPlugin {
    fn build(&self, protocol: &mut Protocol);
}

/// Registers every food sync message in declaration order, so that each
/// kind's wire ordinal is its position in [`MessageKind::ALL`]
pub struct FoodSyncPlugin;

impl FoodSyncPlugin {
    /// The only direction a server and client built from this crate can
    /// handle `kind` in
    pub fn direction_of(kind: MessageKind) -> MessageDirection {
        match kind {
            MessageKind::ToggleFoodContainer => MessageDirection::ClientToServer,
            _ => MessageDirection::ServerToClient,
        }
    }
}

impl ProtocolPlugin for FoodSyncPlugin {
    fn build(&self, protocol: &mut Protocol) {
        for kind in MessageKind::ALL {
            protocol.add_message(kind, Self::direction_of(kind));
        }
    }
}

// Protocol
#[derive(Clone, Debug, Default)]
pub struct Protocol {
    pub message_kinds: MessageKinds,
    locked: bool,
}

impl Protocol {
    pub fn builder() -> Self {
        Self::default()
    }

    /// The protocol both sides use unless a host needs something custom
    pub fn food_sync() -> Self {
        let mut protocol = Self::builder();
        protocol.add_plugin(FoodSyncPlugin);
        protocol.build()
    }

    pub fn add_plugin<P: ProtocolPlugin>(&mut self, plugin: P) -> &mut Self {
        self.check_lock();
        plugin.build(self);
        self
    }

    pub fn add_message(&mut self, kind: MessageKind, direction: MessageDirection) -> &mut Self {
        self.check_lock();
        if !self.message_kinds.add_message(kind, direction) {
            panic!("Message kind {} registered twice!", kind);
        }
        self
    }

    // Non-panicking builder methods

    pub fn try_add_plugin<P: ProtocolPlugin>(&mut self, plugin: P) -> Result<&mut Self, ProtocolError> {
        self.try_check_lock()?;
        plugin.build(self);
        Ok(self)
    }

    pub fn try_add_message(
        &mut self,
        kind: MessageKind,
        direction: MessageDirection,
    ) -> Result<&mut Self, ProtocolError> {
        self.try_check_lock()?;
        if !self.message_kinds.add_message(kind, direction) {
            return Err(ProtocolError::DuplicateKind { kind });
        }
        Ok(self)
    }

    pub fn try_lock(&mut self) -> Result<(), ProtocolError> {
        self.try_check_lock()?;
        self.locked = true;
        Ok(())
    }

    pub fn lock(&mut self) {
        self.check_lock();
        self.locked = true;
    }

    pub fn is_locked(&self) -> bool {
        self.locked
    }

    /// Checks if protocol is locked without panicking
    /// Returns Err if protocol is locked
    pub fn try_check_lock(&self) -> Result<(), ProtocolError> {
        if self.locked {
            Err(ProtocolError::AlreadyLocked)
        } else {
            Ok(())
        }
    }

    /// Checks if protocol is locked, panics if it is
    pub fn check_lock(&self) {
        if self.locked {
            panic!("Protocol already locked!");
        }
    }

    /// Checks that every food sync kind is registered in the direction
    /// [`FoodSyncPlugin`] gives it. Returns the first mismatch found.
    pub fn try_check_complete(&self) -> Result<(), ProtocolError> {
        for kind in MessageKind::ALL {
            let expected = FoodSyncPlugin::direction_of(kind);
            match self.message_kinds.try_direction(&kind) {
                Ok(found) if found == expected => {}
                Ok(found) => {
                    return Err(ProtocolError::WrongDirection {
                        kind,
                        expected,
                        found,
                    })
                }
                Err(_) => return Err(ProtocolError::MissingKind { kind }),
            }
        }
        Ok(())
    }

    /// Checks that the protocol can carry every food sync message, panics if
    /// it cannot
    pub fn check_complete(&self) {
        if let Err(error) = self.try_check_complete() {
            panic!("Incomplete protocol: {}", error);
        }
    }

    pub fn build(&mut self) -> Self {
        std::mem::take(self)
    }
}
