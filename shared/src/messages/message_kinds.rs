use std::collections::HashMap;

use larder_serde::{BitReader, BitWrite, BitWriter, Serde, UnsignedVariableInteger};
use log::warn;

use crate::{
    messages::{
        dispatch::{MessageContext, MessageHandler},
        error::{DispatchError, MessageError, MessageKindsError},
        message_direction::MessageDirection,
        message_kind::MessageKind,
        sync_message::SyncMessage,
    },
    types::HostType,
};

type NetId = u16;

/// A map to hold all message kinds, their wire ids and who may send them
#[derive(Clone, Debug, Default)]
pub struct MessageKinds {
    current_net_id: NetId,
    kind_map: HashMap<MessageKind, (NetId, MessageDirection)>,
    net_id_map: HashMap<NetId, MessageKind>,
}

impl MessageKinds {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `kind` under the next free net id. Returns false, leaving
    /// the registry unchanged, if `kind` is already registered.
    pub fn add_message(&mut self, kind: MessageKind, direction: MessageDirection) -> bool {
        if self.kind_map.contains_key(&kind) {
            return false;
        }
        let net_id = self.current_net_id;
        self.kind_map.insert(kind, (net_id, direction));
        self.net_id_map.insert(net_id, kind);
        self.current_net_id += 1;
        true
    }

    pub fn len(&self) -> usize {
        self.kind_map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.kind_map.is_empty()
    }

    pub fn contains(&self, kind: &MessageKind) -> bool {
        self.kind_map.contains_key(kind)
    }

    pub fn try_net_id_to_kind(&self, net_id: &NetId) -> Result<MessageKind, MessageKindsError> {
        self.net_id_map
            .get(net_id)
            .copied()
            .ok_or(MessageKindsError::NetIdNotFound { net_id: *net_id })
    }

    pub fn try_kind_to_net_id(&self, kind: &MessageKind) -> Result<NetId, MessageKindsError> {
        self.kind_map
            .get(kind)
            .map(|(net_id, _)| *net_id)
            .ok_or(MessageKindsError::MessageKindNotFound { kind: *kind })
    }

    pub fn try_direction(&self, kind: &MessageKind) -> Result<MessageDirection, MessageKindsError> {
        self.kind_map
            .get(kind)
            .map(|(_, direction)| *direction)
            .ok_or(MessageKindsError::MessageKindNotFound { kind: *kind })
    }

    /// Writes `[net id][payload]`. Fails if the kind is unregistered.
    pub fn write(&self, writer: &mut dyn BitWrite, message: &SyncMessage) -> Result<(), MessageKindsError> {
        let net_id = self.try_kind_to_net_id(&message.kind())?;
        UnsignedVariableInteger::<3>::new(net_id).ser(writer);
        message.write_payload(writer);
        Ok(())
    }

    pub fn read(&self, reader: &mut BitReader) -> Result<SyncMessage, MessageError> {
        let net_id: NetId = UnsignedVariableInteger::<3>::de(reader)?.to()?;
        let kind = self.try_net_id_to_kind(&net_id)?;
        Ok(SyncMessage::read_payload(kind, reader)?)
    }

    /// Checks that `sender` may originate `message`, then encodes it
    pub fn encode(&self, sender: HostType, message: &SyncMessage) -> Result<Box<[u8]>, MessageError> {
        let kind = message.kind();
        if !self.try_direction(&kind)?.can_send_from(sender) {
            return Err(MessageError::WrongSide { kind, host: sender });
        }
        let mut writer = BitWriter::new();
        self.write(&mut writer, message)?;
        Ok(writer.to_bytes())
    }

    pub fn decode(&self, bytes: &[u8]) -> Result<SyncMessage, MessageError> {
        let mut reader = BitReader::new(bytes);
        self.read(&mut reader)
    }

    /// Routes `message` to `handler` if its kind is registered and its
    /// direction allows `context.origin` to send it. The handler is never
    /// invoked otherwise.
    pub fn dispatch<P, H: MessageHandler<P>>(
        &self,
        handler: &mut H,
        context: &MessageContext<P>,
        message: SyncMessage,
    ) -> Result<Option<SyncMessage>, DispatchError> {
        let kind = message.kind();
        let Some((_, direction)) = self.kind_map.get(&kind) else {
            return Err(DispatchError::UnregisteredKind { kind });
        };
        if !direction.can_send_from(context.origin) {
            warn!("Dropping {} from {:?}: wrong side", kind, context.origin);
            return Err(DispatchError::WrongSide {
                kind,
                origin: context.origin,
            });
        }
        Ok(handler.handle(context, message))
    }
}
