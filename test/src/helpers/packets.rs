use larder_client::{ClientEvents, SyncEvent};
use larder_shared::{BitWriter, MessageKind, Protocol, SyncMessage};

/// Encodes `message` without checking who is allowed to send it, for
/// forging packets from the wrong side
pub fn raw_packet(message: &SyncMessage) -> Box<[u8]> {
    let protocol = Protocol::food_sync();
    let mut writer = BitWriter::new();
    protocol
        .message_kinds
        .write(&mut writer, message)
        .expect("food sync protocol registers every kind");
    writer.to_bytes()
}

/// Kinds of every sync message a client applied, in arrival order
pub fn sync_kinds(events: &mut ClientEvents) -> Vec<MessageKind> {
    events.read::<SyncEvent>().collect()
}
