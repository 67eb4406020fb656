pub mod dispatch;
pub mod error;
pub mod message_direction;
pub mod message_kind;
pub mod message_kinds;
pub mod sync_message;
