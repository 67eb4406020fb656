//! # Larder Shared
//! The food history ledger, its sync messages and the dispatch registry,
//! shared between larder-server & larder-client.

#![deny(trivial_numeric_casts, unstable_features, unused_import_braces)]

pub use larder_serde::{
    BitReader, BitWrite, BitWriter, ConstBitLength, Serde, SerdeErr, SignedVariableInteger,
    UnsignedInteger, UnsignedVariableInteger,
};

mod config;
mod connection;
mod food;
mod messages;
mod protocol;
mod save;
mod transport;
mod types;

pub use config::{FoodConfig, HistoryWindow};
pub use connection::base_connection::BaseConnection;
pub use food::{
    food_eaten::FoodEaten,
    group::{FoodGroup, FoodGroupRegistry},
    history::{FoodHistory, SaveScope},
    item::{FoodValues, ItemId},
    queue::FoodQueue,
    stats::FoodStats,
};
pub use messages::{
    dispatch::{MessageContext, MessageHandler},
    error::{DispatchError, MessageError, MessageKindsError},
    message_direction::MessageDirection,
    message_kind::MessageKind,
    message_kinds::MessageKinds,
    sync_message::{FoodHistorySync, SyncMessage},
};
pub use protocol::{FoodSyncPlugin, Protocol, ProtocolError, ProtocolPlugin};
pub use save::{
    document::{Document, Value, MAX_DOCUMENT_DEPTH},
    error::PersistError,
    player_data::PlayerData,
};
pub use transport::{PacketReceiver, PacketSender, TransportError};
pub use types::{HostType, Tick};
