//! # Larder Server
//! The authoritative side of larder. Owns every player's food history
//! ledger, reacts to the host's lifecycle events, and keeps each client's
//! mirror in sync.

#![deny(
    trivial_casts,
    trivial_numeric_casts,
    unstable_features,
    unused_import_braces
)]

pub mod shared {
    pub use larder_shared::{
        FoodConfig, FoodEaten, FoodGroup, FoodHistory, FoodStats, FoodValues, HistoryWindow,
        ItemId, PacketReceiver, PacketSender, PlayerData, Protocol, TransportError,
    };
}

mod error;
mod events;
mod handler;
mod player;
mod server;

pub use error::LarderServerError;
pub use events::{ErrorEvent, ServerEvent, ServerEvents, ToggleContainerEvent};
pub use player::{food_container::FoodContainer, health_sync::HealthSyncState, player_key::PlayerKey};
pub use server::{Server, ServerConfig};
