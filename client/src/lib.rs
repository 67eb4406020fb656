//! # Larder Client
//! Keeps a read-only mirror of the player's food history ledger in sync
//! with a larder server.

#![deny(
    trivial_casts,
    trivial_numeric_casts,
    unstable_features,
    unused_import_braces
)]

pub mod shared {
    pub use larder_shared::{
        FoodConfig, FoodEaten, FoodGroup, FoodHistory, FoodStats, FoodValues, HistoryWindow,
        ItemId, PacketReceiver, PacketSender, Protocol, TransportError,
    };
}

mod client;
mod client_config;
mod error;
mod events;
mod mirror;

pub use client::Client;
pub use client_config::ClientConfig;
pub use error::LarderClientError;
pub use events::{ClientEvent, ClientEvents, ErrorEvent, HealthEvent, SyncEvent};
pub use mirror::Mirror;
