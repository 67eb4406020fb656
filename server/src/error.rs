use thiserror::Error;

use larder_shared::{DispatchError, MessageError, PersistError};

use crate::PlayerKey;

/// Errors surfaced by the Server, either returned directly or delivered as
/// an `ErrorEvent` from `Server::receive()`
#[derive(Debug, PartialEq, Error)]
pub enum LarderServerError {
    /// Operation named a player that is not connected
    #[error("Player {player:?} is not connected to this Server")]
    UnknownPlayer { player: PlayerKey },

    /// Player exists but no ledger has been allocated for it yet
    #[error("Player {player:?} has no food history. OnEntityCreated or OnPlayerLogin must run first")]
    NoLedger { player: PlayerKey },

    /// A message to the player could not be sent and is lost
    #[error("Failed to send to player {player:?}: {error}")]
    Send {
        player: PlayerKey,
        error: MessageError,
    },

    /// A packet from the player could not be received or decoded
    #[error("Failed to receive from player {player:?}: {error}")]
    Receive {
        player: PlayerKey,
        error: MessageError,
    },

    /// A message from the player was refused before reaching its handler
    #[error("Rejected message from player {player:?}: {error}")]
    Dispatch {
        player: PlayerKey,
        error: DispatchError,
    },

    /// Saved state for the player could not be read back
    #[error("Failed to load saved food history for player {player:?}: {error}")]
    Persist {
        player: PlayerKey,
        error: PersistError,
    },
}
