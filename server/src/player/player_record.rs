use larder_shared::{BaseConnection, FoodHistory, FoodStats, PlayerData};

use crate::player::{food_container::FoodContainer, health_sync::HealthSyncState};

/// Everything the Server holds for one connected player
pub struct PlayerRecord {
    pub(crate) connection: BaseConnection,
    pub(crate) ledger: Option<FoodHistory>,
    pub(crate) data: PlayerData,
    pub(crate) stats: FoodStats,
    pub(crate) health_sync: HealthSyncState,
    pub(crate) container: Option<FoodContainer>,
}

impl PlayerRecord {
    pub fn new(connection: BaseConnection) -> Self {
        Self {
            connection,
            ledger: None,
            data: PlayerData::new(),
            stats: FoodStats::default(),
            health_sync: HealthSyncState::new(),
            container: None,
        }
    }
}
