use std::default::Default;

use larder_shared::FoodConfig;

/// Contains Config properties which will be used by the Server
#[derive(Clone, Debug)]
pub struct ServerConfig {
    /// Gameplay settings, sent to every client on login
    pub food: FoodConfig,
    /// Whether to push saturation changes to clients every tick. The host
    /// game only syncs saturation once it reaches zero.
    pub sync_saturation: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            food: FoodConfig::default(),
            sync_saturation: true,
        }
    }
}
