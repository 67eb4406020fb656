use std::default::Default;

use larder_shared::FoodConfig;

/// Contains Config properties which will be used by a Client
#[derive(Clone, Debug, Default)]
pub struct ClientConfig {
    /// Gameplay settings used while no server has sent its own, and again
    /// after disconnecting
    pub local_food: FoodConfig,
}
