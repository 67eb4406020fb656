pub mod food_container;
pub mod health_sync;
pub mod player_key;
pub mod player_record;
