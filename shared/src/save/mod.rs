pub mod document;
pub mod error;
pub mod player_data;
