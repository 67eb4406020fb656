pub mod food_eaten;
pub mod group;
pub mod history;
pub mod item;
pub mod queue;
pub mod stats;
