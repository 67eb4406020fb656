pub mod packets;

pub use fixtures::{apple, bread, carrot, cookie, food, grain_group, inedible_group};
pub use packets::{raw_packet, sync_kinds};
