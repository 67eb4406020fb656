use std::fmt;

/// Every kind of message the food sync protocol knows about. The order here
/// is the order the default protocol registers them in, and so their wire
/// ordinals.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum MessageKind {
    ConfigSync,
    FoodHistorySync,
    FoodEatenAllTimeSync,
    ToggleFoodContainer,
    FoodGroupSync,
    PlayerHealthSync,
}

impl MessageKind {
    pub const ALL: [MessageKind; 6] = [
        MessageKind::ConfigSync,
        MessageKind::FoodHistorySync,
        MessageKind::FoodEatenAllTimeSync,
        MessageKind::ToggleFoodContainer,
        MessageKind::FoodGroupSync,
        MessageKind::PlayerHealthSync,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            MessageKind::ConfigSync => "ConfigSync",
            MessageKind::FoodHistorySync => "FoodHistorySync",
            MessageKind::FoodEatenAllTimeSync => "FoodEatenAllTimeSync",
            MessageKind::ToggleFoodContainer => "ToggleFoodContainer",
            MessageKind::FoodGroupSync => "FoodGroupSync",
            MessageKind::PlayerHealthSync => "PlayerHealthSync",
        }
    }
}

impl fmt::Display for MessageKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
