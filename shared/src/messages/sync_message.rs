use larder_serde::{BitReader, BitWrite, Serde, SerdeErr};

use crate::{
    config::FoodConfig,
    food::{food_eaten::FoodEaten, group::FoodGroup, history::FoodHistory, stats::FoodStats},
    messages::message_kind::MessageKind,
};

/// A food history update. Full replaces the receiver's mirror, incremental
/// appends one record to it.
#[derive(Clone, Debug, PartialEq)]
pub enum FoodHistorySync {
    Full(FoodHistory),
    Incremental(FoodEaten),
}

impl Serde for FoodHistorySync {
    fn ser(&self, writer: &mut dyn BitWrite) {
        match self {
            FoodHistorySync::Full(history) => {
                true.ser(writer);
                history.ser(writer);
            }
            FoodHistorySync::Incremental(food) => {
                false.ser(writer);
                food.ser(writer);
            }
        }
    }

    fn de(reader: &mut BitReader) -> Result<Self, SerdeErr> {
        if bool::de(reader)? {
            Ok(FoodHistorySync::Full(FoodHistory::de(reader)?))
        } else {
            Ok(FoodHistorySync::Incremental(FoodEaten::de(reader)?))
        }
    }
}

/// Every message that crosses the wire, one variant per [`MessageKind`].
#[derive(Clone, Debug, PartialEq)]
pub enum SyncMessage {
    ConfigSync(FoodConfig),
    FoodHistorySync(FoodHistorySync),
    FoodEatenAllTimeSync(u32),
    ToggleFoodContainer,
    FoodGroupSync(Vec<FoodGroup>),
    PlayerHealthSync(FoodStats),
}

impl SyncMessage {
    pub fn kind(&self) -> MessageKind {
        match self {
            SyncMessage::ConfigSync(_) => MessageKind::ConfigSync,
            SyncMessage::FoodHistorySync(_) => MessageKind::FoodHistorySync,
            SyncMessage::FoodEatenAllTimeSync(_) => MessageKind::FoodEatenAllTimeSync,
            SyncMessage::ToggleFoodContainer => MessageKind::ToggleFoodContainer,
            SyncMessage::FoodGroupSync(_) => MessageKind::FoodGroupSync,
            SyncMessage::PlayerHealthSync(_) => MessageKind::PlayerHealthSync,
        }
    }

    /// Writes the payload only. The kind's ordinal is written by
    /// `MessageKinds::write`.
    pub fn write_payload(&self, writer: &mut dyn BitWrite) {
        match self {
            SyncMessage::ConfigSync(config) => config.ser(writer),
            SyncMessage::FoodHistorySync(sync) => sync.ser(writer),
            SyncMessage::FoodEatenAllTimeSync(total) => total.ser(writer),
            SyncMessage::ToggleFoodContainer => {}
            SyncMessage::FoodGroupSync(groups) => groups.ser(writer),
            SyncMessage::PlayerHealthSync(stats) => stats.ser(writer),
        }
    }

    pub fn read_payload(kind: MessageKind, reader: &mut BitReader) -> Result<Self, SerdeErr> {
        Ok(match kind {
            MessageKind::ConfigSync => SyncMessage::ConfigSync(FoodConfig::de(reader)?),
            MessageKind::FoodHistorySync => {
                SyncMessage::FoodHistorySync(FoodHistorySync::de(reader)?)
            }
            MessageKind::FoodEatenAllTimeSync => SyncMessage::FoodEatenAllTimeSync(u32::de(reader)?),
            MessageKind::ToggleFoodContainer => SyncMessage::ToggleFoodContainer,
            MessageKind::FoodGroupSync => SyncMessage::FoodGroupSync(Vec::<FoodGroup>::de(reader)?),
            MessageKind::PlayerHealthSync => SyncMessage::PlayerHealthSync(FoodStats::de(reader)?),
        })
    }
}
