use larder_serde::{BitReader, BitWrite, Serde, SerdeErr, UnsignedInteger};

use crate::types::Tick;

/// How the rolling part of a food history is bounded.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HistoryWindow {
    /// Keep the last `n` foods eaten
    Count(u32),
    /// Keep the newest foods whose summed hunger value fits in `n`
    Hunger(u32),
    /// Keep foods eaten within the last `n` active ticks
    Time(Tick),
}

impl Serde for HistoryWindow {
    fn ser(&self, writer: &mut dyn BitWrite) {
        match self {
            HistoryWindow::Count(limit) => {
                UnsignedInteger::<2>::new(0).ser(writer);
                limit.ser(writer);
            }
            HistoryWindow::Hunger(limit) => {
                UnsignedInteger::<2>::new(1).ser(writer);
                limit.ser(writer);
            }
            HistoryWindow::Time(limit) => {
                UnsignedInteger::<2>::new(2).ser(writer);
                limit.ser(writer);
            }
        }
    }

    fn de(reader: &mut BitReader) -> Result<Self, SerdeErr> {
        match UnsignedInteger::<2>::de(reader)?.get() {
            0 => Ok(HistoryWindow::Count(u32::de(reader)?)),
            1 => Ok(HistoryWindow::Hunger(u32::de(reader)?)),
            2 => Ok(HistoryWindow::Time(Tick::de(reader)?)),
            _ => Err(SerdeErr),
        }
    }
}

/// Gameplay settings owned by the server and mirrored to every client on
/// login.
#[derive(Clone, Debug, PartialEq)]
pub struct FoodConfig {
    /// Bounds the rolling window of recently eaten foods
    pub window: HistoryWindow,
    /// All-time food count at which food history starts to matter
    pub food_eaten_threshold: u32,
    /// Every time the number of distinct foods eaten reaches a multiple of
    /// this, a milestone is reported. Zero disables milestones.
    pub distinct_food_milestone: u32,
    /// Whether the rolling window survives death, in addition to the
    /// all-time counters
    pub history_persists_through_death: bool,
}

impl Default for FoodConfig {
    fn default() -> Self {
        Self {
            window: HistoryWindow::Count(12),
            food_eaten_threshold: 6,
            distinct_food_milestone: 5,
            history_persists_through_death: false,
        }
    }
}

impl Serde for FoodConfig {
    fn ser(&self, writer: &mut dyn BitWrite) {
        self.window.ser(writer);
        self.food_eaten_threshold.ser(writer);
        self.distinct_food_milestone.ser(writer);
        self.history_persists_through_death.ser(writer);
    }

    fn de(reader: &mut BitReader) -> Result<Self, SerdeErr> {
        Ok(Self {
            window: HistoryWindow::de(reader)?,
            food_eaten_threshold: u32::de(reader)?,
            distinct_food_milestone: u32::de(reader)?,
            history_persists_through_death: bool::de(reader)?,
        })
    }
}
