use larder_serde::{BitReader, BitWrite, Serde, SerdeErr};

use crate::{
    food::item::{FoodValues, ItemId},
    types::Tick,
};

/// A single entry in a food history. Never changes once recorded.
#[derive(Clone, Debug, PartialEq)]
pub struct FoodEaten {
    item: ItemId,
    values: FoodValues,
    eaten_at: Tick,
}

impl FoodEaten {
    pub fn new(item: ItemId, values: FoodValues) -> Self {
        Self {
            item,
            values,
            eaten_at: 0,
        }
    }

    /// Stamp the ledger's active tick. Only the ledger calls this, right
    /// before the record is stored.
    pub(crate) fn stamped(mut self, tick: Tick) -> Self {
        self.eaten_at = tick;
        self
    }

    pub fn item(&self) -> &ItemId {
        &self.item
    }

    pub fn values(&self) -> &FoodValues {
        &self.values
    }

    pub fn eaten_at(&self) -> Tick {
        self.eaten_at
    }
}

impl Serde for FoodEaten {
    fn ser(&self, writer: &mut dyn BitWrite) {
        self.item.ser(writer);
        self.values.ser(writer);
        self.eaten_at.ser(writer);
    }

    fn de(reader: &mut BitReader) -> Result<Self, SerdeErr> {
        Ok(Self {
            item: ItemId::de(reader)?,
            values: FoodValues::de(reader)?,
            eaten_at: Tick::de(reader)?,
        })
    }
}
