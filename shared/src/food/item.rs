use std::fmt;

use larder_serde::{BitReader, BitWrite, Serde, SerdeErr};

/// Identity of an item: its registry name plus a metadata value that
/// distinguishes variants sharing a name.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ItemId {
    name: String,
    meta: u16,
}

impl ItemId {
    /// Metadata value that matches every variant of an item
    pub const WILDCARD_META: u16 = u16::MAX;

    pub fn new(name: impl Into<String>, meta: u16) -> Self {
        Self {
            name: name.into(),
            meta,
        }
    }

    /// An item with metadata zero
    pub fn named(name: impl Into<String>) -> Self {
        Self::new(name, 0)
    }

    pub fn wildcard(name: impl Into<String>) -> Self {
        Self::new(name, Self::WILDCARD_META)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn meta(&self) -> u16 {
        self.meta
    }

    pub fn is_wildcard(&self) -> bool {
        self.meta == Self::WILDCARD_META
    }

    /// True when `other` is this item, or this item is a wildcard with the
    /// same name
    pub fn matches(&self, other: &ItemId) -> bool {
        self.name == other.name
            && (self.meta == other.meta || self.is_wildcard() || other.is_wildcard())
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_wildcard() {
            write!(f, "{}:*", self.name)
        } else {
            write!(f, "{}:{}", self.name, self.meta)
        }
    }
}

impl Serde for ItemId {
    fn ser(&self, writer: &mut dyn BitWrite) {
        self.name.ser(writer);
        self.meta.ser(writer);
    }

    fn de(reader: &mut BitReader) -> Result<Self, SerdeErr> {
        Ok(Self {
            name: String::de(reader)?,
            meta: u16::de(reader)?,
        })
    }
}

/// What one serving of a food restores.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FoodValues {
    pub hunger: u32,
    pub saturation_modifier: f32,
}

impl FoodValues {
    pub fn new(hunger: u32, saturation_modifier: f32) -> Self {
        Self {
            hunger,
            saturation_modifier,
        }
    }

    /// Saturation restored, as the host computes it
    pub fn saturation(&self) -> f32 {
        self.hunger as f32 * self.saturation_modifier * 2.0
    }
}

impl Serde for FoodValues {
    fn ser(&self, writer: &mut dyn BitWrite) {
        self.hunger.ser(writer);
        self.saturation_modifier.ser(writer);
    }

    fn de(reader: &mut BitReader) -> Result<Self, SerdeErr> {
        Ok(Self {
            hunger: u32::de(reader)?,
            saturation_modifier: f32::de(reader)?,
        })
    }
}
