use larder_serde::{BitReader, BitWrite, Serde, SerdeErr};

/// The host's live hunger state for one player, as shown on the client's HUD.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct FoodStats {
    pub health: f32,
    pub food_level: u32,
    pub saturation: f32,
}

impl FoodStats {
    pub fn new(health: f32, food_level: u32, saturation: f32) -> Self {
        Self {
            health,
            food_level,
            saturation,
        }
    }
}

impl Serde for FoodStats {
    fn ser(&self, writer: &mut dyn BitWrite) {
        self.health.ser(writer);
        self.food_level.ser(writer);
        self.saturation.ser(writer);
    }

    fn de(reader: &mut BitReader) -> Result<Self, SerdeErr> {
        Ok(Self {
            health: f32::de(reader)?,
            food_level: u32::de(reader)?,
            saturation: f32::de(reader)?,
        })
    }
}
