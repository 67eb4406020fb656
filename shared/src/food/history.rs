use std::collections::BTreeSet;

use larder_serde::{BitReader, BitWrite, Serde, SerdeErr};

use crate::{
    config::{FoodConfig, HistoryWindow},
    food::{
        food_eaten::FoodEaten,
        group::FoodGroupRegistry,
        item::{FoodValues, ItemId},
        queue::FoodQueue,
    },
    save::{
        document::{Document, Value},
        error::PersistError,
        player_data::PlayerData,
    },
    types::Tick,
};

/// Where a ledger is written to or read from within a player's save data.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SaveScope {
    /// The regular world save, holding the whole ledger
    Full,
    /// The section that survives death. Holds the all-time counters, and the
    /// rolling window only when `history_persists_through_death` is set.
    DeathPersistent,
}

/// One player's food ledger: a rolling window of recently eaten foods, the
/// set of every distinct food ever eaten, and an all-time counter.
#[derive(Clone, Debug, PartialEq)]
pub struct FoodHistory {
    recent: FoodQueue,
    distinct: BTreeSet<ItemId>,
    total_eaten_all_time: u32,
    ticks_active: Tick,
}

impl FoodHistory {
    /// Key under which the ledger is stored in a save document
    pub const TAG_KEY: &'static str = "FoodHistory";

    pub fn new(window: HistoryWindow) -> Self {
        Self {
            recent: FoodQueue::new(window),
            distinct: BTreeSet::new(),
            total_eaten_all_time: 0,
            ticks_active: 0,
        }
    }

    // Queries

    pub fn window(&self) -> HistoryWindow {
        self.recent.window()
    }

    pub fn recent(&self) -> &FoodQueue {
        &self.recent
    }

    pub fn total_eaten_all_time(&self) -> u32 {
        self.total_eaten_all_time
    }

    pub fn distinct_foods_eaten(&self) -> usize {
        self.distinct.len()
    }

    pub fn has_ever_eaten(&self, item: &ItemId) -> bool {
        self.distinct.iter().any(|eaten| eaten.matches(item))
    }

    pub fn ticks_active(&self) -> Tick {
        self.ticks_active
    }

    pub fn last_eaten(&self) -> Option<&FoodEaten> {
        self.recent.newest()
    }

    /// How many foods in the window count as `item`, either by being the
    /// same item or by sharing a food group with it
    pub fn food_count(&self, item: &ItemId, groups: &FoodGroupRegistry) -> u32 {
        self.recent
            .iter()
            .filter(|eaten| groups.same_food(item, eaten.item()))
            .count() as u32
    }

    pub fn food_count_of_last_eaten(&self, groups: &FoodGroupRegistry) -> u32 {
        match self.last_eaten() {
            Some(last) => self.food_count(last.item(), groups),
            None => 0,
        }
    }

    pub fn contains_food_or_its_groups(&self, item: &ItemId, groups: &FoodGroupRegistry) -> bool {
        self.food_count(item, groups) > 0
    }

    pub fn history_length_in_units(&self) -> u64 {
        self.recent.length_in_units(self.ticks_active)
    }

    pub fn average_hunger_restored(&self) -> f32 {
        self.average_of(|values| values.hunger as f32)
    }

    pub fn average_saturation_restored(&self) -> f32 {
        self.average_of(|values| values.saturation())
    }

    fn average_of(&self, value: impl Fn(&FoodValues) -> f32) -> f32 {
        if self.recent.is_empty() {
            return 0.0;
        }
        let sum: f32 = self.recent.iter().map(|eaten| value(eaten.values())).sum();
        sum / self.recent.len() as f32
    }

    // Mutations

    /// Stamp a freshly eaten food with this ledger's active tick. The
    /// stamped record is what gets sent and stored.
    pub fn stamp(&self, food: FoodEaten) -> FoodEaten {
        food.stamped(self.ticks_active)
    }

    /// Append a food. Returns true when the append moved a derived
    /// aggregate across a threshold: the all-time total reaching
    /// `food_eaten_threshold`, or the distinct food count reaching a
    /// multiple of `distinct_food_milestone`.
    pub fn add_food(&mut self, food: FoodEaten, config: &FoodConfig) -> bool {
        let is_new_food = self.distinct.insert(food.item().clone());
        self.total_eaten_all_time = self.total_eaten_all_time.saturating_add(1);
        self.recent.push(food, self.ticks_active);

        let reached_threshold = self.total_eaten_all_time == config.food_eaten_threshold;
        let reached_milestone = is_new_food
            && config.distinct_food_milestone > 0
            && self.distinct.len() as u32 % config.distinct_food_milestone == 0;

        reached_threshold || reached_milestone
    }

    /// Advance the active tick counter. Returns how many foods fell out of a
    /// time window as a result.
    pub fn advance_ticks(&mut self, delta: Tick) -> usize {
        self.ticks_active = self.ticks_active.saturating_add(delta);
        self.recent.trim(self.ticks_active)
    }

    /// Advance the active tick counter to `tick` if it is behind. Mirrors
    /// use this to follow the tick carried by an incremental record.
    pub fn catch_up_to(&mut self, tick: Tick) -> usize {
        if tick > self.ticks_active {
            self.advance_ticks(tick - self.ticks_active)
        } else {
            0
        }
    }

    pub fn set_total_eaten_all_time(&mut self, total: u32) {
        self.total_eaten_all_time = total;
    }

    pub fn reset(&mut self) {
        self.recent.clear();
        self.distinct.clear();
        self.total_eaten_all_time = 0;
        self.ticks_active = 0;
    }

    // Persistence

    pub fn save_state(&self, data: &mut PlayerData, scope: SaveScope, config: &FoodConfig) {
        match scope {
            SaveScope::Full => {
                data.root_mut()
                    .set(Self::TAG_KEY, Value::Compound(self.to_document(true)));
            }
            SaveScope::DeathPersistent => {
                let document = self.to_document(config.history_persists_through_death);
                data.persisted_mut()
                    .set(Self::TAG_KEY, Value::Compound(document));
            }
        }
    }

    /// Replace this ledger's contents with what `scope` holds. Returns
    /// `Ok(false)` and leaves the ledger untouched when nothing was saved.
    pub fn load_state(&mut self, data: &PlayerData, scope: SaveScope) -> Result<bool, PersistError> {
        let source = match scope {
            SaveScope::Full => data.root(),
            SaveScope::DeathPersistent => data.persisted(),
        };
        if !source.contains_key(Self::TAG_KEY) {
            return Ok(false);
        }
        let document = source.get_compound(Self::TAG_KEY)?;

        let mut loaded = Self::new(self.window());
        loaded.read_document(document)?;
        *self = loaded;
        Ok(true)
    }

    fn to_document(&self, include_recent: bool) -> Document {
        let mut document = Document::new();
        document
            .set("Total", Value::Int(i64::from(self.total_eaten_all_time)))
            .set("Ticks", Value::Int(self.ticks_active as i64))
            .set(
                "Distinct",
                Value::List(self.distinct.iter().map(item_to_value).collect()),
            );

        if include_recent {
            let recent = self
                .recent
                .iter()
                .map(|eaten| {
                    let mut entry = match item_to_value(eaten.item()) {
                        Value::Compound(entry) => entry,
                        _ => Document::new(),
                    };
                    entry
                        .set("Hunger", Value::Int(i64::from(eaten.values().hunger)))
                        .set("Saturation", Value::Float(eaten.values().saturation_modifier))
                        .set("EatenAt", Value::Int(eaten.eaten_at() as i64));
                    Value::Compound(entry)
                })
                .collect();
            document.set("Recent", Value::List(recent));
        }

        document
    }

    fn read_document(&mut self, document: &Document) -> Result<(), PersistError> {
        self.total_eaten_all_time = read_ranged(document, "Total", 0)?;
        self.ticks_active = read_ranged(document, "Ticks", 0)?;

        if document.contains_key("Distinct") {
            for value in document.get_list("Distinct")? {
                self.distinct.insert(value_to_item(value, "Distinct")?);
            }
        }

        if document.contains_key("Recent") {
            for value in document.get_list("Recent")? {
                let Value::Compound(entry) = value else {
                    return Err(PersistError::WrongType {
                        key: "Recent".to_string(),
                        expected: "compound",
                        found: "other",
                    });
                };
                let item = value_to_item(value, "Recent")?;
                let values = FoodValues::new(
                    read_ranged(entry, "Hunger", 0)?,
                    entry.get_float("Saturation")?,
                );
                let eaten_at: Tick = read_ranged(entry, "EatenAt", 0)?;
                let food = FoodEaten::new(item, values).stamped(eaten_at);
                self.recent.push(food, self.ticks_active);
            }
        }

        Ok(())
    }
}

fn item_to_value(item: &ItemId) -> Value {
    let mut entry = Document::new();
    entry
        .set("Item", Value::Text(item.name().to_string()))
        .set("Meta", Value::Int(i64::from(item.meta())));
    Value::Compound(entry)
}

fn value_to_item(value: &Value, key: &str) -> Result<ItemId, PersistError> {
    let Value::Compound(entry) = value else {
        return Err(PersistError::WrongType {
            key: key.to_string(),
            expected: "compound",
            found: "other",
        });
    };
    let name = entry.get_text("Item")?;
    let meta: u16 = read_ranged(entry, "Meta", 0)?;
    Ok(ItemId::new(name, meta))
}

fn read_ranged<T: TryFrom<i64>>(document: &Document, key: &str, default: i64) -> Result<T, PersistError> {
    let value = document.get_int_or(key, default)?;
    T::try_from(value).map_err(|_| PersistError::OutOfRange {
        key: key.to_string(),
        value,
    })
}

impl Serde for FoodHistory {
    fn ser(&self, writer: &mut dyn BitWrite) {
        self.recent.ser(writer);
        (self.distinct.len() as u64).ser(writer);
        for item in &self.distinct {
            item.ser(writer);
        }
        self.total_eaten_all_time.ser(writer);
        self.ticks_active.ser(writer);
    }

    fn de(reader: &mut BitReader) -> Result<Self, SerdeErr> {
        let recent = FoodQueue::de(reader)?;
        let distinct_count = u64::de(reader)?;
        let mut distinct = BTreeSet::new();
        for _ in 0..distinct_count {
            distinct.insert(ItemId::de(reader)?);
        }
        Ok(Self {
            recent,
            distinct,
            total_eaten_all_time: u32::de(reader)?,
            ticks_active: Tick::de(reader)?,
        })
    }
}
