use larder_serde::{BitReader, BitWrite, Serde, SerdeErr};

use crate::food::item::ItemId;

/// A named set of foods. Foods sharing a regular group count as the same
/// food in a history. Foods in a blacklisted group are never recorded.
#[derive(Clone, Debug, PartialEq)]
pub struct FoodGroup {
    identifier: String,
    name: String,
    blacklist: bool,
    items: Vec<ItemId>,
}

impl FoodGroup {
    pub fn new(identifier: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            identifier: identifier.into(),
            name: name.into(),
            blacklist: false,
            items: Vec::new(),
        }
    }

    pub fn blacklisted(mut self) -> Self {
        self.blacklist = true;
        self
    }

    pub fn with_item(mut self, item: ItemId) -> Self {
        self.items.push(item);
        self
    }

    pub fn identifier(&self) -> &str {
        &self.identifier
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn is_blacklist(&self) -> bool {
        self.blacklist
    }

    pub fn items(&self) -> &[ItemId] {
        &self.items
    }

    pub fn contains(&self, item: &ItemId) -> bool {
        self.items.iter().any(|member| member.matches(item))
    }
}

impl Serde for FoodGroup {
    fn ser(&self, writer: &mut dyn BitWrite) {
        self.identifier.ser(writer);
        self.name.ser(writer);
        self.blacklist.ser(writer);
        self.items.ser(writer);
    }

    fn de(reader: &mut BitReader) -> Result<Self, SerdeErr> {
        Ok(Self {
            identifier: String::de(reader)?,
            name: String::de(reader)?,
            blacklist: bool::de(reader)?,
            items: Vec::<ItemId>::de(reader)?,
        })
    }
}

/// All food groups known to one side, in registration order. Groups are
/// keyed by identifier; registering an existing identifier replaces it.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FoodGroupRegistry {
    groups: Vec<FoodGroup>,
}

impl FoodGroupRegistry {
    pub fn new() -> Self {
        Self { groups: Vec::new() }
    }

    pub fn from_groups(groups: Vec<FoodGroup>) -> Self {
        let mut registry = Self::new();
        for group in groups {
            registry.register(group);
        }
        registry
    }

    pub fn register(&mut self, group: FoodGroup) {
        match self
            .groups
            .iter_mut()
            .find(|existing| existing.identifier == group.identifier)
        {
            Some(existing) => *existing = group,
            None => self.groups.push(group),
        }
    }

    pub fn get(&self, identifier: &str) -> Option<&FoodGroup> {
        self.groups
            .iter()
            .find(|group| group.identifier == identifier)
    }

    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    pub fn groups(&self) -> &[FoodGroup] {
        &self.groups
    }

    pub fn clear(&mut self) {
        self.groups.clear();
    }

    /// Regular (non-blacklist) groups containing `item`
    pub fn groups_for<'r>(&'r self, item: &'r ItemId) -> impl Iterator<Item = &'r FoodGroup> {
        self.groups
            .iter()
            .filter(move |group| !group.blacklist && group.contains(item))
    }

    pub fn is_blacklisted(&self, item: &ItemId) -> bool {
        self.groups
            .iter()
            .any(|group| group.blacklist && group.contains(item))
    }

    /// Whether two items count as the same food: the same item, or members
    /// of a common regular group
    pub fn same_food(&self, a: &ItemId, b: &ItemId) -> bool {
        a.matches(b) || self.groups_for(a).any(|group| group.contains(b))
    }
}
