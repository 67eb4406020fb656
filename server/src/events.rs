use std::vec::IntoIter;

use crate::{player::food_container::FoodContainer, LarderServerError, PlayerKey};

pub struct ServerEvents {
    toggles: Vec<(PlayerKey, FoodContainer)>,
    errors: Vec<LarderServerError>,

    empty: bool,
}

impl ServerEvents {
    pub(crate) fn new() -> Self {
        Self {
            toggles: Vec::new(),
            errors: Vec::new(),

            empty: true,
        }
    }

    // Public

    pub fn is_empty(&self) -> bool {
        self.empty
    }

    pub fn read<V: ServerEvent>(&mut self) -> V::Iter {
        V::iter(self)
    }

    pub fn has<V: ServerEvent>(&self) -> bool {
        V::has(self)
    }

    // Crate-public

    pub(crate) fn push_toggle(&mut self, player_key: &PlayerKey, container: FoodContainer) {
        self.toggles.push((*player_key, container));
        self.empty = false;
    }

    pub(crate) fn push_error(&mut self, error: LarderServerError) {
        self.errors.push(error);
        self.empty = false;
    }
}

// Event Trait
pub trait ServerEvent {
    type Iter;

    fn iter(events: &mut ServerEvents) -> Self::Iter;

    fn has(events: &ServerEvents) -> bool;
}

// ToggleContainerEvent
/// A player toggled their held food container. Yields the container's new
/// state.
pub struct ToggleContainerEvent;
impl ServerEvent for ToggleContainerEvent {
    type Iter = IntoIter<(PlayerKey, FoodContainer)>;

    fn iter(events: &mut ServerEvents) -> Self::Iter {
        let list = std::mem::take(&mut events.toggles);
        IntoIterator::into_iter(list)
    }

    fn has(events: &ServerEvents) -> bool {
        !events.toggles.is_empty()
    }
}

// Error Event
pub struct ErrorEvent;
impl ServerEvent for ErrorEvent {
    type Iter = IntoIter<LarderServerError>;

    fn iter(events: &mut ServerEvents) -> Self::Iter {
        let list = std::mem::take(&mut events.errors);
        IntoIterator::into_iter(list)
    }

    fn has(events: &ServerEvents) -> bool {
        !events.errors.is_empty()
    }
}
