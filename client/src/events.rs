use std::vec::IntoIter;

use larder_shared::{FoodStats, MessageKind};

use crate::LarderClientError;

pub struct ClientEvents {
    syncs: Vec<MessageKind>,
    health: Vec<FoodStats>,
    errors: Vec<LarderClientError>,

    empty: bool,
}

impl ClientEvents {
    pub(crate) fn new() -> Self {
        Self {
            syncs: Vec::new(),
            health: Vec::new(),
            errors: Vec::new(),

            empty: true,
        }
    }

    // Public

    pub fn is_empty(&self) -> bool {
        self.empty
    }

    pub fn read<V: ClientEvent>(&mut self) -> V::Iter {
        V::iter(self)
    }

    pub fn has<V: ClientEvent>(&self) -> bool {
        V::has(self)
    }

    // Crate-public

    pub(crate) fn push_sync(&mut self, kind: MessageKind) {
        self.syncs.push(kind);
        self.empty = false;
    }

    pub(crate) fn push_health(&mut self, stats: FoodStats) {
        self.health.push(stats);
        self.empty = false;
    }

    pub(crate) fn push_error(&mut self, error: LarderClientError) {
        self.errors.push(error);
        self.empty = false;
    }
}

// Event Trait
pub trait ClientEvent {
    type Iter;

    fn iter(events: &mut ClientEvents) -> Self::Iter;

    fn has(events: &ClientEvents) -> bool;
}

// SyncEvent
/// The mirror was updated. Yields the kind of each message applied, in
/// arrival order.
pub struct SyncEvent;
impl ClientEvent for SyncEvent {
    type Iter = IntoIter<MessageKind>;

    fn iter(events: &mut ClientEvents) -> Self::Iter {
        let list = std::mem::take(&mut events.syncs);
        IntoIterator::into_iter(list)
    }

    fn has(events: &ClientEvents) -> bool {
        !events.syncs.is_empty()
    }
}

// HealthEvent
pub struct HealthEvent;
impl ClientEvent for HealthEvent {
    type Iter = IntoIter<FoodStats>;

    fn iter(events: &mut ClientEvents) -> Self::Iter {
        let list = std::mem::take(&mut events.health);
        IntoIterator::into_iter(list)
    }

    fn has(events: &ClientEvents) -> bool {
        !events.health.is_empty()
    }
}

// Error Event
pub struct ErrorEvent;
impl ClientEvent for ErrorEvent {
    type Iter = IntoIter<LarderClientError>;

    fn iter(events: &mut ClientEvents) -> Self::Iter {
        let list = std::mem::take(&mut events.errors);
        IntoIterator::into_iter(list)
    }

    fn has(events: &ClientEvents) -> bool {
        !events.errors.is_empty()
    }
}
