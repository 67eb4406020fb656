use log::debug;

use larder_shared::{
    FoodConfig, FoodGroupRegistry, FoodHistory, FoodHistorySync, FoodStats, MessageContext,
    MessageHandler, SyncMessage, Tick,
};

use crate::events::ClientEvents;

/// The client's read-only copy of server state. Changes when a sync message
/// is applied, and its ledger clock moves with the game tick.
#[derive(Clone, Debug)]
pub struct Mirror {
    pub(crate) food_config: FoodConfig,
    pub(crate) food_groups: FoodGroupRegistry,
    pub(crate) history: Option<FoodHistory>,
    pub(crate) stats: Option<FoodStats>,
}

impl Mirror {
    pub fn new(food_config: FoodConfig) -> Self {
        Self {
            food_config,
            food_groups: FoodGroupRegistry::new(),
            history: None,
            stats: None,
        }
    }

    pub fn food_config(&self) -> &FoodConfig {
        &self.food_config
    }

    pub fn food_groups(&self) -> &FoodGroupRegistry {
        &self.food_groups
    }

    pub fn history(&self) -> Option<&FoodHistory> {
        self.history.as_ref()
    }

    pub fn stats(&self) -> Option<FoodStats> {
        self.stats
    }

    /// Advance the mirrored ledger's active ticks, evicting from a time
    /// window exactly as the server does on the same tick
    pub(crate) fn advance_ticks(&mut self, delta: Tick) {
        if let Some(history) = self.history.as_mut() {
            history.advance_ticks(delta);
        }
    }

    fn apply_history(&mut self, sync: FoodHistorySync) {
        match sync {
            FoodHistorySync::Full(history) => {
                self.history = Some(history);
            }
            FoodHistorySync::Incremental(food) => {
                let window = self.food_config.window;
                let history = self
                    .history
                    .get_or_insert_with(|| FoodHistory::new(window));
                history.catch_up_to(food.eaten_at());
                history.add_food(food, &self.food_config);
            }
        }
    }
}

/// Applies server messages to a [`Mirror`]
pub(crate) struct ClientMessageHandler<'a> {
    mirror: &'a mut Mirror,
    events: &'a mut ClientEvents,
}

impl<'a> ClientMessageHandler<'a> {
    pub(crate) fn new(mirror: &'a mut Mirror, events: &'a mut ClientEvents) -> Self {
        Self { mirror, events }
    }
}

impl MessageHandler<()> for ClientMessageHandler<'_> {
    fn handle(&mut self, _context: &MessageContext<()>, message: SyncMessage) -> Option<SyncMessage> {
        let kind = message.kind();
        debug!("Client applying {}", kind);
        match message {
            SyncMessage::ConfigSync(config) => {
                self.mirror.food_config = config;
            }
            SyncMessage::FoodHistorySync(sync) => {
                self.mirror.apply_history(sync);
            }
            SyncMessage::FoodEatenAllTimeSync(total) => {
                let window = self.mirror.food_config.window;
                self.mirror
                    .history
                    .get_or_insert_with(|| FoodHistory::new(window))
                    .set_total_eaten_all_time(total);
            }
            SyncMessage::FoodGroupSync(groups) => {
                self.mirror.food_groups = FoodGroupRegistry::from_groups(groups);
            }
            SyncMessage::PlayerHealthSync(stats) => {
                self.mirror.stats = Some(stats);
                self.events.push_health(stats);
            }
            SyncMessage::ToggleFoodContainer => {
                // never reaches here: dispatch refuses it from the server
                return None;
            }
        }
        self.events.push_sync(kind);
        None
    }
}
