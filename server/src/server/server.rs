use std::collections::HashMap;

use log::{debug, info, warn};

use larder_shared::{
    BaseConnection, FoodConfig, FoodEaten, FoodGroup, FoodGroupRegistry, FoodHistory,
    FoodHistorySync, FoodStats, HostType, ItemId, MessageContext, MessageKinds, PacketReceiver,
    PacketSender, PlayerData, Protocol, SaveScope, SyncMessage,
};

use crate::{
    events::ServerEvents,
    handler::ServerMessageHandler,
    player::{food_container::FoodContainer, player_record::PlayerRecord},
    LarderServerError, PlayerKey, ServerConfig,
};

/// The authoritative side of the food history protocol. Owns one ledger per
/// player, reacts to the host's lifecycle events, and pushes every change to
/// the affected player's client.
pub struct Server {
    config: ServerConfig,
    message_kinds: MessageKinds,
    food_groups: FoodGroupRegistry,
    players: HashMap<PlayerKey, PlayerRecord>,
    next_player_key: u64,
    incoming_events: ServerEvents,
}

impl Server {
    /// Create a new Server. The protocol is locked if it is not already.
    /// Panics if the protocol does not register every food sync kind in its
    /// expected direction.
    pub fn new<P: Into<Protocol>>(server_config: ServerConfig, protocol: P) -> Self {
        let mut protocol: Protocol = protocol.into();
        if !protocol.is_locked() {
            protocol.lock();
        }

        protocol.check_complete();

        let Protocol { message_kinds, .. } = protocol;

        Self {
            config: server_config,
            message_kinds,
            food_groups: FoodGroupRegistry::new(),
            players: HashMap::new(),
            next_player_key: 0,
            incoming_events: ServerEvents::new(),
        }
    }

    pub fn config(&self) -> &ServerConfig {
        &self.config
    }

    pub fn food_config(&self) -> &FoodConfig {
        &self.config.food
    }

    pub fn food_groups(&self) -> &FoodGroupRegistry {
        &self.food_groups
    }

    /// Adds or replaces a food group. Clients learn about it on their next
    /// login.
    pub fn register_food_group(&mut self, group: FoodGroup) {
        self.food_groups.register(group);
    }

    // Players

    /// Register a player's connection. No ledger exists until
    /// `on_entity_created` or `on_player_login` runs.
    pub fn connect_player(
        &mut self,
        sender: Box<dyn PacketSender>,
        receiver: Box<dyn PacketReceiver>,
    ) -> PlayerKey {
        let player_key = PlayerKey::from_u64(self.next_player_key);
        self.next_player_key += 1;

        let connection = BaseConnection::new(HostType::Server, sender, receiver);
        self.players.insert(player_key, PlayerRecord::new(connection));
        info!("Player {:?} connected", player_key);
        player_key
    }

    /// Drops everything held for the player, handing back its save data
    pub fn disconnect_player(&mut self, player_key: &PlayerKey) -> Option<PlayerData> {
        let player = self.players.remove(player_key)?;
        info!("Player {:?} disconnected", player_key);
        Some(player.data)
    }

    pub fn player_exists(&self, player_key: &PlayerKey) -> bool {
        self.players.contains_key(player_key)
    }

    pub fn player_keys(&self) -> Vec<PlayerKey> {
        let mut keys: Vec<PlayerKey> = self.players.keys().copied().collect();
        keys.sort();
        keys
    }

    pub fn player_data(&self, player_key: &PlayerKey) -> Option<&PlayerData> {
        self.players.get(player_key).map(|player| &player.data)
    }

    pub fn player_data_mut(&mut self, player_key: &PlayerKey) -> Option<&mut PlayerData> {
        self.players.get_mut(player_key).map(|player| &mut player.data)
    }

    // Host state

    pub fn set_food_stats(&mut self, player_key: &PlayerKey, stats: FoodStats) {
        let Some(player) = self.player_mut(player_key) else {
            return;
        };
        player.stats = stats;
    }

    pub fn food_stats(&self, player_key: &PlayerKey) -> Option<FoodStats> {
        self.players.get(player_key).map(|player| player.stats)
    }

    pub fn set_held_container(&mut self, player_key: &PlayerKey, container: Option<FoodContainer>) {
        let Some(player) = self.player_mut(player_key) else {
            return;
        };
        player.container = container;
    }

    pub fn held_container(&self, player_key: &PlayerKey) -> Option<&FoodContainer> {
        self.players.get(player_key)?.container.as_ref()
    }

    // Lifecycle

    /// Allocates the player's ledger. Does nothing if one already exists.
    pub fn on_entity_created(&mut self, player_key: &PlayerKey) {
        let window = self.config.food.window;
        let Some(player) = self.player_mut(player_key) else {
            return;
        };
        if player.ledger.is_none() {
            player.ledger = Some(FoodHistory::new(window));
        }
    }

    /// Brings a newly joined client fully up to date: config, food groups,
    /// then the ledger
    pub fn on_player_login(&mut self, player_key: &PlayerKey) {
        let Some(player) = self.players.get_mut(player_key) else {
            warn!("Login for unknown player {:?}", player_key);
            return;
        };
        let window = self.config.food.window;
        let ledger = player
            .ledger
            .get_or_insert_with(|| FoodHistory::new(window));

        let mut messages = vec![
            SyncMessage::ConfigSync(self.config.food.clone()),
            SyncMessage::FoodGroupSync(self.food_groups.groups().to_vec()),
        ];
        messages.extend(history_resync(ledger));

        info!("Syncing food history to player {:?} on login", player_key);
        for message in messages {
            send_to(
                &self.message_kinds,
                &mut self.incoming_events,
                player_key,
                player,
                message,
            );
        }
    }

    pub fn on_player_changed_dimension(&mut self, player_key: &PlayerKey) {
        let Some(player) = self.players.get(player_key) else {
            warn!("Dimension change for unknown player {:?}", player_key);
            return;
        };
        let Some(ledger) = player.ledger.as_ref() else {
            return;
        };

        info!("Resyncing food history to player {:?} after dimension change", player_key);
        for message in history_resync(ledger) {
            send_to(
                &self.message_kinds,
                &mut self.incoming_events,
                player_key,
                player,
                message,
            );
        }
    }

    /// Writes the part of the ledger that survives death into the player's
    /// persisted save data
    pub fn on_death(&mut self, player_key: &PlayerKey) {
        let Some(player) = self.players.get_mut(player_key) else {
            warn!("Death of unknown player {:?}", player_key);
            return;
        };
        if let Some(ledger) = &player.ledger {
            ledger.save_state(&mut player.data, SaveScope::DeathPersistent, &self.config.food);
        }
    }

    /// Gives the respawned entity a fresh ledger restored from what
    /// `on_death` kept, and resyncs the client
    pub fn on_respawn(&mut self, player_key: &PlayerKey) {
        let Some(player) = self.players.get_mut(player_key) else {
            warn!("Respawn of unknown player {:?}", player_key);
            return;
        };
        player.data.clear_for_respawn();

        let mut ledger = FoodHistory::new(self.config.food.window);
        if let Err(error) = ledger.load_state(&player.data, SaveScope::DeathPersistent) {
            warn!("Player {:?} respawned with unreadable food history: {}", player_key, error);
            self.incoming_events.push_error(LarderServerError::Persist {
                player: *player_key,
                error,
            });
            ledger = FoodHistory::new(self.config.food.window);
        }
        let messages = history_resync(&ledger);
        player.ledger = Some(ledger);
        player.health_sync.invalidate();

        info!("Resyncing food history to player {:?} after respawn", player_key);
        for message in messages {
            send_to(
                &self.message_kinds,
                &mut self.incoming_events,
                player_key,
                player,
                message,
            );
        }
    }

    /// Must be called once per game tick for every player
    pub fn on_tick(&mut self, player_key: &PlayerKey) {
        let Some(player) = self.players.get_mut(player_key) else {
            return;
        };

        let mut resync = None;
        if let Some(ledger) = player.ledger.as_mut() {
            if ledger.advance_ticks(1) > 0 {
                resync = Some(SyncMessage::FoodHistorySync(FoodHistorySync::Full(
                    ledger.clone(),
                )));
            }
        }
        if let Some(message) = resync {
            send_to(
                &self.message_kinds,
                &mut self.incoming_events,
                player_key,
                player,
                message,
            );
        }

        if self.config.sync_saturation {
            let stats = player.stats;
            if player.health_sync.needs_update(stats.saturation) {
                send_to(
                    &self.message_kinds,
                    &mut self.incoming_events,
                    player_key,
                    player,
                    SyncMessage::PlayerHealthSync(stats),
                );
            }
            player.health_sync.record_sent(stats.saturation);
        }
    }

    /// Records a food the player just ate. The client is sent the new record
    /// before the ledger is updated.
    ///
    /// Returns `None` if the player has no ledger, `Some(false)` if the food
    /// is blacklisted and was ignored, and otherwise whether the all-time
    /// threshold or a distinct food milestone was reached.
    pub fn record_food_eaten(&mut self, player_key: &PlayerKey, food: FoodEaten) -> Option<bool> {
        let Some(player) = self.players.get_mut(player_key) else {
            warn!("Food eaten by unknown player {:?}", player_key);
            return None;
        };
        let stamped = player.ledger.as_ref()?.stamp(food);

        if self.food_groups.is_blacklisted(stamped.item()) {
            debug!("Ignoring blacklisted food {} for player {:?}", stamped.item(), player_key);
            return Some(false);
        }

        send_to(
            &self.message_kinds,
            &mut self.incoming_events,
            player_key,
            player,
            SyncMessage::FoodHistorySync(FoodHistorySync::Incremental(stamped.clone())),
        );

        let ledger = player.ledger.as_mut()?;
        Some(ledger.add_food(stamped, &self.config.food))
    }

    // Queries

    pub fn food_history(&self, player_key: &PlayerKey) -> Option<&FoodHistory> {
        self.players.get(player_key)?.ledger.as_ref()
    }

    pub fn food_count_of(&self, player_key: &PlayerKey, item: &ItemId) -> Option<u32> {
        self.food_history(player_key)
            .map(|ledger| ledger.food_count(item, &self.food_groups))
    }

    pub fn food_count_of_last_eaten(&self, player_key: &PlayerKey) -> Option<u32> {
        self.food_history(player_key)
            .map(|ledger| ledger.food_count_of_last_eaten(&self.food_groups))
    }

    pub fn history_length_in_units(&self, player_key: &PlayerKey) -> Option<u64> {
        self.food_history(player_key)
            .map(|ledger| ledger.history_length_in_units())
    }

    pub fn food_last_eaten(&self, player_key: &PlayerKey) -> Option<&FoodEaten> {
        self.food_history(player_key)?.last_eaten()
    }

    // World save

    /// Writes the whole ledger into the player's world save data
    pub fn save_player(&mut self, player_key: &PlayerKey) -> Result<(), LarderServerError> {
        let player = self
            .players
            .get_mut(player_key)
            .ok_or(LarderServerError::UnknownPlayer {
                player: *player_key,
            })?;
        let ledger = player.ledger.as_ref().ok_or(LarderServerError::NoLedger {
            player: *player_key,
        })?;
        ledger.save_state(&mut player.data, SaveScope::Full, &self.config.food);
        Ok(())
    }

    /// Restores the ledger from the player's world save data, allocating it
    /// first if needed. Returns false when nothing was saved.
    pub fn load_player(&mut self, player_key: &PlayerKey) -> Result<bool, LarderServerError> {
        let window = self.config.food.window;
        let player = self
            .players
            .get_mut(player_key)
            .ok_or(LarderServerError::UnknownPlayer {
                player: *player_key,
            })?;
        let ledger = player
            .ledger
            .get_or_insert_with(|| FoodHistory::new(window));
        ledger
            .load_state(&player.data, SaveScope::Full)
            .map_err(|error| LarderServerError::Persist {
                player: *player_key,
                error,
            })
    }

    // Messages

    /// Must be called regularly. Receives packets from every player,
    /// dispatches them, and returns whatever events resulted.
    pub fn receive(&mut self) -> ServerEvents {
        for player_key in self.player_keys() {
            let Some(player) = self.players.get_mut(&player_key) else {
                continue;
            };

            for result in player.connection.receive(&self.message_kinds) {
                let message = match result {
                    Ok(message) => message,
                    Err(error) => {
                        warn!("Bad packet from player {:?}: {}", player_key, error);
                        self.incoming_events.push_error(LarderServerError::Receive {
                            player: player_key,
                            error,
                        });
                        continue;
                    }
                };

                let context = MessageContext::new(HostType::Client, player_key);
                let mut handler = ServerMessageHandler::new(player, &mut self.incoming_events);
                match self.message_kinds.dispatch(&mut handler, &context, message) {
                    Ok(Some(reply)) => send_to(
                        &self.message_kinds,
                        &mut self.incoming_events,
                        &player_key,
                        player,
                        reply,
                    ),
                    Ok(None) => {}
                    Err(error) => {
                        self.incoming_events.push_error(LarderServerError::Dispatch {
                            player: player_key,
                            error,
                        });
                    }
                }
            }
        }

        std::mem::replace(&mut self.incoming_events, ServerEvents::new())
    }

    fn player_mut(&mut self, player_key: &PlayerKey) -> Option<&mut PlayerRecord> {
        let player = self.players.get_mut(player_key);
        if player.is_none() {
            warn!("No player {:?} on this Server", player_key);
        }
        player
    }
}

/// The messages that bring a client's mirror back in line with `ledger`
fn history_resync(ledger: &FoodHistory) -> [SyncMessage; 2] {
    [
        SyncMessage::FoodEatenAllTimeSync(ledger.total_eaten_all_time()),
        SyncMessage::FoodHistorySync(FoodHistorySync::Full(ledger.clone())),
    ]
}

fn send_to(
    message_kinds: &MessageKinds,
    events: &mut ServerEvents,
    player_key: &PlayerKey,
    player: &PlayerRecord,
    message: SyncMessage,
) {
    if let Err(error) = player.connection.send(message_kinds, &message) {
        warn!(
            "Dropped {} for player {:?}: {}",
            message.kind(),
            player_key,
            error
        );
        events.push_error(LarderServerError::Send {
            player: *player_key,
            error,
        });
    }
}
