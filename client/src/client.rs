use log::{info, warn};

use larder_shared::{
    BaseConnection, FoodConfig, FoodEaten, FoodGroupRegistry, FoodHistory, FoodStats, HostType,
    ItemId, MessageContext, MessageKinds, PacketReceiver, PacketSender, Protocol, SyncMessage,
};

use crate::{
    events::ClientEvents,
    mirror::{ClientMessageHandler, Mirror},
    ClientConfig, LarderClientError,
};

/// The mirror side of the food history protocol. Holds a read-only copy of
/// the player's ledger that only sync messages from the server can change.
pub struct Client {
    client_config: ClientConfig,
    message_kinds: MessageKinds,
    connection: Option<BaseConnection>,
    mirror: Mirror,
    incoming_events: ClientEvents,
}

impl Client {
    /// Create a new Client connected through the given transport halves.
    /// The protocol is locked if it is not already. Panics if it does not
    /// register every food sync kind in its expected direction.
    pub fn new<P: Into<Protocol>>(
        client_config: ClientConfig,
        protocol: P,
        sender: Box<dyn PacketSender>,
        receiver: Box<dyn PacketReceiver>,
    ) -> Self {
        let mut protocol: Protocol = protocol.into();
        if !protocol.is_locked() {
            protocol.lock();
        }

        protocol.check_complete();

        let Protocol { message_kinds, .. } = protocol;
        let mirror = Mirror::new(client_config.local_food.clone());

        Self {
            client_config,
            message_kinds,
            connection: Some(BaseConnection::new(HostType::Client, sender, receiver)),
            mirror,
            incoming_events: ClientEvents::new(),
        }
    }

    pub fn client_config(&self) -> &ClientConfig {
        &self.client_config
    }

    pub fn is_connected(&self) -> bool {
        self.connection.is_some()
    }

    /// Must be called regularly. Applies every waiting server message to
    /// the mirror and returns the resulting events.
    pub fn receive(&mut self) -> ClientEvents {
        if let Some(connection) = self.connection.as_mut() {
            for result in connection.receive(&self.message_kinds) {
                let message = match result {
                    Ok(message) => message,
                    Err(error) => {
                        warn!("Bad packet from server: {}", error);
                        self.incoming_events
                            .push_error(LarderClientError::Receive(error));
                        continue;
                    }
                };

                let context = MessageContext::new(HostType::Server, ());
                let mut handler = ClientMessageHandler::new(&mut self.mirror, &mut self.incoming_events);
                match self.message_kinds.dispatch(&mut handler, &context, message) {
                    Ok(Some(reply)) => {
                        if let Err(error) = connection.send(&self.message_kinds, &reply) {
                            self.incoming_events.push_error(LarderClientError::Send(error));
                        }
                    }
                    Ok(None) => {}
                    Err(error) => {
                        self.incoming_events.push_error(error.into());
                    }
                }
            }
        }

        std::mem::replace(&mut self.incoming_events, ClientEvents::new())
    }

    /// Must be called once per game tick, alongside the server's tick for
    /// this player. Keeps the mirror's ledger clock in step so time based
    /// queries agree between ticks that send nothing.
    pub fn on_tick(&mut self) {
        self.mirror.advance_ticks(1);
    }

    /// Asks the server to open or close the food container the player is
    /// holding. This is the only message a client can send.
    pub fn toggle_food_container(&mut self) -> Result<(), LarderClientError> {
        let connection = self
            .connection
            .as_ref()
            .ok_or(LarderClientError::NotConnected)?;
        connection
            .send(&self.message_kinds, &SyncMessage::ToggleFoodContainer)
            .map_err(LarderClientError::Send)
    }

    /// Drops the connection and all mirrored state, falling back to the
    /// local config
    pub fn disconnect(&mut self) {
        if self.connection.take().is_some() {
            info!("Client disconnected, reverting to local food config");
        }
        self.mirror = Mirror::new(self.client_config.local_food.clone());
    }

    // Queries

    pub fn mirror(&self) -> &Mirror {
        &self.mirror
    }

    /// The server's config once it has been synced, the local one otherwise
    pub fn food_config(&self) -> &FoodConfig {
        self.mirror.food_config()
    }

    pub fn food_groups(&self) -> &FoodGroupRegistry {
        self.mirror.food_groups()
    }

    pub fn food_history(&self) -> Option<&FoodHistory> {
        self.mirror.history()
    }

    pub fn food_stats(&self) -> Option<FoodStats> {
        self.mirror.stats()
    }

    pub fn total_eaten_all_time(&self) -> Option<u32> {
        self.food_history().map(|ledger| ledger.total_eaten_all_time())
    }

    pub fn food_count_of(&self, item: &ItemId) -> Option<u32> {
        self.food_history()
            .map(|ledger| ledger.food_count(item, self.food_groups()))
    }

    pub fn food_count_of_last_eaten(&self) -> Option<u32> {
        self.food_history()
            .map(|ledger| ledger.food_count_of_last_eaten(self.food_groups()))
    }

    pub fn history_length_in_units(&self) -> Option<u64> {
        self.food_history()
            .map(|ledger| ledger.history_length_in_units())
    }

    pub fn food_last_eaten(&self) -> Option<&FoodEaten> {
        self.food_history()?.last_eaten()
    }
}
