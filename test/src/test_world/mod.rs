/// Wires one Server to any number of Clients over in-memory transports

use larder_client::{Client, ClientConfig, ClientEvents};
use larder_server::{PlayerKey, Server, ServerConfig, ServerEvents};
use larder_shared::{FoodGroup, Protocol};

use crate::local_socket::{LocalLink, LocalSocketPair};

pub struct TestPlayer {
    pub key: PlayerKey,
    pub client: Client,
    pub link: LocalLink,
}

pub struct TestWorld {
    pub server: Server,
    pub players: Vec<TestPlayer>,
}

impl Default for TestWorld {
    fn default() -> Self {
        Self::new(ServerConfig::default())
    }
}

impl TestWorld {
    pub fn new(server_config: ServerConfig) -> Self {
        Self {
            server: Server::new(server_config, Protocol::food_sync()),
            players: Vec::new(),
        }
    }

    pub fn with_food_groups(server_config: ServerConfig, groups: Vec<FoodGroup>) -> Self {
        let mut world = Self::new(server_config);
        for group in groups {
            world.server.register_food_group(group);
        }
        world
    }

    /// Connects a new client without running any lifecycle hooks. Returns
    /// its index.
    pub fn connect(&mut self) -> usize {
        self.connect_with(ClientConfig::default())
    }

    pub fn connect_with(&mut self, client_config: ClientConfig) -> usize {
        let LocalSocketPair {
            server_sender,
            server_receiver,
            client_sender,
            client_receiver,
            link,
        } = LocalSocketPair::new();

        let key = self.server.connect_player(server_sender, server_receiver);
        let client = Client::new(
            client_config,
            Protocol::food_sync(),
            client_sender,
            client_receiver,
        );
        self.players.push(TestPlayer { key, client, link });
        self.players.len() - 1
    }

    /// Connects a client the way a host would on join: entity created,
    /// player logged in, packets delivered
    pub fn join(&mut self) -> usize {
        let index = self.connect();
        let key = self.players[index].key;
        self.server.on_entity_created(&key);
        self.server.on_player_login(&key);
        self.deliver_to_clients();
        index
    }

    pub fn player(&self, index: usize) -> &TestPlayer {
        &self.players[index]
    }

    pub fn player_mut(&mut self, index: usize) -> &mut TestPlayer {
        &mut self.players[index]
    }

    pub fn key(&self, index: usize) -> PlayerKey {
        self.players[index].key
    }

    pub fn client(&self, index: usize) -> &Client {
        &self.players[index].client
    }

    /// Runs `receive()` on every client, returning their events by index
    pub fn deliver_to_clients(&mut self) -> Vec<ClientEvents> {
        self.players
            .iter_mut()
            .map(|player| player.client.receive())
            .collect()
    }

    pub fn deliver_to_server(&mut self) -> ServerEvents {
        self.server.receive()
    }

    /// One round trip: the server reads, then every client reads
    pub fn exchange_packets(&mut self) -> (ServerEvents, Vec<ClientEvents>) {
        let server_events = self.deliver_to_server();
        let client_events = self.deliver_to_clients();
        (server_events, client_events)
    }

    /// One game tick: every player is ticked on the server and on its
    /// client, then packets are delivered to clients
    pub fn tick_and_exchange(&mut self) -> Vec<ClientEvents> {
        for player in &mut self.players {
            self.server.on_tick(&player.key);
            player.client.on_tick();
        }
        self.deliver_to_clients()
    }
}
