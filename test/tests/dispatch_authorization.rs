use larder_client::ErrorEvent as ClientErrorEvent;
use larder_client::{Client, ClientConfig, LarderClientError};
use larder_server::{ErrorEvent, LarderServerError, Server, ServerConfig, ToggleContainerEvent};
use larder_shared::{
    DispatchError, FoodConfig, FoodHistorySync, HistoryWindow, HostType, ItemId, MessageDirection,
    MessageKind, Protocol, SyncMessage,
};
use larder_test::{apple, raw_packet, LocalSocketPair, TestWorld};

#[test]
fn client_cannot_push_history_to_server() {
    let mut world = TestWorld::default();
    let index = world.join();
    let key = world.key(index);

    let forged = SyncMessage::FoodHistorySync(FoodHistorySync::Incremental(apple()));
    world.player(index).link.inject_to_server(&raw_packet(&forged));
    let mut events = world.deliver_to_server();

    let errors: Vec<LarderServerError> = events.read::<ErrorEvent>().collect();
    assert_eq!(errors.len(), 1);
    match &errors[0] {
        LarderServerError::Dispatch {
            player,
            error: DispatchError::WrongSide { kind, origin },
        } => {
            assert_eq!(*player, key);
            assert_eq!(*kind, MessageKind::FoodHistorySync);
            assert_eq!(*origin, HostType::Client);
        }
        other => panic!("Expected WrongSide dispatch error, got {:?}", other),
    }
    assert_eq!(world.server.food_count_of(&key, &ItemId::named("apple")), Some(0));
}

#[test]
fn client_cannot_push_config_to_server() {
    let mut world = TestWorld::default();
    let index = world.join();

    let forged = SyncMessage::ConfigSync(FoodConfig {
        window: HistoryWindow::Count(1),
        ..FoodConfig::default()
    });
    world.player(index).link.inject_to_server(&raw_packet(&forged));
    let events = world.deliver_to_server();

    assert!(events.has::<ErrorEvent>());
    assert!(!events.has::<ToggleContainerEvent>());
    assert_eq!(world.server.food_config().window, HistoryWindow::Count(12));
}

#[test]
fn server_cannot_toggle_client_container() {
    let mut world = TestWorld::default();
    let index = world.join();

    world
        .player(index)
        .link
        .inject_to_client(&raw_packet(&SyncMessage::ToggleFoodContainer));
    let mut events = world.deliver_to_clients();

    let errors: Vec<LarderClientError> = events[index].read::<ClientErrorEvent>().collect();
    assert_eq!(errors.len(), 1);
    match &errors[0] {
        LarderClientError::Dispatch(DispatchError::WrongSide { kind, origin }) => {
            assert_eq!(*kind, MessageKind::ToggleFoodContainer);
            assert_eq!(*origin, HostType::Server);
        }
        other => panic!("Expected WrongSide dispatch error, got {:?}", other),
    }
}

#[test]
fn garbage_from_client_is_reported() {
    let mut world = TestWorld::default();
    let index = world.join();

    world.player(index).link.inject_to_server(&[0xFF, 0xFF]);
    let mut events = world.deliver_to_server();

    match events.read::<ErrorEvent>().next() {
        Some(LarderServerError::Receive { .. }) => {}
        other => panic!("Expected Receive error, got {:?}", other),
    }
}

#[test]
#[should_panic(expected = "Incomplete protocol")]
fn server_refuses_protocol_without_food_sync() {
    Server::new(ServerConfig::default(), Protocol::builder().build());
}

#[test]
#[should_panic(expected = "Incomplete protocol")]
fn client_refuses_protocol_with_reversed_toggle() {
    let mut protocol = Protocol::builder();
    // toggle included, so the client could never send it
    for kind in MessageKind::ALL {
        protocol.add_message(kind, MessageDirection::ServerToClient);
    }
    let socket = LocalSocketPair::new();

    Client::new(
        ClientConfig::default(),
        protocol.build(),
        socket.client_sender,
        socket.client_receiver,
    );
}
