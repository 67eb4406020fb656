use larder_client::LarderClientError;
use larder_server::{FoodContainer, ToggleContainerEvent};
use larder_shared::ItemId;
use larder_test::TestWorld;

#[test]
fn toggle_flips_held_container() {
    let mut world = TestWorld::default();
    let index = world.join();
    let key = world.key(index);
    world
        .server
        .set_held_container(&key, Some(FoodContainer::new(ItemId::named("lunchbox"))));

    world.player_mut(index).client.toggle_food_container().unwrap();
    let mut events = world.deliver_to_server();

    let toggles: Vec<(_, FoodContainer)> = events.read::<ToggleContainerEvent>().collect();
    assert_eq!(toggles.len(), 1);
    assert_eq!(toggles[0].0, key);
    assert!(toggles[0].1.is_open());
    assert!(world.server.held_container(&key).unwrap().is_open());

    world.player_mut(index).client.toggle_food_container().unwrap();
    world.deliver_to_server();
    assert!(!world.server.held_container(&key).unwrap().is_open());
}

#[test]
fn toggle_never_touches_the_ledger() {
    let mut world = TestWorld::default();
    let index = world.join();
    let key = world.key(index);
    let before = world.server.food_history(&key).cloned();
    world
        .server
        .set_held_container(&key, Some(FoodContainer::new(ItemId::named("lunchbox"))));

    world.player_mut(index).client.toggle_food_container().unwrap();
    let (_, client_events) = world.exchange_packets();

    assert_eq!(world.server.food_history(&key).cloned(), before);
    assert!(client_events[index].is_empty());
}

#[test]
fn toggle_without_container_is_ignored() {
    let mut world = TestWorld::default();
    let index = world.join();

    world.player_mut(index).client.toggle_food_container().unwrap();
    let events = world.deliver_to_server();

    assert!(events.is_empty());
}

#[test]
fn disconnected_client_cannot_toggle() {
    let mut world = TestWorld::default();
    let index = world.join();

    world.player_mut(index).client.disconnect();

    match world.player_mut(index).client.toggle_food_container() {
        Err(LarderClientError::NotConnected) => {}
        other => panic!("Expected NotConnected, got {:?}", other),
    }
}
