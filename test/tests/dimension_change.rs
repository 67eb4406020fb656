use larder_shared::{ItemId, MessageKind};
use larder_test::{apple, assert_mirror_synced, bread, sync_kinds, TestWorld};

#[test]
fn dimension_change_sends_history_only() {
    let mut world = TestWorld::default();
    let index = world.join();
    let key = world.key(index);
    world.server.record_food_eaten(&key, apple());
    world.deliver_to_clients();

    world.server.on_player_changed_dimension(&key);
    let mut events = world.deliver_to_clients();

    assert_eq!(
        sync_kinds(&mut events[index]),
        vec![MessageKind::FoodEatenAllTimeSync, MessageKind::FoodHistorySync]
    );
    assert_mirror_synced!(world, index);
}

#[test]
fn dimension_change_repairs_lost_updates() {
    let mut world = TestWorld::default();
    let index = world.join();
    let key = world.key(index);

    world.server.record_food_eaten(&key, apple());
    world.server.record_food_eaten(&key, bread());
    assert_eq!(world.player(index).link.drop_to_client(), 2);
    world.deliver_to_clients();
    assert_eq!(world.client(index).food_count_of(&ItemId::named("apple")), Some(0));

    world.server.on_player_changed_dimension(&key);
    world.deliver_to_clients();

    assert_eq!(world.client(index).food_count_of(&ItemId::named("apple")), Some(1));
    assert_mirror_synced!(world, index);
}

#[test]
fn dimension_change_without_ledger_sends_nothing() {
    let mut world = TestWorld::default();
    let index = world.connect();
    let key = world.key(index);

    world.server.on_player_changed_dimension(&key);

    assert_eq!(world.player(index).link.pending_to_client(), 0);
}
