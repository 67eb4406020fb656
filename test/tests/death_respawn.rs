use larder_server::ServerConfig;
use larder_shared::{FoodConfig, FoodHistory, ItemId, MessageKind};
use larder_test::{apple, assert_mirror_synced, bread, carrot, sync_kinds, TestWorld};

fn eat_some(world: &mut TestWorld, index: usize) {
    let key = world.key(index);
    world.server.record_food_eaten(&key, apple());
    world.server.record_food_eaten(&key, apple());
    world.server.record_food_eaten(&key, bread());
    world.deliver_to_clients();
}

#[test]
fn respawn_keeps_counters_and_drops_window() {
    let mut world = TestWorld::default();
    let index = world.join();
    let key = world.key(index);
    eat_some(&mut world, index);

    world.server.on_death(&key);
    world.server.on_respawn(&key);
    let mut events = world.deliver_to_clients();

    assert_eq!(
        sync_kinds(&mut events[index]),
        vec![MessageKind::FoodEatenAllTimeSync, MessageKind::FoodHistorySync]
    );

    let ledger = world.server.food_history(&key).unwrap();
    assert_eq!(ledger.total_eaten_all_time(), 3);
    assert_eq!(ledger.distinct_foods_eaten(), 2);
    assert!(ledger.recent().is_empty());
    assert!(ledger.has_ever_eaten(&ItemId::named("bread")));
    assert_eq!(world.server.food_count_of(&key, &ItemId::named("apple")), Some(0));
    assert_mirror_synced!(world, index);
}

#[test]
fn respawn_keeps_window_when_configured() {
    let config = ServerConfig {
        food: FoodConfig {
            history_persists_through_death: true,
            ..FoodConfig::default()
        },
        ..ServerConfig::default()
    };
    let mut world = TestWorld::new(config);
    let index = world.join();
    let key = world.key(index);
    eat_some(&mut world, index);
    let before: FoodHistory = world.server.food_history(&key).unwrap().clone();

    world.server.on_death(&key);
    world.server.on_respawn(&key);
    world.deliver_to_clients();

    assert_eq!(world.server.food_history(&key), Some(&before));
    assert_eq!(world.client(index).food_count_of(&ItemId::named("apple")), Some(2));
    assert_mirror_synced!(world, index);
}

#[test]
fn respawn_without_death_save_starts_fresh() {
    let mut world = TestWorld::default();
    let index = world.join();
    let key = world.key(index);
    eat_some(&mut world, index);

    // the host respawned the player without a death, e.g. leaving the end
    world.server.on_respawn(&key);
    world.deliver_to_clients();

    assert_eq!(world.server.food_history(&key).unwrap().total_eaten_all_time(), 0);
    assert_mirror_synced!(world, index);
}

#[test]
fn persisted_save_data_survives_respawn() {
    let mut world = TestWorld::default();
    let index = world.join();
    let key = world.key(index);
    eat_some(&mut world, index);

    world.server.on_death(&key);
    let data = world.server.player_data(&key).unwrap();
    assert!(data.persisted().contains_key(FoodHistory::TAG_KEY));

    world.server.on_respawn(&key);
    world.server.record_food_eaten(&key, carrot());
    world.deliver_to_clients();

    assert_eq!(world.server.food_history(&key).unwrap().total_eaten_all_time(), 4);
    assert_eq!(world.client(index).total_eaten_all_time(), Some(4));
    assert_mirror_synced!(world, index);
}
