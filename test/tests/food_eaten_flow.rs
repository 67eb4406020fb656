use larder_server::ServerConfig;
use larder_shared::{FoodConfig, ItemId, MessageKind};
use larder_test::{
    apple, assert_counts_match, assert_mirror_synced, bread, carrot, cookie, grain_group,
    sync_kinds, TestWorld,
};

#[test]
fn three_apples_then_bread() {
    let mut world = TestWorld::default();
    let index = world.join();
    let key = world.key(index);

    for _ in 0..3 {
        world.server.record_food_eaten(&key, apple());
    }
    world.server.record_food_eaten(&key, bread());
    world.deliver_to_clients();

    let apple_id = ItemId::named("apple");
    assert_eq!(world.server.food_count_of(&key, &apple_id), Some(3));
    assert_eq!(world.server.food_count_of_last_eaten(&key), Some(1));
    assert_eq!(world.client(index).food_count_of(&apple_id), Some(3));
    assert_eq!(world.client(index).food_count_of_last_eaten(), Some(1));
    assert_counts_match!(world, index, &ItemId::named("bread"));
    assert_mirror_synced!(world, index);
}

#[test]
fn each_record_sends_one_incremental() {
    let mut world = TestWorld::default();
    let index = world.join();
    let key = world.key(index);

    world.server.record_food_eaten(&key, carrot());
    world.server.record_food_eaten(&key, carrot());
    assert_eq!(world.player(index).link.pending_to_client(), 2);

    let mut events = world.deliver_to_clients();
    assert_eq!(
        sync_kinds(&mut events[index]),
        vec![MessageKind::FoodHistorySync, MessageKind::FoodHistorySync]
    );
    assert_eq!(world.client(index).total_eaten_all_time(), Some(2));
}

#[test]
fn players_do_not_share_ledgers() {
    let mut world = TestWorld::default();
    let first = world.join();
    let second = world.join();
    let first_key = world.key(first);
    let second_key = world.key(second);

    world.server.record_food_eaten(&first_key, apple());
    world.server.record_food_eaten(&second_key, bread());
    world.server.record_food_eaten(&first_key, apple());
    world.deliver_to_clients();

    let apple_id = ItemId::named("apple");
    assert_eq!(world.server.food_count_of(&first_key, &apple_id), Some(2));
    assert_eq!(world.server.food_count_of(&second_key, &apple_id), Some(0));
    assert_eq!(world.client(second).food_count_of(&apple_id), Some(0));
    assert_mirror_synced!(world, first);
    assert_mirror_synced!(world, second);
}

#[test]
fn grouped_foods_count_together_on_both_sides() {
    let mut world = TestWorld::with_food_groups(ServerConfig::default(), vec![grain_group()]);
    let index = world.join();
    let key = world.key(index);

    world.server.record_food_eaten(&key, bread());
    world.server.record_food_eaten(&key, cookie());
    world.deliver_to_clients();

    assert_eq!(world.server.food_count_of_last_eaten(&key), Some(2));
    assert_eq!(world.client(index).food_count_of_last_eaten(), Some(2));
}

#[test]
fn threshold_and_milestone_are_reported() {
    let config = ServerConfig {
        food: FoodConfig {
            food_eaten_threshold: 3,
            distinct_food_milestone: 2,
            ..FoodConfig::default()
        },
        ..ServerConfig::default()
    };
    let mut world = TestWorld::new(config);
    let index = world.join();
    let key = world.key(index);

    assert_eq!(world.server.record_food_eaten(&key, apple()), Some(false));
    // second distinct food
    assert_eq!(world.server.record_food_eaten(&key, bread()), Some(true));
    // all-time total reaches three
    assert_eq!(world.server.record_food_eaten(&key, bread()), Some(true));
    assert_eq!(world.server.record_food_eaten(&key, bread()), Some(false));
}

#[test]
fn record_without_ledger_is_none() {
    let mut world = TestWorld::default();
    let index = world.connect();
    let key = world.key(index);

    assert_eq!(world.server.record_food_eaten(&key, apple()), None);
    assert_eq!(world.server.food_count_of(&key, &ItemId::named("apple")), None);
    assert_eq!(world.player(index).link.pending_to_client(), 0);
}

#[test]
fn unknown_player_is_ignored() {
    let mut world = TestWorld::default();
    let index = world.join();
    let key = world.key(index);
    world.server.disconnect_player(&key);

    assert_eq!(world.server.record_food_eaten(&key, apple()), None);
    world.server.on_player_login(&key);
    world.server.on_tick(&key);
    assert!(world.server.food_history(&key).is_none());
}

#[test]
fn history_length_follows_window_units() {
    let mut world = TestWorld::default();
    let index = world.join();
    let key = world.key(index);

    for _ in 0..14 {
        world.server.record_food_eaten(&key, carrot());
    }
    world.deliver_to_clients();

    // default window keeps the last twelve foods
    assert_eq!(world.server.history_length_in_units(&key), Some(12));
    assert_eq!(world.client(index).history_length_in_units(), Some(12));
    assert_eq!(world.client(index).total_eaten_all_time(), Some(14));
}
