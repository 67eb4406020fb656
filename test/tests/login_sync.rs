use larder_client::ClientConfig;
use larder_server::ServerConfig;
use larder_shared::{FoodConfig, HistoryWindow, ItemId, MessageKind};
use larder_test::{apple, assert_mirror_synced, bread, grain_group, sync_kinds, TestWorld};

fn init_logging() {
    env_logger::builder()
        .filter_level(log::LevelFilter::Debug)
        .is_test(true)
        .try_init()
        .ok();
}

#[test]
fn login_sends_config_groups_then_history() {
    init_logging();
    let mut world = TestWorld::with_food_groups(ServerConfig::default(), vec![grain_group()]);
    let index = world.connect();
    let key = world.key(index);

    world.server.on_entity_created(&key);
    world.server.on_player_login(&key);
    let mut events = world.deliver_to_clients();

    assert_eq!(
        sync_kinds(&mut events[index]),
        vec![
            MessageKind::ConfigSync,
            MessageKind::FoodGroupSync,
            MessageKind::FoodEatenAllTimeSync,
            MessageKind::FoodHistorySync,
        ]
    );
    assert_mirror_synced!(world, index);
    assert_eq!(world.client(index).food_groups().len(), 1);
}

#[test]
fn mirror_matches_existing_ledger_after_login() {
    init_logging();
    let mut world = TestWorld::default();
    let index = world.connect();
    let key = world.key(index);
    world.server.on_entity_created(&key);
    world.server.record_food_eaten(&key, apple());
    world.server.record_food_eaten(&key, bread());

    // a client that missed the incremental updates is repaired on login
    world.player(index).link.drop_to_client();
    world.server.on_player_login(&key);
    world.deliver_to_clients();

    assert_mirror_synced!(world, index);
    assert_eq!(world.client(index).total_eaten_all_time(), Some(2));
    assert_eq!(
        world.client(index).food_last_eaten().map(|food| food.item().clone()),
        Some(ItemId::named("bread"))
    );
}

#[test]
fn login_without_entity_allocates_ledger() {
    let mut world = TestWorld::default();
    let index = world.connect();
    let key = world.key(index);

    world.server.on_player_login(&key);
    world.deliver_to_clients();

    assert!(world.server.food_history(&key).is_some());
    assert_mirror_synced!(world, index);
}

#[test]
fn entity_created_twice_keeps_one_ledger() {
    let mut world = TestWorld::default();
    let index = world.connect();
    let key = world.key(index);

    world.server.on_entity_created(&key);
    world.server.record_food_eaten(&key, apple());
    world.server.on_entity_created(&key);

    assert_eq!(world.server.food_count_of(&key, &ItemId::named("apple")), Some(1));
}

#[test]
fn server_config_replaces_local_config() {
    let server_food = FoodConfig {
        window: HistoryWindow::Hunger(20),
        ..FoodConfig::default()
    };
    let local_food = FoodConfig {
        window: HistoryWindow::Count(3),
        ..FoodConfig::default()
    };
    let mut world = TestWorld::new(ServerConfig {
        food: server_food.clone(),
        ..ServerConfig::default()
    });
    let index = world.connect_with(ClientConfig {
        local_food: local_food.clone(),
    });
    assert_eq!(world.client(index).food_config(), &local_food);

    let key = world.key(index);
    world.server.on_player_login(&key);
    world.deliver_to_clients();

    assert_eq!(world.client(index).food_config(), &server_food);
    assert_eq!(
        world.client(index).food_history().map(|ledger| ledger.window()),
        Some(HistoryWindow::Hunger(20))
    );
}
