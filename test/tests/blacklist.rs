use larder_server::ServerConfig;
use larder_shared::{FoodEaten, FoodValues, ItemId};
use larder_test::{apple, assert_mirror_synced, inedible_group, TestWorld};

fn rotten_flesh(meta: u16) -> FoodEaten {
    FoodEaten::new(ItemId::new("rotten_flesh", meta), FoodValues::new(4, 0.1))
}

#[test]
fn blacklisted_food_is_not_recorded() {
    let mut world = TestWorld::with_food_groups(ServerConfig::default(), vec![inedible_group()]);
    let index = world.join();
    let key = world.key(index);

    assert_eq!(world.server.record_food_eaten(&key, rotten_flesh(0)), Some(false));
    assert_eq!(world.server.record_food_eaten(&key, rotten_flesh(7)), Some(false));

    assert_eq!(world.player(index).link.pending_to_client(), 0);
    let ledger = world.server.food_history(&key).unwrap();
    assert_eq!(ledger.total_eaten_all_time(), 0);
    assert!(ledger.last_eaten().is_none());
}

#[test]
fn blacklist_does_not_affect_other_foods() {
    let mut world = TestWorld::with_food_groups(ServerConfig::default(), vec![inedible_group()]);
    let index = world.join();
    let key = world.key(index);

    world.server.record_food_eaten(&key, apple());
    world.server.record_food_eaten(&key, rotten_flesh(1));
    world.deliver_to_clients();

    assert_eq!(world.server.food_count_of_last_eaten(&key), Some(1));
    assert!(world.client(index).food_groups().is_blacklisted(&ItemId::new("rotten_flesh", 3)));
    assert_mirror_synced!(world, index);
}
