/// PROPERTY-BASED TESTS: ledger counting invariants
///
/// Key invariants:
/// 1. Counts equal the number of matching records in the window
/// 2. The all-time total counts every record, evicted or not
/// 3. The mirror agrees with the server after every delivery

use proptest::prelude::*;

use larder_server::ServerConfig;
use larder_shared::{FoodConfig, FoodEaten, FoodValues, HistoryWindow, ItemId};
use larder_test::TestWorld;

const FOODS: [&str; 4] = ["apple", "bread", "carrot", "cookie"];

// Strategy for generating a sequence of eaten foods, as indices into FOODS
fn meals_strategy() -> impl Strategy<Value = Vec<usize>> {
    prop::collection::vec(0..FOODS.len(), 0..40)
}

fn meal(index: usize) -> FoodEaten {
    FoodEaten::new(ItemId::named(FOODS[index]), FoodValues::new(3, 0.5))
}

proptest! {
    #[test]
    fn prop_counts_match_window(meals in meals_strategy(), limit in 1u32..16) {
        let mut world = TestWorld::new(ServerConfig {
            food: FoodConfig {
                window: HistoryWindow::Count(limit),
                ..FoodConfig::default()
            },
            ..ServerConfig::default()
        });
        let index = world.join();
        let key = world.key(index);

        for meal_index in &meals {
            world.server.record_food_eaten(&key, meal(*meal_index));
        }
        world.deliver_to_clients();

        let window_start = meals.len().saturating_sub(limit as usize);
        let windowed = &meals[window_start..];
        for (food_index, name) in FOODS.iter().enumerate() {
            let expected = windowed.iter().filter(|meal| **meal == food_index).count() as u32;
            let item = ItemId::named(*name);
            prop_assert_eq!(world.server.food_count_of(&key, &item), Some(expected));
            prop_assert_eq!(world.client(index).food_count_of(&item), Some(expected));
        }

        let ledger = world.server.food_history(&key).unwrap();
        prop_assert_eq!(ledger.total_eaten_all_time(), meals.len() as u32);
        prop_assert_eq!(world.client(index).food_history(), Some(ledger));
    }

    #[test]
    fn prop_other_players_do_not_change_counts(
        mine in meals_strategy(),
        theirs in meals_strategy(),
    ) {
        let mut world = TestWorld::new(ServerConfig {
            food: FoodConfig {
                window: HistoryWindow::Count(64),
                ..FoodConfig::default()
            },
            ..ServerConfig::default()
        });
        let me = world.join();
        let them = world.join();
        let my_key = world.key(me);
        let their_key = world.key(them);

        for (step, meal_index) in mine.iter().enumerate() {
            world.server.record_food_eaten(&my_key, meal(*meal_index));
            if let Some(other) = theirs.get(step) {
                world.server.record_food_eaten(&their_key, meal(*other));
            }
        }

        for (food_index, name) in FOODS.iter().enumerate() {
            let expected = mine.iter().filter(|meal| **meal == food_index).count() as u32;
            prop_assert_eq!(
                world.server.food_count_of(&my_key, &ItemId::named(*name)),
                Some(expected)
            );
        }
    }
}
