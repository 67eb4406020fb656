use larder_shared::ItemId;

/// A held item that stores food, such as a lunchbox. Clients may open or
/// close it, and nothing else.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FoodContainer {
    item: ItemId,
    open: bool,
}

impl FoodContainer {
    pub fn new(item: ItemId) -> Self {
        Self { item, open: false }
    }

    pub fn item(&self) -> &ItemId {
        &self.item
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn toggle(&mut self) {
        self.open = !self.open;
    }
}
