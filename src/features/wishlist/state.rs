use crate::domain::WishlistItem;
use crate::mvi::ViewData;

#[derive(Debug, Clone, PartialEq, Default)]
pub struct WishlistModel {
    pub items: Vec<WishlistItem>,
}

impl ViewData for WishlistModel {}

impl WishlistModel {
    pub fn position(&self, product_id: u64) -> Option<usize> {
        self.items
            .iter()
            .position(|item| item.product_id == product_id)
    }

    pub fn without(mut self, product_id: u64) -> Self {
        self.items.retain(|item| item.product_id != product_id);
        self
    }

    /// Re-insert `item` near `index` unless it is already present.
    pub fn restored(mut self, index: usize, item: WishlistItem) -> Self {
        if self.position(item.product_id).is_none() {
            let index = index.min(self.items.len());
            self.items.insert(index, item);
        }
        self
    }
}
