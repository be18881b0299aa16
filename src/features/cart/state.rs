use crate::domain::CartItem;
use crate::mvi::ViewData;

#[derive(Debug, Clone, PartialEq, Default)]
pub struct CartModel {
    pub items: Vec<CartItem>,
}

impl ViewData for CartModel {}

impl CartModel {
    pub fn total_price(&self) -> f64 {
        self.items.iter().map(|item| item.price).sum()
    }

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
    pub fn restored(mut self, index: usize, item: CartItem) -> Self {
        if self.position(item.product_id).is_none() {
            let index = index.min(self.items.len());
            self.items.insert(index, item);
        }
        self
    }
}
