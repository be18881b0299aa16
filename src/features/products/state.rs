use crate::domain::{replace_by_key, ProductItem};
use crate::mvi::ViewData;

#[derive(Debug, Clone, PartialEq, Default)]
pub struct ProductsModel {
    pub products: Vec<ProductItem>,
}

impl ViewData for ProductsModel {}

impl ProductsModel {
    pub fn product(&self, product_id: u64) -> Option<&ProductItem> {
        self.products
            .iter()
            .find(|item| item.product_id == product_id)
    }

    /// Swap in `item` at the position of the product with the same id.
    pub fn with_product(mut self, item: &ProductItem) -> Self {
        replace_by_key(&mut self.products, item, |product| product.product_id);
        self
    }
}
