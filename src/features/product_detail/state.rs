use crate::domain::ProductItem;
use crate::mvi::ViewData;

/// The id is known as soon as the screen opens; the product arrives later.
#[derive(Debug, Clone, PartialEq)]
pub struct ProductDetailModel {
    pub product_id: u64,
    pub product: Option<ProductItem>,
}

impl ViewData for ProductDetailModel {}

impl ProductDetailModel {
    pub fn new(product_id: u64) -> Self {
        Self {
            product_id,
            product: None,
        }
    }

    pub fn with_product(self, product: ProductItem) -> Self {
        Self {
            product: Some(product),
            ..self
        }
    }

    /// Apply `f` to the loaded product, if any.
    pub fn map_product(self, f: impl FnOnce(ProductItem) -> ProductItem) -> Self {
        Self {
            product: self.product.map(f),
            ..self
        }
    }
}
