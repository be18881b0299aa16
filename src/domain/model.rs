//! Domain entities.
//!
//! Entities are immutable values keyed by `product_id` (or `category` for
//! categories). Changing a field means producing a new copy.

/// Review summary attached to a product.
#[derive(Debug, Clone, PartialEq)]
pub struct Rating {
    pub rate: f64,
    pub count: u32,
}

/// Product as shown in listings and on the detail screen.
#[derive(Debug, Clone, PartialEq)]
pub struct ProductItem {
    pub product_id: u64,
    pub title: String,
    pub price: f64,
    pub description: String,
    pub category: String,
    pub image: String,
    pub rating: Option<Rating>,
    /// Present in the local wishlist table.
    pub is_wish_listed: bool,
    /// Present in the local cart table.
    pub is_added_to_cart: bool,
}

impl ProductItem {
    pub fn with_wish_listed(&self, is_wish_listed: bool) -> Self {
        Self {
            is_wish_listed,
            ..self.clone()
        }
    }

    pub fn with_added_to_cart(&self, is_added_to_cart: bool) -> Self {
        Self {
            is_added_to_cart,
            ..self.clone()
        }
    }

    pub fn to_cart_item(&self) -> CartItem {
        CartItem {
            product_id: self.product_id,
            title: self.title.clone(),
            price: self.price,
            category: self.category.clone(),
            image: self.image.clone(),
        }
    }

    pub fn to_wishlist_item(&self) -> WishlistItem {
        WishlistItem {
            product_id: self.product_id,
            title: self.title.clone(),
            price: self.price,
            category: self.category.clone(),
            image: self.image.clone(),
            is_added_to_cart: self.is_added_to_cart,
        }
    }
}

/// Row of the local cart table.
#[derive(Debug, Clone, PartialEq)]
pub struct CartItem {
    pub product_id: u64,
    pub title: String,
    pub price: f64,
    pub category: String,
    pub image: String,
}

/// Row of the local wishlist table.
#[derive(Debug, Clone, PartialEq)]
pub struct WishlistItem {
    pub product_id: u64,
    pub title: String,
    pub price: f64,
    pub category: String,
    pub image: String,
    pub is_added_to_cart: bool,
}

impl WishlistItem {
    pub fn with_added_to_cart(&self, is_added_to_cart: bool) -> Self {
        Self {
            is_added_to_cart,
            ..self.clone()
        }
    }

    pub fn to_cart_item(&self) -> CartItem {
        CartItem {
            product_id: self.product_id,
            title: self.title.clone(),
            price: self.price,
            category: self.category.clone(),
            image: self.image.clone(),
        }
    }
}

/// Category filter entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryItem {
    pub category: String,
    pub is_selected: bool,
}

impl CategoryItem {
    pub fn with_selected(&self, is_selected: bool) -> Self {
        Self {
            is_selected,
            ..self.clone()
        }
    }
}

/// Replace the entry whose key matches `item`'s, keeping list order.
pub(crate) fn replace_by_key<T, K, F>(items: &mut [T], item: &T, key: F)
where
    T: Clone,
    K: PartialEq,
    F: Fn(&T) -> K,
{
    let wanted = key(item);
    if let Some(slot) = items.iter_mut().find(|existing| key(existing) == wanted) {
        *slot = item.clone();
    }
}
