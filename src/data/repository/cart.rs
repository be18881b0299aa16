use async_trait::async_trait;

use crate::data::database::LocalDatabase;
use crate::domain::{CartItem, DomainResponse};

#[async_trait]
pub trait CartRepository: Send + Sync {
    async fn items(&self) -> DomainResponse<Vec<CartItem>>;

    /// `Ok(false)` when the product is already in the cart.
    async fn add(&self, item: CartItem) -> DomainResponse<bool>;

    /// `Ok(false)` when the product was not in the cart.
    async fn remove(&self, product_id: u64) -> DomainResponse<bool>;
}

/// Cart kept in the local database only.
pub struct LocalCartRepository {
    db: LocalDatabase,
}

impl LocalCartRepository {
    pub fn new(db: LocalDatabase) -> Self {
        Self { db }
    }
}

#[async_trait]
impl CartRepository for LocalCartRepository {
    async fn items(&self) -> DomainResponse<Vec<CartItem>> {
        Ok(self.db.cart_items().await?)
    }

    async fn add(&self, item: CartItem) -> DomainResponse<bool> {
        Ok(self.db.insert_cart_item(item).await?)
    }

    async fn remove(&self, product_id: u64) -> DomainResponse<bool> {
        Ok(self.db.delete_cart_item(product_id).await?)
    }
}
