use async_trait::async_trait;

use crate::data::database::LocalDatabase;
use crate::domain::{DomainResponse, WishlistItem};

#[async_trait]
pub trait WishlistRepository: Send + Sync {
    async fn items(&self) -> DomainResponse<Vec<WishlistItem>>;

    /// `Ok(false)` when the product is already wish-listed.
    async fn add(&self, item: WishlistItem) -> DomainResponse<bool>;

    /// `Ok(false)` when the product was not wish-listed.
    async fn remove(&self, product_id: u64) -> DomainResponse<bool>;
}

pub struct LocalWishlistRepository {
    db: LocalDatabase,
}

impl LocalWishlistRepository {
    pub fn new(db: LocalDatabase) -> Self {
        Self { db }
    }
}

#[async_trait]
impl WishlistRepository for LocalWishlistRepository {
    async fn items(&self) -> DomainResponse<Vec<WishlistItem>> {
        Ok(self.db.wishlist_items().await?)
    }

    async fn add(&self, item: WishlistItem) -> DomainResponse<bool> {
        Ok(self.db.insert_wishlist_item(item).await?)
    }

    async fn remove(&self, product_id: u64) -> DomainResponse<bool> {
        Ok(self.db.delete_wishlist_item(product_id).await?)
    }
}
