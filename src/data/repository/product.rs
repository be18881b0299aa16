use std::collections::HashSet;
use std::sync::Arc;

use async_trait::async_trait;

use crate::data::api::StoreApi;
use crate::data::database::LocalDatabase;
use crate::domain::{DomainResponse, ProductItem};

#[async_trait]
pub trait ProductRepository: Send + Sync {
    /// Products in the selected categories (all when none is selected),
    /// with wishlist and cart membership resolved locally.
    async fn products(&self) -> DomainResponse<Vec<ProductItem>>;

    async fn product(&self, product_id: u64) -> DomainResponse<ProductItem>;
}

pub struct DefaultProductRepository {
    api: Arc<dyn StoreApi>,
    db: LocalDatabase,
}

struct Membership {
    wishlist: HashSet<u64>,
    cart: HashSet<u64>,
}

impl Membership {
    fn apply(&self, item: ProductItem) -> ProductItem {
        ProductItem {
            is_wish_listed: self.wishlist.contains(&item.product_id),
            is_added_to_cart: self.cart.contains(&item.product_id),
            ..item
        }
    }
}

impl DefaultProductRepository {
    pub fn new(api: Arc<dyn StoreApi>, db: LocalDatabase) -> Self {
        Self { api, db }
    }

    async fn membership(&self) -> DomainResponse<Membership> {
        let wishlist = self.db.wishlist_items().await?;
        let cart = self.db.cart_items().await?;
        Ok(Membership {
            wishlist: wishlist.iter().map(|item| item.product_id).collect(),
            cart: cart.iter().map(|item| item.product_id).collect(),
        })
    }
}

#[async_trait]
impl ProductRepository for DefaultProductRepository {
    async fn products(&self) -> DomainResponse<Vec<ProductItem>> {
        let remote = self.api.products().await?;
        let selected: HashSet<String> = self.db.selected_categories().await?.into_iter().collect();
        let membership = self.membership().await?;

        Ok(remote
            .into_iter()
            .filter(|dto| selected.is_empty() || selected.contains(&dto.category))
            .map(|dto| membership.apply(dto.into_item()))
            .collect())
    }

    async fn product(&self, product_id: u64) -> DomainResponse<ProductItem> {
        let dto = self.api.product(product_id).await?;
        let membership = self.membership().await?;
        Ok(membership.apply(dto.into_item()))
    }
}
