use std::sync::Arc;

use async_trait::async_trait;

use crate::data::repository::{CartRepository, ProductRepository, WishlistRepository};
use crate::domain::{DomainError, Message, ProductItem};
use crate::features::products::action::{ProductsAction, ProductsEvent};
use crate::features::products::reducer::ProductsReducer;
use crate::features::products::state::ProductsModel;
use crate::mvi::optimistic::optimistic_update;
use crate::mvi::{EffectContext, EffectHandler, UiState};

pub struct ProductsManager {
    products: Arc<dyn ProductRepository>,
    wishlist: Arc<dyn WishlistRepository>,
    cart: Arc<dyn CartRepository>,
}

impl ProductsManager {
    pub fn new(
        products: Arc<dyn ProductRepository>,
        wishlist: Arc<dyn WishlistRepository>,
        cart: Arc<dyn CartRepository>,
    ) -> Self {
        Self {
            products,
            wishlist,
            cart,
        }
    }

    async fn load(&self, ctx: &EffectContext<Self>) {
        match self.products.products().await {
            Ok(products) => {
                tracing::debug!(count = products.len(), "Products loaded");
                ctx.dispatch(ProductsAction::DataLoaded(products));
            }
            Err(DomainError::Unauthorized) => ctx.expire_session(),
            Err(error) => {
                tracing::warn!(error = %error, "Failed to load products");
                ctx.dispatch(ProductsAction::LoadFailed(error));
            }
        }
    }

    async fn toggle_favourite(&self, ctx: &EffectContext<Self>, clicked: ProductItem) {
        let original = current(ctx, clicked);
        let updated = original.with_wish_listed(!original.is_wish_listed);

        let wishlist = Arc::clone(&self.wishlist);
        let target = updated.clone();
        let write = async move {
            if target.is_wish_listed {
                wishlist.add(target.to_wishlist_item()).await
            } else {
                wishlist.remove(target.product_id).await
            }
        };

        optimistic_update(
            ctx,
            move |model: ProductsModel| model.with_product(&updated),
            move |model: ProductsModel| model.with_product(&original),
            write,
            Message::WishlistUpdateFailed,
        )
        .await;
    }

    async fn toggle_cart(&self, ctx: &EffectContext<Self>, clicked: ProductItem) {
        let original = current(ctx, clicked);
        let updated = original.with_added_to_cart(!original.is_added_to_cart);

        let cart = Arc::clone(&self.cart);
        let target = updated.clone();
        let write = async move {
            if target.is_added_to_cart {
                cart.add(target.to_cart_item()).await
            } else {
                cart.remove(target.product_id).await
            }
        };

        optimistic_update(
            ctx,
            move |model: ProductsModel| model.with_product(&updated),
            move |model: ProductsModel| model.with_product(&original),
            write,
            Message::CartUpdateFailed,
        )
        .await;
    }
}

/// The product as currently shown, falling back to the clicked copy.
fn current(ctx: &EffectContext<ProductsManager>, clicked: ProductItem) -> ProductItem {
    ctx.data()
        .and_then(|model| model.product(clicked.product_id).cloned())
        .unwrap_or(clicked)
}

#[async_trait]
impl EffectHandler for ProductsManager {
    type Reducer = ProductsReducer;
    type Event = ProductsEvent;

    async fn run(
        &self,
        action: ProductsAction,
        _previous: UiState<ProductsModel>,
        ctx: EffectContext<Self>,
    ) {
        match action {
            ProductsAction::RefreshData => self.load(&ctx).await,
            ProductsAction::OnClickFavourite(item) => self.toggle_favourite(&ctx, item).await,
            ProductsAction::OnClickAddToCart(item) => self.toggle_cart(&ctx, item).await,
            ProductsAction::OnClickProduct(product_id) => {
                ctx.emit(ProductsEvent::LoadDetailScreen(product_id))
            }
            ProductsAction::DataLoaded(_) | ProductsAction::LoadFailed(_) => {}
        }
    }
}
