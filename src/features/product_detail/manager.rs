use std::sync::Arc;

use async_trait::async_trait;

use crate::data::repository::{CartRepository, ProductRepository, WishlistRepository};
use crate::domain::{DomainError, Message, ProductItem};
use crate::features::product_detail::action::{ProductDetailAction, ProductDetailEvent};
use crate::features::product_detail::reducer::ProductDetailReducer;
use crate::features::product_detail::state::ProductDetailModel;
use crate::mvi::optimistic::{optimistic_update, Outcome};
use crate::mvi::{EffectContext, EffectHandler, UiState};

pub struct ProductDetailManager {
    products: Arc<dyn ProductRepository>,
    wishlist: Arc<dyn WishlistRepository>,
    cart: Arc<dyn CartRepository>,
}

impl ProductDetailManager {
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
        let Some(product_id) = ctx.data().map(|model| model.product_id) else {
            tracing::debug!("Refresh before any product was opened");
            return;
        };

        match self.products.product(product_id).await {
            Ok(product) => ctx.dispatch(ProductDetailAction::DataLoaded(product)),
            Err(DomainError::Unauthorized) => ctx.expire_session(),
            Err(error) => {
                tracing::warn!(product_id, error = %error, "Failed to load product");
                ctx.dispatch(ProductDetailAction::LoadFailed(error));
            }
        }
    }

    async fn toggle_favourite(&self, ctx: &EffectContext<Self>) {
        let Some(original) = shown_product(ctx) else {
            return;
        };
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
            move |model: ProductDetailModel| replace(model, updated),
            move |model: ProductDetailModel| replace(model, original),
            write,
            Message::WishlistUpdateFailed,
        )
        .await;
    }

    async fn toggle_cart(&self, ctx: &EffectContext<Self>) {
        let Some(original) = shown_product(ctx) else {
            return;
        };
        let updated = original.with_added_to_cart(!original.is_added_to_cart);
        let adding = updated.is_added_to_cart;

        let cart = Arc::clone(&self.cart);
        let target = updated.clone();
        let write = async move {
            if target.is_added_to_cart {
                cart.add(target.to_cart_item()).await
            } else {
                cart.remove(target.product_id).await
            }
        };

        let outcome = optimistic_update(
            ctx,
            move |model: ProductDetailModel| replace(model, updated),
            move |model: ProductDetailModel| replace(model, original),
            write,
            Message::CartUpdateFailed,
        )
        .await;

        if adding && outcome == Outcome::Confirmed {
            ctx.emit(ProductDetailEvent::ShowMessage(Message::AddedToCart));
        }
    }
}

fn shown_product(ctx: &EffectContext<ProductDetailManager>) -> Option<ProductItem> {
    ctx.data().and_then(|model| model.product)
}

/// Put `item` in place when the screen still shows the same product.
fn replace(model: ProductDetailModel, item: ProductItem) -> ProductDetailModel {
    model.map_product(|shown| {
        if shown.product_id == item.product_id {
            item
        } else {
            shown
        }
    })
}

#[async_trait]
impl EffectHandler for ProductDetailManager {
    type Reducer = ProductDetailReducer;
    type Event = ProductDetailEvent;

    async fn run(
        &self,
        action: ProductDetailAction,
        _previous: UiState<ProductDetailModel>,
        ctx: EffectContext<Self>,
    ) {
        match action {
            ProductDetailAction::Load(_) | ProductDetailAction::RefreshData => self.load(&ctx).await,
            ProductDetailAction::OnClickFavourite => self.toggle_favourite(&ctx).await,
            ProductDetailAction::OnClickAddToCart => self.toggle_cart(&ctx).await,
            ProductDetailAction::OnClickGoToCart => ctx.emit(ProductDetailEvent::LoadCartScreen),
            ProductDetailAction::DataLoaded(_) | ProductDetailAction::LoadFailed(_) => {}
        }
    }
}
