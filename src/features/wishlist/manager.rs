use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use async_trait::async_trait;

use crate::data::repository::{CartRepository, WishlistRepository};
use crate::domain::{DomainError, Message, WishlistItem};
use crate::features::wishlist::action::{WishlistAction, WishlistEvent};
use crate::features::wishlist::reducer::WishlistReducer;
use crate::features::wishlist::state::WishlistModel;
use crate::mvi::optimistic::{optimistic_update, Outcome};
use crate::mvi::{EffectContext, EffectHandler, UiState};

pub struct WishlistManager {
    wishlist: Arc<dyn WishlistRepository>,
    cart: Arc<dyn CartRepository>,
}

impl WishlistManager {
    pub fn new(wishlist: Arc<dyn WishlistRepository>, cart: Arc<dyn CartRepository>) -> Self {
        Self { wishlist, cart }
    }

    async fn load(&self, ctx: &EffectContext<Self>) {
        match self.wishlist.items().await {
            Ok(items) => ctx.dispatch(WishlistAction::DataLoaded(items)),
            Err(DomainError::Unauthorized) => ctx.expire_session(),
            Err(error) => {
                tracing::warn!(error = %error, "Failed to load wishlist");
                ctx.dispatch(WishlistAction::LoadFailed(error));
            }
        }
    }

    async fn remove(&self, ctx: &EffectContext<Self>, item: WishlistItem) {
        let index = position(ctx, item.product_id);
        let product_id = item.product_id;

        let wishlist = Arc::clone(&self.wishlist);
        let write = async move { wishlist.remove(product_id).await };

        optimistic_update(
            ctx,
            move |model: WishlistModel| model.without(product_id),
            move |model: WishlistModel| model.restored(index, item),
            write,
            Message::WishlistUpdateFailed,
        )
        .await;
    }

    async fn move_to_cart(&self, ctx: &EffectContext<Self>, item: WishlistItem) {
        let index = position(ctx, item.product_id);
        let product_id = item.product_id;
        let cart_item = item.to_cart_item();

        let wishlist = Arc::clone(&self.wishlist);
        let cart = Arc::clone(&self.cart);
        let in_cart = Arc::new(AtomicBool::new(false));
        let added = Arc::clone(&in_cart);
        // Already being in the cart is fine, the product still leaves the wishlist
        let write = async move {
            cart.add(cart_item).await?;
            added.store(true, Ordering::SeqCst);
            wishlist.remove(product_id).await
        };

        let outcome = optimistic_update(
            ctx,
            move |model: WishlistModel| model.without(product_id),
            move |model: WishlistModel| {
                // The cart keeps the product even when the wishlist write fails
                let item = if in_cart.load(Ordering::SeqCst) {
                    item.with_added_to_cart(true)
                } else {
                    item
                };
                model.restored(index, item)
            },
            write,
            Message::CartUpdateFailed,
        )
        .await;

        if outcome == Outcome::Confirmed {
            ctx.emit(WishlistEvent::ShowMessage(Message::AddedToCart));
        }
    }
}

fn position(ctx: &EffectContext<WishlistManager>, product_id: u64) -> usize {
    ctx.data()
        .and_then(|model| model.position(product_id))
        .unwrap_or(0)
}

#[async_trait]
impl EffectHandler for WishlistManager {
    type Reducer = WishlistReducer;
    type Event = WishlistEvent;

    async fn run(
        &self,
        action: WishlistAction,
        _previous: UiState<WishlistModel>,
        ctx: EffectContext<Self>,
    ) {
        match action {
            WishlistAction::RefreshData => self.load(&ctx).await,
            WishlistAction::OnClickRemove(item) => self.remove(&ctx, item).await,
            WishlistAction::OnClickMoveToCart(item) => self.move_to_cart(&ctx, item).await,
            WishlistAction::OnClickItem(product_id) => {
                ctx.emit(WishlistEvent::LoadDetailScreen(product_id))
            }
            WishlistAction::DataLoaded(_) | WishlistAction::LoadFailed(_) => {}
        }
    }
}
