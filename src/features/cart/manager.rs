use std::sync::Arc;

use async_trait::async_trait;

use crate::data::repository::CartRepository;
use crate::domain::{CartItem, DomainError, Message};
use crate::features::cart::action::{CartAction, CartEvent};
use crate::features::cart::reducer::CartReducer;
use crate::features::cart::state::CartModel;
use crate::mvi::optimistic::optimistic_update;
use crate::mvi::{EffectContext, EffectHandler, UiState};

pub struct CartManager {
    cart: Arc<dyn CartRepository>,
}

impl CartManager {
    pub fn new(cart: Arc<dyn CartRepository>) -> Self {
        Self { cart }
    }

    async fn load(&self, ctx: &EffectContext<Self>) {
        match self.cart.items().await {
            Ok(items) => ctx.dispatch(CartAction::DataLoaded(items)),
            Err(DomainError::Unauthorized) => ctx.expire_session(),
            Err(error) => {
                tracing::warn!(error = %error, "Failed to load cart");
                ctx.dispatch(CartAction::LoadFailed(error));
            }
        }
    }

    async fn remove(&self, ctx: &EffectContext<Self>, item: CartItem) {
        let index = ctx
            .data()
            .and_then(|model| model.position(item.product_id))
            .unwrap_or(0);
        let product_id = item.product_id;

        let cart = Arc::clone(&self.cart);
        let write = async move { cart.remove(product_id).await };

        optimistic_update(
            ctx,
            move |model: CartModel| model.without(product_id),
            move |model: CartModel| model.restored(index, item),
            write,
            Message::CartUpdateFailed,
        )
        .await;
    }
}

#[async_trait]
impl EffectHandler for CartManager {
    type Reducer = CartReducer;
    type Event = CartEvent;

    async fn run(&self, action: CartAction, _previous: UiState<CartModel>, ctx: EffectContext<Self>) {
        match action {
            CartAction::RefreshData => self.load(&ctx).await,
            CartAction::OnClickRemove(item) => self.remove(&ctx, item).await,
            CartAction::OnClickItem(product_id) => ctx.emit(CartEvent::LoadDetailScreen(product_id)),
            CartAction::DataLoaded(_) | CartAction::LoadFailed(_) => {}
        }
    }
}
