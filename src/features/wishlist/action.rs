use crate::domain::{DomainError, Message, WishlistItem};
use crate::mvi::{Action, Event};

#[derive(Debug, Clone)]
pub enum WishlistAction {
    RefreshData,
    OnClickRemove(WishlistItem),
    /// Put the product in the cart and take it off the wishlist
    OnClickMoveToCart(WishlistItem),
    OnClickItem(u64),

    DataLoaded(Vec<WishlistItem>),
    LoadFailed(DomainError),
}

impl Action for WishlistAction {}

#[derive(Debug, Clone, PartialEq)]
pub enum WishlistEvent {
    ShowMessage(Message),
    LoadDetailScreen(u64),
    SessionExpired,
}

impl Event for WishlistEvent {
    fn show_message(message: Message) -> Self {
        WishlistEvent::ShowMessage(message)
    }

    fn session_expired() -> Self {
        WishlistEvent::SessionExpired
    }
}
