use crate::domain::{DomainError, Message, ProductItem};
use crate::mvi::{Action, Event};

#[derive(Debug, Clone)]
pub enum ProductDetailAction {
    /// Show the product with this id
    Load(u64),
    RefreshData,
    OnClickFavourite,
    OnClickAddToCart,
    OnClickGoToCart,

    DataLoaded(ProductItem),
    LoadFailed(DomainError),
}

impl Action for ProductDetailAction {}

#[derive(Debug, Clone, PartialEq)]
pub enum ProductDetailEvent {
    ShowMessage(Message),
    LoadCartScreen,
    SessionExpired,
}

impl Event for ProductDetailEvent {
    fn show_message(message: Message) -> Self {
        ProductDetailEvent::ShowMessage(message)
    }

    fn session_expired() -> Self {
        ProductDetailEvent::SessionExpired
    }
}
