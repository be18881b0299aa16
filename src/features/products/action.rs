use crate::domain::{DomainError, Message, ProductItem};
use crate::mvi::{Action, Event};

#[derive(Debug, Clone)]
pub enum ProductsAction {
    RefreshData,
    OnClickFavourite(ProductItem),
    OnClickAddToCart(ProductItem),
    OnClickProduct(u64),

    /// Load finished (dispatched by the manager)
    DataLoaded(Vec<ProductItem>),
    /// Load failed (dispatched by the manager)
    LoadFailed(DomainError),
}

impl Action for ProductsAction {}

#[derive(Debug, Clone, PartialEq)]
pub enum ProductsEvent {
    ShowMessage(Message),
    LoadDetailScreen(u64),
    SessionExpired,
}

impl Event for ProductsEvent {
    fn show_message(message: Message) -> Self {
        ProductsEvent::ShowMessage(message)
    }

    fn session_expired() -> Self {
        ProductsEvent::SessionExpired
    }
}
