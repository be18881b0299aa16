use crate::domain::{CartItem, DomainError, Message};
use crate::mvi::{Action, Event};

#[derive(Debug, Clone)]
pub enum CartAction {
    RefreshData,
    OnClickRemove(CartItem),
    OnClickItem(u64),

    DataLoaded(Vec<CartItem>),
    LoadFailed(DomainError),
}

impl Action for CartAction {}

#[derive(Debug, Clone, PartialEq)]
pub enum CartEvent {
    ShowMessage(Message),
    LoadDetailScreen(u64),
    SessionExpired,
}

impl Event for CartEvent {
    fn show_message(message: Message) -> Self {
        CartEvent::ShowMessage(message)
    }

    fn session_expired() -> Self {
        CartEvent::SessionExpired
    }
}
