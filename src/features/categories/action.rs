use crate::domain::{CategoryItem, DomainError, Message};
use crate::mvi::{Action, Event};

#[derive(Debug, Clone)]
pub enum CategoriesAction {
    RefreshData,
    OnClickCategory(CategoryItem),
    Apply,

    DataLoaded(Vec<CategoryItem>),
    LoadFailed(DomainError),
}

impl Action for CategoriesAction {}

#[derive(Debug, Clone, PartialEq)]
pub enum CategoriesEvent {
    ShowMessage(Message),
    /// Selection is stored; the listing should refresh
    CloseFilter,
    SessionExpired,
}

impl Event for CategoriesEvent {
    fn show_message(message: Message) -> Self {
        CategoriesEvent::ShowMessage(message)
    }

    fn session_expired() -> Self {
        CategoriesEvent::SessionExpired
    }
}
