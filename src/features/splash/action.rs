use crate::domain::{Message, SplashDestination};
use crate::mvi::{Action, Event};

#[derive(Debug, Clone)]
pub enum SplashAction {
    LoadNextScreen,

    Resolved(SplashDestination),
}

impl Action for SplashAction {}

#[derive(Debug, Clone, PartialEq)]
pub enum SplashEvent {
    Navigate(SplashDestination),
    ShowMessage(Message),
    SessionExpired,
}

impl Event for SplashEvent {
    fn show_message(message: Message) -> Self {
        SplashEvent::ShowMessage(message)
    }

    fn session_expired() -> Self {
        SplashEvent::SessionExpired
    }
}
