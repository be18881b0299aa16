use crate::domain::{DomainError, Message};
use crate::mvi::{Action, Event};

#[derive(Debug, Clone)]
pub enum IntroAction {
    NextPage,
    PreviousPage,
    /// Skip or complete onboarding
    Finish,

    Finished,
    FinishFailed(DomainError),
}

impl Action for IntroAction {}

#[derive(Debug, Clone, PartialEq)]
pub enum IntroEvent {
    ShowMessage(Message),
    /// Onboarding stored as done, continue to login
    LoadNextScreen,
    SessionExpired,
}

impl Event for IntroEvent {
    fn show_message(message: Message) -> Self {
        IntroEvent::ShowMessage(message)
    }

    fn session_expired() -> Self {
        IntroEvent::SessionExpired
    }
}
