use crate::domain::Message;
use crate::mvi::{Action, Event};

#[derive(Clone)]
pub enum LoginAction {
    UsernameChanged(String),
    PasswordChanged(String),
    Submit,

    LoginSucceeded,
    LoginFailed,
}

// Keeps the password out of logs
impl std::fmt::Debug for LoginAction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LoginAction::UsernameChanged(username) => {
                f.debug_tuple("UsernameChanged").field(username).finish()
            }
            LoginAction::PasswordChanged(_) => f.write_str("PasswordChanged(..)"),
            LoginAction::Submit => f.write_str("Submit"),
            LoginAction::LoginSucceeded => f.write_str("LoginSucceeded"),
            LoginAction::LoginFailed => f.write_str("LoginFailed"),
        }
    }
}

impl Action for LoginAction {}

#[derive(Debug, Clone, PartialEq)]
pub enum LoginEvent {
    ShowMessage(Message),
    /// Session stored, continue to the dashboard
    LoadNextScreen,
    SessionExpired,
}

impl Event for LoginEvent {
    fn show_message(message: Message) -> Self {
        LoginEvent::ShowMessage(message)
    }

    fn session_expired() -> Self {
        LoginEvent::SessionExpired
    }
}
