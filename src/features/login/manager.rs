use std::sync::Arc;

use async_trait::async_trait;

use crate::data::repository::AuthRepository;
use crate::domain::{DomainError, Message};
use crate::features::login::action::{LoginAction, LoginEvent};
use crate::features::login::reducer::LoginReducer;
use crate::features::login::state::LoginModel;
use crate::mvi::{EffectContext, EffectHandler, UiState};

pub struct LoginManager {
    auth: Arc<dyn AuthRepository>,
}

impl LoginManager {
    pub fn new(auth: Arc<dyn AuthRepository>) -> Self {
        Self { auth }
    }

    async fn submit(&self, ctx: &EffectContext<Self>, previous: UiState<LoginModel>) {
        if previous.is_loading() {
            return;
        }
        let Some(model) = previous.into_data().filter(LoginModel::is_valid) else {
            return;
        };

        match self.auth.login(model.username.trim(), &model.password).await {
            Ok(()) => {
                ctx.dispatch(LoginAction::LoginSucceeded);
                ctx.emit(LoginEvent::LoadNextScreen);
            }
            Err(error) => {
                tracing::warn!(error = %error, "Login failed");
                let message = match error {
                    DomainError::Unauthorized => Message::WrongCredentials,
                    other => other.user_message(),
                };
                ctx.dispatch(LoginAction::LoginFailed);
                ctx.emit(LoginEvent::ShowMessage(message));
            }
        }
    }
}

#[async_trait]
impl EffectHandler for LoginManager {
    type Reducer = LoginReducer;
    type Event = LoginEvent;

    async fn run(&self, action: LoginAction, previous: UiState<LoginModel>, ctx: EffectContext<Self>) {
        match action {
            LoginAction::Submit => self.submit(&ctx, previous).await,
            LoginAction::UsernameChanged(_)
            | LoginAction::PasswordChanged(_)
            | LoginAction::LoginSucceeded
            | LoginAction::LoginFailed => {}
        }
    }
}
