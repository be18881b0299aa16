use std::sync::Arc;

use async_trait::async_trait;

use crate::data::repository::AuthRepository;
use crate::domain::{SplashDestination, UserStatus};
use crate::features::splash::action::{SplashAction, SplashEvent};
use crate::features::splash::reducer::SplashReducer;
use crate::features::splash::state::SplashModel;
use crate::mvi::{EffectContext, EffectHandler, UiState};

pub struct SplashManager {
    auth: Arc<dyn AuthRepository>,
}

impl SplashManager {
    pub fn new(auth: Arc<dyn AuthRepository>) -> Self {
        Self { auth }
    }

    /// Where to go next. Unreadable preferences count as a fresh install.
    async fn destination(&self) -> SplashDestination {
        match self.auth.user_status().await {
            Ok(status) => status.destination(),
            Err(error) => {
                tracing::warn!(error = %error, "Failed to read user status");
                UserStatus::default().destination()
            }
        }
    }
}

#[async_trait]
impl EffectHandler for SplashManager {
    type Reducer = SplashReducer;
    type Event = SplashEvent;

    async fn run(&self, action: SplashAction, _previous: UiState<SplashModel>, ctx: EffectContext<Self>) {
        match action {
            SplashAction::LoadNextScreen => {
                let destination = self.destination().await;
                tracing::info!(?destination, "Splash resolved");
                ctx.dispatch(SplashAction::Resolved(destination));
                ctx.emit(SplashEvent::Navigate(destination));
            }
            SplashAction::Resolved(_) => {}
        }
    }
}
