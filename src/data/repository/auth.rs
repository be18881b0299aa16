use std::sync::Arc;

use async_trait::async_trait;

use crate::data::api::StoreApi;
use crate::data::preferences::PreferenceStore;
use crate::domain::{DomainResponse, UserStatus};

/// Session and onboarding state.
#[async_trait]
pub trait AuthRepository: Send + Sync {
    /// Authenticate and store the returned session token.
    async fn login(&self, username: &str, password: &str) -> DomainResponse<()>;

    /// Forget the session token.
    async fn logout(&self) -> DomainResponse<()>;

    async fn user_status(&self) -> DomainResponse<UserStatus>;

    /// Mark onboarding as done.
    async fn finish_intro(&self) -> DomainResponse<()>;
}

pub struct DefaultAuthRepository {
    api: Arc<dyn StoreApi>,
    preferences: Arc<dyn PreferenceStore>,
}

impl DefaultAuthRepository {
    pub fn new(api: Arc<dyn StoreApi>, preferences: Arc<dyn PreferenceStore>) -> Self {
        Self { api, preferences }
    }
}

#[async_trait]
impl AuthRepository for DefaultAuthRepository {
    async fn login(&self, username: &str, password: &str) -> DomainResponse<()> {
        let token = self.api.login(username, password).await?;
        self.preferences.set_session_token(Some(token)).await?;
        tracing::info!(username = %username, "Logged in");
        Ok(())
    }

    async fn logout(&self) -> DomainResponse<()> {
        self.preferences.set_session_token(None).await?;
        tracing::info!("Logged out");
        Ok(())
    }

    async fn user_status(&self) -> DomainResponse<UserStatus> {
        Ok(UserStatus {
            session_token: self.preferences.session_token().await?,
            is_app_intro_finished: self.preferences.is_app_intro_finished().await?,
        })
    }

    async fn finish_intro(&self) -> DomainResponse<()> {
        self.preferences.set_app_intro_finished(true).await
    }
}
