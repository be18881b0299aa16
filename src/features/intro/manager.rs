use std::sync::Arc;

use async_trait::async_trait;

use crate::data::repository::AuthRepository;
use crate::features::intro::action::{IntroAction, IntroEvent};
use crate::features::intro::reducer::IntroReducer;
use crate::features::intro::state::IntroModel;
use crate::mvi::{EffectContext, EffectHandler, UiState};

pub struct IntroManager {
    auth: Arc<dyn AuthRepository>,
}

impl IntroManager {
    pub fn new(auth: Arc<dyn AuthRepository>) -> Self {
        Self { auth }
    }

    async fn finish(&self, ctx: &EffectContext<Self>) {
        match self.auth.finish_intro().await {
            Ok(()) => {
                ctx.dispatch(IntroAction::Finished);
                ctx.emit(IntroEvent::LoadNextScreen);
            }
            Err(error) => {
                tracing::warn!(error = %error, "Failed to store intro completion");
                ctx.dispatch(IntroAction::FinishFailed(error));
            }
        }
    }
}

#[async_trait]
impl EffectHandler for IntroManager {
    type Reducer = IntroReducer;
    type Event = IntroEvent;

    async fn run(&self, action: IntroAction, previous: UiState<IntroModel>, ctx: EffectContext<Self>) {
        match action {
            IntroAction::NextPage => {
                if previous.data().is_some_and(IntroModel::is_last_page) {
                    ctx.dispatch(IntroAction::Finish);
                }
            }
            IntroAction::Finish => {
                if !previous.is_loading() {
                    self.finish(&ctx).await;
                }
            }
            IntroAction::PreviousPage | IntroAction::Finished | IntroAction::FinishFailed(_) => {}
        }
    }
}
