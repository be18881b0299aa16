use std::sync::Arc;

use async_trait::async_trait;

use crate::data::repository::CategoryRepository;
use crate::domain::{CategoryItem, DomainError, Message};
use crate::features::categories::action::{CategoriesAction, CategoriesEvent};
use crate::features::categories::reducer::CategoriesReducer;
use crate::features::categories::state::CategoriesModel;
use crate::mvi::optimistic::optimistic_update;
use crate::mvi::{EffectContext, EffectHandler, UiState};

pub struct CategoriesManager {
    categories: Arc<dyn CategoryRepository>,
}

impl CategoriesManager {
    pub fn new(categories: Arc<dyn CategoryRepository>) -> Self {
        Self { categories }
    }

    async fn load(&self, ctx: &EffectContext<Self>) {
        match self.categories.categories().await {
            Ok(categories) => ctx.dispatch(CategoriesAction::DataLoaded(categories)),
            Err(DomainError::Unauthorized) => ctx.expire_session(),
            Err(error) => {
                tracing::warn!(error = %error, "Failed to load categories");
                ctx.dispatch(CategoriesAction::LoadFailed(error));
            }
        }
    }

    async fn toggle(&self, ctx: &EffectContext<Self>, clicked: CategoryItem) {
        let original = ctx
            .data()
            .and_then(|model| model.category(&clicked.category).cloned())
            .unwrap_or(clicked);
        let updated = original.with_selected(!original.is_selected);

        let categories = Arc::clone(&self.categories);
        let target = updated.clone();
        let write = async move {
            if target.is_selected {
                categories.select(&target.category).await
            } else {
                categories.deselect(&target.category).await
            }
        };

        optimistic_update(
            ctx,
            move |model: CategoriesModel| model.with_category(&updated),
            move |model: CategoriesModel| model.with_category(&original),
            write,
            Message::CategoryUpdateFailed,
        )
        .await;
    }
}

#[async_trait]
impl EffectHandler for CategoriesManager {
    type Reducer = CategoriesReducer;
    type Event = CategoriesEvent;

    async fn run(
        &self,
        action: CategoriesAction,
        _previous: UiState<CategoriesModel>,
        ctx: EffectContext<Self>,
    ) {
        match action {
            CategoriesAction::RefreshData => self.load(&ctx).await,
            CategoriesAction::OnClickCategory(item) => self.toggle(&ctx, item).await,
            CategoriesAction::Apply => ctx.emit(CategoriesEvent::CloseFilter),
            CategoriesAction::DataLoaded(_) | CategoriesAction::LoadFailed(_) => {}
        }
    }
}
