use crate::features::categories::action::CategoriesAction;
use crate::features::categories::state::CategoriesModel;
use crate::features::settle_failure;
use crate::mvi::{Reducer, UiState};

pub struct CategoriesReducer;

impl Reducer for CategoriesReducer {
    type Data = CategoriesModel;
    type Action = CategoriesAction;

    fn reduce(state: UiState<Self::Data>, action: Self::Action) -> UiState<Self::Data> {
        match action {
            CategoriesAction::RefreshData => state.into_loading(),
            CategoriesAction::DataLoaded(categories) => {
                UiState::result(CategoriesModel { categories })
            }
            CategoriesAction::LoadFailed(error) => settle_failure(state, error),
            CategoriesAction::OnClickCategory(_) | CategoriesAction::Apply => state,
        }
    }
}
