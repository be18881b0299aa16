use crate::features::products::action::ProductsAction;
use crate::features::products::state::ProductsModel;
use crate::features::settle_failure;
use crate::mvi::{Reducer, UiState};

pub struct ProductsReducer;

impl Reducer for ProductsReducer {
    type Data = ProductsModel;
    type Action = ProductsAction;

    fn reduce(state: UiState<Self::Data>, action: Self::Action) -> UiState<Self::Data> {
        match action {
            ProductsAction::RefreshData => state.into_loading(),
            ProductsAction::DataLoaded(products) => UiState::result(ProductsModel { products }),
            ProductsAction::LoadFailed(error) => settle_failure(state, error),
            // Handled by the manager
            ProductsAction::OnClickFavourite(_)
            | ProductsAction::OnClickAddToCart(_)
            | ProductsAction::OnClickProduct(_) => state,
        }
    }
}
