use crate::features::product_detail::action::ProductDetailAction;
use crate::features::product_detail::state::ProductDetailModel;
use crate::features::settle_failure;
use crate::mvi::{Reducer, UiState};

pub struct ProductDetailReducer;

impl Reducer for ProductDetailReducer {
    type Data = ProductDetailModel;
    type Action = ProductDetailAction;

    fn reduce(state: UiState<Self::Data>, action: Self::Action) -> UiState<Self::Data> {
        match action {
            ProductDetailAction::Load(product_id) => {
                let model = match state.into_data() {
                    // Reopening the same product keeps what is on screen
                    Some(model) if model.product_id == product_id => model,
                    _ => ProductDetailModel::new(product_id),
                };
                UiState::Loading { data: Some(model) }
            }
            ProductDetailAction::RefreshData => match state.into_data() {
                Some(model) => UiState::Loading { data: Some(model) },
                // Nothing was opened yet, so there is nothing to fetch
                None => UiState::Result {
                    data: None,
                    error_message: None,
                },
            },
            ProductDetailAction::DataLoaded(product) => match state.into_data() {
                Some(model) if model.product_id == product.product_id => {
                    UiState::result(model.with_product(product))
                }
                // Stale result for a product no longer shown
                Some(model) => UiState::Loading { data: Some(model) },
                None => UiState::result(ProductDetailModel::new(product.product_id).with_product(product)),
            },
            ProductDetailAction::LoadFailed(error) => settle_failure(state, error),
            ProductDetailAction::OnClickFavourite
            | ProductDetailAction::OnClickAddToCart
            | ProductDetailAction::OnClickGoToCart => state,
        }
    }
}
