use crate::features::cart::action::CartAction;
use crate::features::cart::state::CartModel;
use crate::features::settle_failure;
use crate::mvi::{Reducer, UiState};

pub struct CartReducer;

impl Reducer for CartReducer {
    type Data = CartModel;
    type Action = CartAction;

    fn reduce(state: UiState<Self::Data>, action: Self::Action) -> UiState<Self::Data> {
        match action {
            CartAction::RefreshData => state.into_loading(),
            CartAction::DataLoaded(items) => UiState::result(CartModel { items }),
            CartAction::LoadFailed(error) => settle_failure(state, error),
            CartAction::OnClickRemove(_) | CartAction::OnClickItem(_) => state,
        }
    }
}
