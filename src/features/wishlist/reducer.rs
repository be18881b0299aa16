use crate::features::settle_failure;
use crate::features::wishlist::action::WishlistAction;
use crate::features::wishlist::state::WishlistModel;
use crate::mvi::{Reducer, UiState};

pub struct WishlistReducer;

impl Reducer for WishlistReducer {
    type Data = WishlistModel;
    type Action = WishlistAction;

    fn reduce(state: UiState<Self::Data>, action: Self::Action) -> UiState<Self::Data> {
        match action {
            WishlistAction::RefreshData => state.into_loading(),
            WishlistAction::DataLoaded(items) => UiState::result(WishlistModel { items }),
            WishlistAction::LoadFailed(error) => settle_failure(state, error),
            WishlistAction::OnClickRemove(_)
            | WishlistAction::OnClickMoveToCart(_)
            | WishlistAction::OnClickItem(_) => state,
        }
    }
}
