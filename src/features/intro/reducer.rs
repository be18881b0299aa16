use crate::features::intro::action::IntroAction;
use crate::features::intro::state::IntroModel;
use crate::mvi::{Reducer, UiState};

pub struct IntroReducer;

impl Reducer for IntroReducer {
    type Data = IntroModel;
    type Action = IntroAction;

    fn reduce(state: UiState<Self::Data>, action: Self::Action) -> UiState<Self::Data> {
        match action {
            IntroAction::NextPage => state.map_data(|model| {
                if model.is_last_page() {
                    // The manager turns this into Finish
                    model
                } else {
                    IntroModel {
                        page: model.page + 1,
                    }
                }
            }),
            IntroAction::PreviousPage => state.map_data(|model| IntroModel {
                page: model.page.saturating_sub(1),
            }),
            IntroAction::Finish => state.into_loading(),
            IntroAction::Finished => state.map_data(|model| model),
            IntroAction::FinishFailed(error) => UiState::Result {
                data: state.into_data(),
                error_message: Some(error.user_message()),
            },
        }
    }
}
