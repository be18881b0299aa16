use crate::features::splash::action::SplashAction;
use crate::features::splash::state::SplashModel;
use crate::mvi::{Reducer, UiState};

pub struct SplashReducer;

impl Reducer for SplashReducer {
    type Data = SplashModel;
    type Action = SplashAction;

    fn reduce(state: UiState<Self::Data>, action: Self::Action) -> UiState<Self::Data> {
        match action {
            SplashAction::LoadNextScreen => state.into_loading(),
            SplashAction::Resolved(destination) => UiState::result(SplashModel {
                destination: Some(destination),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::SplashDestination;

    #[test]
    fn resolved_records_destination() {
        let loading = SplashReducer::reduce(UiState::default(), SplashAction::LoadNextScreen);
        assert!(loading.is_loading());
        let new = SplashReducer::reduce(loading, SplashAction::Resolved(SplashDestination::LoggedOut));
        assert_eq!(
            new.data().and_then(|m| m.destination),
            Some(SplashDestination::LoggedOut)
        );
    }
}
