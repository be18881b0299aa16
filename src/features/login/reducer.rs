use crate::domain::Message;
use crate::features::login::action::LoginAction;
use crate::features::login::state::LoginModel;
use crate::mvi::{Reducer, UiState};

pub struct LoginReducer;

impl Reducer for LoginReducer {
    type Data = LoginModel;
    type Action = LoginAction;

    fn reduce(state: UiState<Self::Data>, action: Self::Action) -> UiState<Self::Data> {
        match action {
            LoginAction::UsernameChanged(username) => edit(state, |model| LoginModel {
                username,
                ..model
            }),
            LoginAction::PasswordChanged(password) => edit(state, |model| LoginModel {
                password,
                ..model
            }),
            LoginAction::Submit => {
                if state.is_loading() {
                    // Already submitting
                    return state;
                }
                let model = state.into_data().unwrap_or_default();
                if model.is_valid() {
                    UiState::Loading { data: Some(model) }
                } else {
                    UiState::Result {
                        data: Some(model),
                        error_message: Some(Message::InvalidCredentials),
                    }
                }
            }
            LoginAction::LoginSucceeded | LoginAction::LoginFailed => {
                UiState::result(state.into_data().unwrap_or_default())
            }
        }
    }
}

/// Edit the fields, keeping a running submit in `Loading` and clearing any
/// validation message otherwise.
fn edit(state: UiState<LoginModel>, f: impl FnOnce(LoginModel) -> LoginModel) -> UiState<LoginModel> {
    match state {
        UiState::Loading { data } => UiState::Loading {
            data: Some(f(data.unwrap_or_default())),
        },
        other => UiState::result(f(other.into_data().unwrap_or_default())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> UiState<LoginModel> {
        let state = LoginModel::initial_state();
        let state = LoginReducer::reduce(state, LoginAction::UsernameChanged("mor_2314".into()));
        LoginReducer::reduce(state, LoginAction::PasswordChanged("83r5^_".into()))
    }

    #[test]
    fn typing_updates_fields() {
        let state = filled();
        let model = state.data().cloned().unwrap_or_default();
        assert_eq!(model.username, "mor_2314");
        assert_eq!(model.password, "83r5^_");
        assert!(state.is_result());
    }

    #[test]
    fn submit_with_empty_fields_shows_validation_message() {
        let new = LoginReducer::reduce(LoginModel::initial_state(), LoginAction::Submit);
        assert_eq!(new.error_message(), Some(Message::InvalidCredentials));
    }

    #[test]
    fn blank_username_is_invalid() {
        let state = LoginReducer::reduce(
            LoginModel::initial_state(),
            LoginAction::UsernameChanged("   ".into()),
        );
        let state = LoginReducer::reduce(state, LoginAction::PasswordChanged("x".into()));
        let new = LoginReducer::reduce(state, LoginAction::Submit);
        assert_eq!(new.error_message(), Some(Message::InvalidCredentials));
    }

    #[test]
    fn valid_submit_enters_loading() {
        let new = LoginReducer::reduce(filled(), LoginAction::Submit);
        assert!(new.is_loading());
    }

    #[test]
    fn typing_clears_validation_message() {
        let state = LoginReducer::reduce(LoginModel::initial_state(), LoginAction::Submit);
        let new = LoginReducer::reduce(state, LoginAction::UsernameChanged("a".into()));
        assert_eq!(new.error_message(), None);
    }

    #[test]
    fn failure_settles_and_keeps_fields() {
        let loading = LoginReducer::reduce(filled(), LoginAction::Submit);
        let new = LoginReducer::reduce(loading, LoginAction::LoginFailed);
        assert!(new.is_result());
        assert_eq!(new.data().map(|m| m.username.as_str()), Some("mor_2314"));
    }

    #[test]
    fn debug_hides_password() {
        let rendered = format!("{:?}", filled());
        assert!(!rendered.contains("83r5^_"));
    }
}
