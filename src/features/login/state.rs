use crate::mvi::{UiState, ViewData};

#[derive(Clone, PartialEq, Default)]
pub struct LoginModel {
    pub username: String,
    pub password: String,
}

impl ViewData for LoginModel {}

impl std::fmt::Debug for LoginModel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LoginModel")
            .field("username", &self.username)
            .field("password", &"..")
            .finish()
    }
}

impl LoginModel {
    /// The screen opens settled with empty fields.
    pub fn initial_state() -> UiState<Self> {
        UiState::result(Self::default())
    }

    pub fn is_valid(&self) -> bool {
        !self.username.trim().is_empty() && !self.password.is_empty()
    }
}
