//! Screen state phases for MVI architecture.

use crate::domain::{DomainError, Message};

/// Marker trait for the data a screen renders.
///
/// Data should be:
/// - Immutable (Clone to create new values)
/// - Self-contained (all data needed to render the view)
/// - Comparable (PartialEq for detecting changes)
pub trait ViewData: Clone + PartialEq + std::fmt::Debug + Send + Sync + 'static {}

/// Phase of a screen's data.
///
/// `data` survives `Loading` -> `Result` so the view never flashes to an
/// empty screen while a refresh is in flight.
#[derive(Debug, Clone, PartialEq)]
pub enum UiState<T> {
    Loading {
        data: Option<T>,
    },
    Result {
        data: Option<T>,
        error_message: Option<Message>,
    },
    Error {
        error: DomainError,
    },
}

impl<T> Default for UiState<T> {
    fn default() -> Self {
        UiState::Loading { data: None }
    }
}

impl<T: Clone> UiState<T> {
    /// Settled state carrying `data` and no message.
    pub fn result(data: T) -> Self {
        UiState::Result {
            data: Some(data),
            error_message: None,
        }
    }

    pub fn data(&self) -> Option<&T> {
        match self {
            UiState::Loading { data } | UiState::Result { data, .. } => data.as_ref(),
            UiState::Error { .. } => None,
        }
    }

    pub fn into_data(self) -> Option<T> {
        match self {
            UiState::Loading { data } | UiState::Result { data, .. } => data,
            UiState::Error { .. } => None,
        }
    }

    /// Enter `Loading`, keeping whatever data is currently shown.
    pub fn into_loading(self) -> Self {
        UiState::Loading {
            data: self.into_data(),
        }
    }

    /// Replace the carried data through `f`, settling into `Result`.
    ///
    /// Settles into an empty `Result` when there is no data to modify.
    pub fn map_data(self, f: impl FnOnce(T) -> T) -> Self {
        match self.into_data() {
            Some(data) => UiState::result(f(data)),
            None => UiState::Result {
                data: None,
                error_message: None,
            },
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, UiState::Loading { .. })
    }

    pub fn is_result(&self) -> bool {
        matches!(self, UiState::Result { .. })
    }

    pub fn error_message(&self) -> Option<Message> {
        match self {
            UiState::Result { error_message, .. } => *error_message,
            _ => None,
        }
    }
}
