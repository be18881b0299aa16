//! Screen features.
//!
//! Each feature is one `Reducer` + one `EffectHandler` (its manager) plus the
//! action, event and data types they share. Features never reference each
//! other; navigation leaves a screen through an event.

pub mod cart;
pub mod categories;
pub mod intro;
pub mod login;
pub mod product_detail;
pub mod products;
pub mod splash;
pub mod wishlist;

use crate::domain::DomainError;
use crate::mvi::UiState;

/// Settle a failed load.
///
/// Data already on screen stays with the error as a message. Without data
/// the screen goes to `Error`.
pub(crate) fn settle_failure<T: Clone>(state: UiState<T>, error: DomainError) -> UiState<T> {
    match state.into_data() {
        Some(data) => UiState::Result {
            data: Some(data),
            error_message: Some(error.user_message()),
        },
        None => UiState::Error { error },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Message;

    #[test]
    fn failure_keeps_existing_data() {
        let state = settle_failure(UiState::Loading { data: Some(5u32) }, DomainError::Network);
        assert_eq!(
            state,
            UiState::Result {
                data: Some(5),
                error_message: Some(Message::NetworkUnavailable),
            }
        );
    }

    #[test]
    fn failure_without_data_is_error() {
        let state = settle_failure(UiState::<u32>::default(), DomainError::NotFound);
        assert_eq!(
            state,
            UiState::Error {
                error: DomainError::NotFound
            }
        );
    }
}
