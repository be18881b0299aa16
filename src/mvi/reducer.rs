//! Reducer trait for MVI architecture.

use super::action::Action;
use super::state::{UiState, ViewData};

/// Reducer transforms state based on actions.
///
/// The reducer is the only place where action-driven state transitions
/// happen. It must be a pure function: (State, Action) -> State.
/// Actions that do not affect state go through an explicit identity arm.
pub trait Reducer {
    /// The data type carried by the state this reducer operates on.
    type Data: ViewData;

    /// The action type this reducer handles.
    type Action: Action;

    /// Process an action and return the new state.
    ///
    /// This should be a pure function with no side effects.
    fn reduce(state: UiState<Self::Data>, action: Self::Action) -> UiState<Self::Data>;
}
