//! Effect handler trait and the context effects run against.

use std::sync::Arc;

use async_trait::async_trait;

use super::action::Event;
use super::reducer::Reducer;
use super::state::UiState;
use super::store::Shared;

/// Data type rendered by the store driving `H`.
pub type DataOf<H> = <<H as EffectHandler>::Reducer as Reducer>::Data;

/// Action type accepted by the store driving `H`.
pub type ActionOf<H> = <<H as EffectHandler>::Reducer as Reducer>::Action;

/// Side-effect half of a feature (the "feature manager").
///
/// `run` is invoked once per dispatched action, after the reducer has
/// published its state, on a Tokio worker thread. Effects of the same store
/// are not serialized against each other.
#[async_trait]
pub trait EffectHandler: Send + Sync + Sized + 'static {
    /// Reducer that owns the synchronous half of this feature.
    type Reducer: Reducer;

    /// One-shot events this feature emits.
    type Event: Event;

    /// Handle one action.
    ///
    /// # Arguments
    /// * `action` - The dispatched action
    /// * `previous` - State as it was before the reducer ran
    /// * `ctx` - Access to the live state, further dispatch and events
    async fn run(
        &self,
        action: ActionOf<Self>,
        previous: UiState<DataOf<Self>>,
        ctx: EffectContext<Self>,
    );
}

/// Handle given to a running effect.
///
/// All state writes go through the store's lock, so they interleave with
/// reductions in a single total order.
pub struct EffectContext<H: EffectHandler> {
    shared: Arc<Shared<H>>,
}

impl<H: EffectHandler> Clone for EffectContext<H> {
    fn clone(&self) -> Self {
        Self {
            shared: Arc::clone(&self.shared),
        }
    }
}

impl<H: EffectHandler> EffectContext<H> {
    pub(crate) fn new(shared: Arc<Shared<H>>) -> Self {
        Self { shared }
    }

    /// Current published state.
    pub fn state(&self) -> UiState<DataOf<H>> {
        self.shared.state()
    }

    /// Data carried by the current state, if any.
    pub fn data(&self) -> Option<DataOf<H>> {
        self.shared.state().into_data()
    }

    /// Atomically replace the current state and return what was published.
    pub fn update<F>(&self, f: F) -> UiState<DataOf<H>>
    where
        F: FnOnce(UiState<DataOf<H>>) -> UiState<DataOf<H>>,
    {
        self.shared.update(f)
    }

    /// Feed another action through the reducer and its own effect.
    pub fn dispatch(&self, action: ActionOf<H>) {
        self.shared.dispatch(action);
    }

    /// Deliver a one-shot event to the current event subscriber.
    pub fn emit(&self, event: H::Event) {
        self.shared.emit(event);
    }

    /// Settle on the current data without a message and signal that the
    /// session is no longer valid.
    pub fn expire_session(&self) {
        self.update(|state| UiState::Result {
            data: state.into_data(),
            error_message: None,
        });
        self.emit(<H::Event as Event>::session_expired());
    }
}
