//! Base traits for actions (inbound) and events (outbound).

use std::fmt::Debug;

use crate::domain::Message;

/// Marker trait for action objects.
///
/// Actions represent:
/// - User actions (taps on a product, favourite toggles)
/// - Lifecycle signals (screen opened, refresh requested)
/// - Results of effects fed back into the reducer
///
/// Actions are processed by the reducer first, then by the effect handler.
pub trait Action: Clone + Debug + Send + 'static {}

/// One-shot output signal consumed by the view.
///
/// Every feature event enum can carry a transient message and a
/// session-expiry signal, so shared effect helpers can emit both without
/// knowing the concrete feature.
pub trait Event: Debug + Send + 'static {
    fn show_message(message: Message) -> Self;

    fn session_expired() -> Self;
}
