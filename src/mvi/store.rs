//! State container: serializes reductions and runs effects.

use std::fmt;
use std::pin::Pin;
use std::sync::Arc;
use std::task::{Context, Poll};

use futures_core::Stream;
use parking_lot::Mutex;
use tokio::runtime::Handle;
use tokio::sync::{mpsc, watch};

use super::effect::{ActionOf, DataOf, EffectContext, EffectHandler};
use super::reducer::Reducer;
use super::scope::EffectScope;
use super::state::UiState;

/// State holder for one feature instance.
///
/// `dispatch` reduces synchronously on the caller's thread and publishes the
/// result before the action's effect is spawned. Every published state is
/// delivered to every subscriber, in publication order.
///
/// Dropping the store cancels all of its in-flight effects.
pub struct Store<H: EffectHandler> {
    shared: Arc<Shared<H>>,
}

pub(crate) struct Shared<H: EffectHandler> {
    name: &'static str,
    handler: H,
    cell: Mutex<StateCell<DataOf<H>>>,
    events: Mutex<Option<mpsc::UnboundedSender<H::Event>>>,
    in_flight: watch::Sender<usize>,
    scope: EffectScope,
    runtime: Handle,
}

struct StateCell<T> {
    current: UiState<T>,
    subscribers: Vec<mpsc::UnboundedSender<UiState<T>>>,
}

impl<T: Clone> StateCell<T> {
    fn publish(&mut self, next: UiState<T>) {
        self.current = next;
        let current = &self.current;
        self.subscribers
            .retain(|subscriber| subscriber.send(current.clone()).is_ok());
    }
}

impl<H: EffectHandler> Store<H> {
    /// Create a store whose effects run on the current Tokio runtime.
    ///
    /// # Panics
    /// Panics when called outside of a Tokio runtime.
    pub fn new(name: &'static str, handler: H, initial: UiState<DataOf<H>>) -> Self {
        Self::with_runtime(name, handler, initial, Handle::current())
    }

    /// Create a store whose effects run on `runtime`.
    pub fn with_runtime(
        name: &'static str,
        handler: H,
        initial: UiState<DataOf<H>>,
        runtime: Handle,
    ) -> Self {
        let (in_flight, _) = watch::channel(0usize);
        Self {
            shared: Arc::new(Shared {
                name,
                handler,
                cell: Mutex::new(StateCell {
                    current: initial,
                    subscribers: Vec::new(),
                }),
                events: Mutex::new(None),
                in_flight,
                scope: EffectScope::new(),
                runtime,
            }),
        }
    }

    pub fn dispatch(&self, action: ActionOf<H>) {
        self.shared.dispatch(action);
    }

    /// Current published state.
    pub fn state(&self) -> UiState<DataOf<H>> {
        self.shared.state()
    }

    /// Subscribe to published states.
    ///
    /// The stream starts with the current state, then yields every later
    /// state exactly once and in order.
    pub fn subscribe(&self) -> StateStream<DataOf<H>> {
        let (tx, rx) = mpsc::unbounded_channel();
        let mut cell = self.shared.cell.lock();
        // Sent under the lock so no publication can slip in between.
        let _ = tx.send(cell.current.clone());
        cell.subscribers.push(tx);
        StateStream { rx }
    }

    /// Become the event consumer.
    ///
    /// Only the latest subscriber receives events; a previous stream stops
    /// receiving. Events emitted while nobody is subscribed are dropped,
    /// never replayed.
    pub fn subscribe_events(&self) -> EventStream<H::Event> {
        let (tx, rx) = mpsc::unbounded_channel();
        *self.shared.events.lock() = Some(tx);
        EventStream { rx }
    }

    /// Resolves once no effect of this store is running.
    pub async fn settled(&self) {
        let mut rx = self.shared.in_flight.subscribe();
        let _ = rx.wait_for(|count| *count == 0).await;
    }

    /// Cancel all in-flight effects and ignore further dispatches.
    pub fn close(&self) {
        self.shared.scope.close();
    }

    pub fn is_closed(&self) -> bool {
        self.shared.is_closed()
    }
}

impl<H: EffectHandler> Drop for Store<H> {
    fn drop(&mut self) {
        self.shared.scope.close();
    }
}

impl<H: EffectHandler> fmt::Debug for Store<H> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Store")
            .field("name", &self.shared.name)
            .field("state", &self.shared.state())
            .finish()
    }
}

impl<H: EffectHandler> Shared<H> {
    pub(crate) fn state(&self) -> UiState<DataOf<H>> {
        self.cell.lock().current.clone()
    }

    pub(crate) fn is_closed(&self) -> bool {
        self.scope.is_closed()
    }

    pub(crate) fn update<F>(&self, f: F) -> UiState<DataOf<H>>
    where
        F: FnOnce(UiState<DataOf<H>>) -> UiState<DataOf<H>>,
    {
        let mut cell = self.cell.lock();
        let next = f(cell.current.clone());
        cell.publish(next.clone());
        next
    }

    pub(crate) fn dispatch(self: &Arc<Self>, action: ActionOf<H>) {
        if self.scope.is_closed() {
            tracing::trace!(store = self.name, ?action, "Dispatch after close ignored");
            return;
        }
        tracing::debug!(store = self.name, ?action, "Dispatch");

        let previous = {
            let mut cell = self.cell.lock();
            let previous = cell.current.clone();
            let next = <H::Reducer as Reducer>::reduce(previous.clone(), action.clone());
            cell.publish(next);
            previous
        };

        self.spawn_effect(action, previous);
    }

    pub(crate) fn emit(&self, event: H::Event) {
        let events = self.events.lock();
        let Some(tx) = events.as_ref() else {
            tracing::trace!(store = self.name, ?event, "Event dropped (no subscriber)");
            return;
        };
        if let Err(err) = tx.send(event) {
            tracing::trace!(store = self.name, event = ?err.0, "Event dropped (subscriber gone)");
        }
    }

    fn spawn_effect(self: &Arc<Self>, action: ActionOf<H>, previous: UiState<DataOf<H>>) {
        self.in_flight.send_modify(|count| *count += 1);
        let guard = InFlightGuard {
            shared: Arc::clone(self),
        };
        let scope = self.scope.handle();

        self.runtime.spawn(async move {
            let shared = Arc::clone(&guard.shared);
            let ctx = EffectContext::new(Arc::clone(&shared));
            tokio::select! {
                _ = scope.closed() => {
                    tracing::trace!(store = shared.name, "Effect cancelled");
                }
                _ = shared.handler.run(action, previous, ctx) => {}
            }
            drop(guard);
        });
    }
}

/// Decrements the in-flight counter even when an effect panics.
struct InFlightGuard<H: EffectHandler> {
    shared: Arc<Shared<H>>,
}

impl<H: EffectHandler> Drop for InFlightGuard<H> {
    fn drop(&mut self) {
        self.shared
            .in_flight
            .send_modify(|count| *count = count.saturating_sub(1));
    }
}

/// Ordered stream of published states.
pub struct StateStream<T> {
    rx: mpsc::UnboundedReceiver<UiState<T>>,
}

impl<T> StateStream<T> {
    pub async fn next(&mut self) -> Option<UiState<T>> {
        self.rx.recv().await
    }

    pub fn try_next(&mut self) -> Option<UiState<T>> {
        self.rx.try_recv().ok()
    }

    /// Everything published since the last read, without waiting.
    pub fn drain(&mut self) -> Vec<UiState<T>> {
        let mut states = Vec::new();
        while let Ok(state) = self.rx.try_recv() {
            states.push(state);
        }
        states
    }
}

impl<T> Stream for StateStream<T> {
    type Item = UiState<T>;

    fn poll_next(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        self.rx.poll_recv(cx)
    }
}

/// One-shot events for the current consumer.
pub struct EventStream<E> {
    rx: mpsc::UnboundedReceiver<E>,
}

impl<E> EventStream<E> {
    pub async fn next(&mut self) -> Option<E> {
        self.rx.recv().await
    }

    pub fn try_next(&mut self) -> Option<E> {
        self.rx.try_recv().ok()
    }

    pub fn drain(&mut self) -> Vec<E> {
        let mut events = Vec::new();
        while let Ok(event) = self.rx.try_recv() {
            events.push(event);
        }
        events
    }
}

impl<E> Stream for EventStream<E> {
    type Item = E;

    fn poll_next(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        self.rx.poll_recv(cx)
    }
}
