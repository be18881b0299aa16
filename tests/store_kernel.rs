mod common;

use async_trait::async_trait;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;
use storefront::domain::Message;
use storefront::mvi::{Action, EffectContext, EffectHandler, Event, Reducer, Store, UiState, ViewData};

#[derive(Debug, Clone, PartialEq)]
struct Counter(u32);

impl ViewData for Counter {}

#[derive(Debug, Clone)]
enum CounterAction {
    Increment,
    /// Enter loading, then increment from the effect after a delay
    IncrementLater(u64),
    Ping,
    /// Effect that never completes on its own
    Hang,
}

impl Action for CounterAction {}

#[derive(Debug, PartialEq)]
enum CounterEvent {
    Pong,
    ShowMessage(Message),
    SessionExpired,
}

impl Event for CounterEvent {
    fn show_message(message: Message) -> Self {
        CounterEvent::ShowMessage(message)
    }

    fn session_expired() -> Self {
        CounterEvent::SessionExpired
    }
}

struct CounterReducer;

impl Reducer for CounterReducer {
    type Data = Counter;
    type Action = CounterAction;

    fn reduce(state: UiState<Counter>, action: CounterAction) -> UiState<Counter> {
        match action {
            CounterAction::Increment => state.map_data(|c| Counter(c.0 + 1)),
            CounterAction::IncrementLater(_) | CounterAction::Hang => state.into_loading(),
            CounterAction::Ping => state,
        }
    }
}

/// Sets its flag when dropped.
struct DropFlag(Arc<AtomicBool>);

impl Drop for DropFlag {
    fn drop(&mut self) {
        self.0.store(true, Ordering::SeqCst);
    }
}

#[derive(Default)]
struct CounterManager {
    started: Arc<AtomicUsize>,
    finished: Arc<AtomicUsize>,
    dropped: Arc<AtomicBool>,
}

#[async_trait]
impl EffectHandler for CounterManager {
    type Reducer = CounterReducer;
    type Event = CounterEvent;

    async fn run(&self, action: CounterAction, _previous: UiState<Counter>, ctx: EffectContext<Self>) {
        match action {
            CounterAction::IncrementLater(ms) => {
                tokio::time::sleep(Duration::from_millis(ms)).await;
                ctx.update(|state| state.map_data(|c| Counter(c.0 + 1)));
            }
            CounterAction::Ping => ctx.emit(CounterEvent::Pong),
            CounterAction::Hang => {
                let _flag = DropFlag(Arc::clone(&self.dropped));
                self.started.fetch_add(1, Ordering::SeqCst);
                std::future::pending::<()>().await;
                self.finished.fetch_add(1, Ordering::SeqCst);
            }
            CounterAction::Increment => {}
        }
    }
}

fn counter_store(manager: CounterManager) -> Store<CounterManager> {
    Store::new("counter", manager, UiState::result(Counter(0)))
}

async fn wait_until(condition: impl Fn() -> bool) {
    tokio::time::timeout(Duration::from_secs(2), async {
        while !condition() {
            tokio::time::sleep(Duration::from_millis(1)).await;
        }
    })
    .await
    .expect("condition not reached in time");
}

#[tokio::test]
async fn every_state_is_delivered_in_order() {
    let store = counter_store(CounterManager::default());
    let mut states = store.subscribe();

    for _ in 0..100 {
        store.dispatch(CounterAction::Increment);
    }
    store.settled().await;

    let seen: Vec<u32> = states
        .drain()
        .into_iter()
        .map(|state| state.data().map(|c| c.0).unwrap())
        .collect();
    assert_eq!(seen, (0..=100).collect::<Vec<_>>());
}

#[tokio::test]
async fn loading_is_observed_before_result() {
    let store = counter_store(CounterManager::default());
    let mut states = store.subscribe();

    store.dispatch(CounterAction::IncrementLater(5));
    store.settled().await;

    assert_eq!(
        states.drain(),
        vec![
            UiState::result(Counter(0)),
            UiState::Loading {
                data: Some(Counter(0))
            },
            UiState::result(Counter(1)),
        ]
    );
}

#[tokio::test]
async fn reduction_is_published_before_dispatch_returns() {
    let store = counter_store(CounterManager::default());
    store.dispatch(CounterAction::IncrementLater(50));
    assert!(store.state().is_loading());
    store.settled().await;
    assert_eq!(store.state(), UiState::result(Counter(1)));
}

#[tokio::test]
async fn late_subscriber_starts_from_current_state() {
    let store = counter_store(CounterManager::default());
    store.dispatch(CounterAction::Increment);
    store.dispatch(CounterAction::Increment);

    let mut states = store.subscribe();
    assert_eq!(states.next().await, Some(UiState::result(Counter(2))));
    assert_eq!(states.try_next(), None);
}

#[tokio::test]
async fn events_without_subscriber_are_dropped() {
    let store = counter_store(CounterManager::default());
    store.dispatch(CounterAction::Ping);
    store.settled().await;

    let mut events = store.subscribe_events();
    assert_eq!(events.try_next(), None);

    store.dispatch(CounterAction::Ping);
    store.settled().await;
    assert_eq!(events.drain(), vec![CounterEvent::Pong]);
}

#[tokio::test]
async fn only_latest_event_subscriber_receives() {
    let store = counter_store(CounterManager::default());
    let mut first = store.subscribe_events();
    let mut second = store.subscribe_events();

    store.dispatch(CounterAction::Ping);
    store.settled().await;

    assert_eq!(second.drain(), vec![CounterEvent::Pong]);
    assert_eq!(first.try_next(), None);
}

#[tokio::test]
async fn close_cancels_running_effects() {
    let manager = CounterManager::default();
    let started = Arc::clone(&manager.started);
    let finished = Arc::clone(&manager.finished);
    let store = counter_store(manager);

    store.dispatch(CounterAction::Hang);
    wait_until(|| started.load(Ordering::SeqCst) == 1).await;

    store.close();
    tokio::time::timeout(Duration::from_secs(2), store.settled())
        .await
        .expect("effects should be cancelled");
    assert_eq!(finished.load(Ordering::SeqCst), 0);
    assert!(store.is_closed());
}

#[tokio::test]
async fn dispatch_after_close_is_ignored() {
    let store = counter_store(CounterManager::default());
    store.close();
    store.dispatch(CounterAction::Increment);
    assert_eq!(store.state(), UiState::result(Counter(0)));
}

#[tokio::test]
async fn dropping_store_cancels_effects() {
    let manager = CounterManager::default();
    let started = Arc::clone(&manager.started);
    let dropped = Arc::clone(&manager.dropped);
    let store = counter_store(manager);

    store.dispatch(CounterAction::Hang);
    wait_until(|| started.load(Ordering::SeqCst) == 1).await;
    drop(store);

    wait_until(|| dropped.load(Ordering::SeqCst)).await;
}
