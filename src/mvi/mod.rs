//! Model-View-Intent (MVI) architecture primitives.
//!
//! This module provides the unidirectional data flow kernel shared by
//! every feature.
//!
//! # Architecture
//!
//! ```text
//! Action ──→ Reducer ──→ UiState ──→ View
//!   ↑           │                     │
//!   │           └──→ EffectHandler ───┼──→ Event ──→ View
//!   └─────────────────────────────────┘
//! ```
//!
//! - **UiState**: Loading / Result / Error phases of a screen's data
//! - **Action**: User actions or lifecycle signals
//! - **Reducer**: Pure function that transforms state based on actions
//! - **EffectHandler**: Async side effects that dispatch further actions,
//!   publish states or emit one-shot events
//! - **Store**: Serializes reductions and owns the effects' lifetime

mod action;
mod effect;
pub mod optimistic;
mod reducer;
mod scope;
mod state;
mod store;

pub use action::{Action, Event};
pub use effect::{ActionOf, DataOf, EffectContext, EffectHandler};
pub use reducer::Reducer;
pub use scope::{EffectScope, ScopeHandle};
pub use state::{UiState, ViewData};
pub use store::{EventStream, StateStream, Store};
