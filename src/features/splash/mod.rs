//! Startup routing.

mod action;
mod manager;
mod reducer;
mod state;

pub use action::{SplashAction, SplashEvent};
pub use manager::SplashManager;
pub use reducer::SplashReducer;
pub use state::SplashModel;
