//! First-run onboarding pages.

mod action;
mod manager;
mod reducer;
mod state;

pub use action::{IntroAction, IntroEvent};
pub use manager::IntroManager;
pub use reducer::IntroReducer;
pub use state::{IntroModel, IntroPage, INTRO_PAGES};
