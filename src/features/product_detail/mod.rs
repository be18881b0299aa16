//! Single product screen.

mod action;
mod manager;
mod reducer;
mod state;

pub use action::{ProductDetailAction, ProductDetailEvent};
pub use manager::ProductDetailManager;
pub use reducer::ProductDetailReducer;
pub use state::ProductDetailModel;
