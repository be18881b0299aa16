//! Category filter applied to the product listing.

mod action;
mod manager;
mod reducer;
mod state;

pub use action::{CategoriesAction, CategoriesEvent};
pub use manager::CategoriesManager;
pub use reducer::CategoriesReducer;
pub use state::CategoriesModel;
