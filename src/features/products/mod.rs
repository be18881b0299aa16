//! Product listing with wishlist and cart toggles.

mod action;
mod manager;
mod reducer;
mod state;

pub use action::{ProductsAction, ProductsEvent};
pub use manager::ProductsManager;
pub use reducer::ProductsReducer;
pub use state::ProductsModel;
