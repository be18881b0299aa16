//! Shopping cart.

mod action;
mod manager;
mod reducer;
mod state;

pub use action::{CartAction, CartEvent};
pub use manager::CartManager;
pub use reducer::CartReducer;
pub use state::CartModel;
