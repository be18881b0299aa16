//! Wishlist.

mod action;
mod manager;
mod reducer;
mod state;

pub use action::{WishlistAction, WishlistEvent};
pub use manager::WishlistManager;
pub use reducer::WishlistReducer;
pub use state::WishlistModel;
