//! Username/password login.

mod action;
mod manager;
mod reducer;
mod state;

pub use action::{LoginAction, LoginEvent};
pub use manager::LoginManager;
pub use reducer::LoginReducer;
pub use state::LoginModel;
