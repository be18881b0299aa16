//! Domain layer: entities, error taxonomy, messages and navigation rules.

mod error;
mod message;
mod model;
mod navigation;

pub use error::{DomainError, DomainResponse};
pub use message::Message;
pub(crate) use model::replace_by_key;
pub use model::{CartItem, CategoryItem, ProductItem, Rating, WishlistItem};
pub use navigation::{SplashDestination, UserStatus};
