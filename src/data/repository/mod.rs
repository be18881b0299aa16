//! Repositories: the boundary feature managers talk to.
//!
//! Each trait has one production implementation combining the REST API and
//! local storage. Managers receive them as `Arc<dyn Trait>`.

mod auth;
mod cart;
mod category;
mod product;
mod wishlist;

pub use auth::{AuthRepository, DefaultAuthRepository};
pub use cart::{CartRepository, LocalCartRepository};
pub use category::{CategoryRepository, DefaultCategoryRepository};
pub use product::{DefaultProductRepository, ProductRepository};
pub use wishlist::{LocalWishlistRepository, WishlistRepository};
