//! Composition root.
//!
//! Builds the data layer from [`Config`] and hands out one store per screen.
//! Stores are independent; nothing here is global.

use std::sync::Arc;

use thiserror::Error;

use crate::config::{Config, ConfigError};
use crate::data::repository::{
    AuthRepository, CartRepository, CategoryRepository, DefaultAuthRepository,
    DefaultCategoryRepository, DefaultProductRepository, LocalCartRepository,
    LocalWishlistRepository, ProductRepository, WishlistRepository,
};
use crate::data::{FilePreferenceStore, HttpStoreApi, LocalDatabase, PreferenceStore, StorageError, StoreApi};
use crate::features::cart::{CartManager, CartModel};
use crate::features::categories::{CategoriesManager, CategoriesModel};
use crate::features::intro::{IntroManager, IntroModel};
use crate::features::login::{LoginManager, LoginModel};
use crate::features::product_detail::ProductDetailManager;
use crate::features::products::{ProductsManager, ProductsModel};
use crate::features::splash::SplashManager;
use crate::features::wishlist::{WishlistManager, WishlistModel};
use crate::mvi::{Store, UiState};

#[derive(Error, Debug)]
pub enum AppError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Storage(#[from] StorageError),

    #[error("Failed to build HTTP client: {0}")]
    Http(#[from] reqwest::Error),
}

/// Repositories shared by every store.
pub struct AppContainer {
    auth: Arc<dyn AuthRepository>,
    products: Arc<dyn ProductRepository>,
    cart: Arc<dyn CartRepository>,
    wishlist: Arc<dyn WishlistRepository>,
    categories: Arc<dyn CategoryRepository>,
}

impl AppContainer {
    /// Open local storage and build the HTTP client described by `config`.
    pub fn new(config: &Config) -> Result<Self, AppError> {
        config.validate()?;

        let preferences: Arc<dyn PreferenceStore> =
            Arc::new(FilePreferenceStore::open(&config.storage.preferences_path())?);
        let api: Arc<dyn StoreApi> = Arc::new(HttpStoreApi::new(&config.api, Arc::clone(&preferences))?);
        let db = LocalDatabase::open(&config.storage.database_path())?;

        tracing::info!(
            base_url = %config.api.base_url,
            data_dir = %config.storage.resolved_data_dir().display(),
            "Container ready"
        );

        Ok(Self::from_parts(api, preferences, db))
    }

    /// Wire the repositories over already-built data sources.
    pub fn from_parts(
        api: Arc<dyn StoreApi>,
        preferences: Arc<dyn PreferenceStore>,
        db: LocalDatabase,
    ) -> Self {
        Self {
            auth: Arc::new(DefaultAuthRepository::new(Arc::clone(&api), preferences)),
            products: Arc::new(DefaultProductRepository::new(Arc::clone(&api), db.clone())),
            cart: Arc::new(LocalCartRepository::new(db.clone())),
            wishlist: Arc::new(LocalWishlistRepository::new(db.clone())),
            categories: Arc::new(DefaultCategoryRepository::new(api, db)),
        }
    }

    pub fn auth(&self) -> Arc<dyn AuthRepository> {
        Arc::clone(&self.auth)
    }

    pub fn categories(&self) -> Arc<dyn CategoryRepository> {
        Arc::clone(&self.categories)
    }

    pub fn splash_store(&self) -> Store<SplashManager> {
        Store::new(
            "splash",
            SplashManager::new(self.auth()),
            UiState::default(),
        )
    }

    pub fn intro_store(&self) -> Store<IntroManager> {
        Store::new("intro", IntroManager::new(self.auth()), IntroModel::initial_state())
    }

    pub fn login_store(&self) -> Store<LoginManager> {
        Store::new("login", LoginManager::new(self.auth()), LoginModel::initial_state())
    }

    pub fn products_store(&self) -> Store<ProductsManager> {
        Store::new(
            "products",
            ProductsManager::new(
                Arc::clone(&self.products),
                Arc::clone(&self.wishlist),
                Arc::clone(&self.cart),
            ),
            UiState::<ProductsModel>::default(),
        )
    }

    pub fn product_detail_store(&self) -> Store<ProductDetailManager> {
        Store::new(
            "product_detail",
            ProductDetailManager::new(
                Arc::clone(&self.products),
                Arc::clone(&self.wishlist),
                Arc::clone(&self.cart),
            ),
            UiState::default(),
        )
    }

    pub fn cart_store(&self) -> Store<CartManager> {
        Store::new(
            "cart",
            CartManager::new(Arc::clone(&self.cart)),
            UiState::<CartModel>::default(),
        )
    }

    pub fn wishlist_store(&self) -> Store<WishlistManager> {
        Store::new(
            "wishlist",
            WishlistManager::new(Arc::clone(&self.wishlist), Arc::clone(&self.cart)),
            UiState::<WishlistModel>::default(),
        )
    }

    pub fn categories_store(&self) -> Store<CategoriesManager> {
        Store::new(
            "categories",
            CategoriesManager::new(Arc::clone(&self.categories)),
            UiState::<CategoriesModel>::default(),
        )
    }
}
