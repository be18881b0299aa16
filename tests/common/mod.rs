//! Shared test utilities: in-memory repositories and fixtures.

#![allow(dead_code, unused_imports)]

pub mod mock_api;

use async_trait::async_trait;
use parking_lot::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use storefront::data::repository::{
    AuthRepository, CartRepository, CategoryRepository, ProductRepository, WishlistRepository,
};
use storefront::domain::{
    CartItem, CategoryItem, DomainError, DomainResponse, ProductItem, UserStatus, WishlistItem,
};

/// How a fake answers writes.
#[derive(Debug, Clone, Default)]
pub enum WriteMode {
    #[default]
    Succeed,
    /// Report `Ok(false)`
    Refuse,
    Fail(DomainError),
}

pub fn product(product_id: u64, category: &str) -> ProductItem {
    ProductItem {
        product_id,
        title: format!("Product {}", product_id),
        price: 10.0 * product_id as f64,
        description: format!("Description of {}", product_id),
        category: category.to_string(),
        image: format!("https://img.example.com/{}.png", product_id),
        rating: None,
        is_wish_listed: false,
        is_added_to_cart: false,
    }
}

pub fn cart_item(product_id: u64) -> CartItem {
    product(product_id, "bags").to_cart_item()
}

pub fn wishlist_item(product_id: u64) -> WishlistItem {
    product(product_id, "bags").to_wishlist_item()
}

/// Keyed in-memory table shared by the cart and wishlist fakes.
struct Table<T> {
    rows: Mutex<Vec<T>>,
    mode: Mutex<WriteMode>,
    writes: AtomicUsize,
}

impl<T: Clone> Table<T> {
    fn new(rows: Vec<T>) -> Self {
        Self {
            rows: Mutex::new(rows),
            mode: Mutex::new(WriteMode::Succeed),
            writes: AtomicUsize::new(0),
        }
    }

    fn write(&self, apply: impl FnOnce(&mut Vec<T>) -> bool) -> DomainResponse<bool> {
        self.writes.fetch_add(1, Ordering::SeqCst);
        match self.mode.lock().clone() {
            WriteMode::Succeed => Ok(apply(&mut self.rows.lock())),
            WriteMode::Refuse => Ok(false),
            WriteMode::Fail(error) => Err(error),
        }
    }
}

pub struct FakeCart {
    table: Table<CartItem>,
}

impl FakeCart {
    pub fn new(items: Vec<CartItem>) -> Arc<Self> {
        Arc::new(Self {
            table: Table::new(items),
        })
    }

    pub fn set_mode(&self, mode: WriteMode) {
        *self.table.mode.lock() = mode;
    }

    pub fn rows(&self) -> Vec<CartItem> {
        self.table.rows.lock().clone()
    }

    pub fn writes(&self) -> usize {
        self.table.writes.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl CartRepository for FakeCart {
    async fn items(&self) -> DomainResponse<Vec<CartItem>> {
        Ok(self.rows())
    }

    async fn add(&self, item: CartItem) -> DomainResponse<bool> {
        self.table.write(|rows| {
            if rows.iter().any(|row| row.product_id == item.product_id) {
                return false;
            }
            rows.push(item);
            true
        })
    }

    async fn remove(&self, product_id: u64) -> DomainResponse<bool> {
        self.table.write(|rows| {
            let before = rows.len();
            rows.retain(|row| row.product_id != product_id);
            rows.len() != before
        })
    }
}

pub struct FakeWishlist {
    table: Table<WishlistItem>,
}

impl FakeWishlist {
    pub fn new(items: Vec<WishlistItem>) -> Arc<Self> {
        Arc::new(Self {
            table: Table::new(items),
        })
    }

    pub fn set_mode(&self, mode: WriteMode) {
        *self.table.mode.lock() = mode;
    }

    pub fn rows(&self) -> Vec<WishlistItem> {
        self.table.rows.lock().clone()
    }

    pub fn writes(&self) -> usize {
        self.table.writes.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl WishlistRepository for FakeWishlist {
    async fn items(&self) -> DomainResponse<Vec<WishlistItem>> {
        Ok(self.rows())
    }

    async fn add(&self, item: WishlistItem) -> DomainResponse<bool> {
        self.table.write(|rows| {
            if rows.iter().any(|row| row.product_id == item.product_id) {
                return false;
            }
            rows.push(item);
            true
        })
    }

    async fn remove(&self, product_id: u64) -> DomainResponse<bool> {
        self.table.write(|rows| {
            let before = rows.len();
            rows.retain(|row| row.product_id != product_id);
            rows.len() != before
        })
    }
}

pub struct FakeProducts {
    products: Mutex<Vec<ProductItem>>,
    load_error: Mutex<Option<DomainError>>,
    loads: AtomicUsize,
}

impl FakeProducts {
    pub fn new(products: Vec<ProductItem>) -> Arc<Self> {
        Arc::new(Self {
            products: Mutex::new(products),
            load_error: Mutex::new(None),
            loads: AtomicUsize::new(0),
        })
    }

    pub fn set_products(&self, products: Vec<ProductItem>) {
        *self.products.lock() = products;
    }

    pub fn fail_loads(&self, error: Option<DomainError>) {
        *self.load_error.lock() = error;
    }

    pub fn loads(&self) -> usize {
        self.loads.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl ProductRepository for FakeProducts {
    async fn products(&self) -> DomainResponse<Vec<ProductItem>> {
        self.loads.fetch_add(1, Ordering::SeqCst);
        if let Some(error) = self.load_error.lock().clone() {
            return Err(error);
        }
        Ok(self.products.lock().clone())
    }

    async fn product(&self, product_id: u64) -> DomainResponse<ProductItem> {
        self.loads.fetch_add(1, Ordering::SeqCst);
        if let Some(error) = self.load_error.lock().clone() {
            return Err(error);
        }
        self.products
            .lock()
            .iter()
            .find(|item| item.product_id == product_id)
            .cloned()
            .ok_or(DomainError::NotFound)
    }
}

pub struct FakeCategories {
    categories: Mutex<Vec<CategoryItem>>,
    mode: Mutex<WriteMode>,
}

impl FakeCategories {
    pub fn new(names: &[&str]) -> Arc<Self> {
        Arc::new(Self {
            categories: Mutex::new(
                names
                    .iter()
                    .map(|name| CategoryItem {
                        category: name.to_string(),
                        is_selected: false,
                    })
                    .collect(),
            ),
            mode: Mutex::new(WriteMode::Succeed),
        })
    }

    pub fn set_mode(&self, mode: WriteMode) {
        *self.mode.lock() = mode;
    }

    pub fn selected_now(&self) -> Vec<String> {
        self.categories
            .lock()
            .iter()
            .filter(|item| item.is_selected)
            .map(|item| item.category.clone())
            .collect()
    }

    fn set_selected(&self, category: &str, is_selected: bool) -> DomainResponse<bool> {
        match self.mode.lock().clone() {
            WriteMode::Succeed => {}
            WriteMode::Refuse => return Ok(false),
            WriteMode::Fail(error) => return Err(error),
        }
        let mut categories = self.categories.lock();
        match categories.iter_mut().find(|item| item.category == category) {
            Some(item) if item.is_selected != is_selected => {
                item.is_selected = is_selected;
                Ok(true)
            }
            _ => Ok(false),
        }
    }
}

#[async_trait]
impl CategoryRepository for FakeCategories {
    async fn categories(&self) -> DomainResponse<Vec<CategoryItem>> {
        Ok(self.categories.lock().clone())
    }

    async fn selected(&self) -> DomainResponse<Vec<String>> {
        Ok(self.selected_now())
    }

    async fn select(&self, category: &str) -> DomainResponse<bool> {
        self.set_selected(category, true)
    }

    async fn deselect(&self, category: &str) -> DomainResponse<bool> {
        self.set_selected(category, false)
    }
}

pub struct FakeAuth {
    status: Mutex<DomainResponse<UserStatus>>,
    login_result: Mutex<DomainResponse<()>>,
    finish_result: Mutex<DomainResponse<()>>,
    pub logins: Mutex<Vec<(String, String)>>,
}

impl FakeAuth {
    pub fn new(status: UserStatus) -> Arc<Self> {
        Arc::new(Self {
            status: Mutex::new(Ok(status)),
            login_result: Mutex::new(Ok(())),
            finish_result: Mutex::new(Ok(())),
            logins: Mutex::new(Vec::new()),
        })
    }

    pub fn set_status(&self, status: DomainResponse<UserStatus>) {
        *self.status.lock() = status;
    }

    pub fn set_login_result(&self, result: DomainResponse<()>) {
        *self.login_result.lock() = result;
    }

    pub fn set_finish_result(&self, result: DomainResponse<()>) {
        *self.finish_result.lock() = result;
    }

    pub fn intro_finished(&self) -> bool {
        self.status
            .lock()
            .as_ref()
            .map(|status| status.is_app_intro_finished)
            .unwrap_or(false)
    }
}

#[async_trait]
impl AuthRepository for FakeAuth {
    async fn login(&self, username: &str, password: &str) -> DomainResponse<()> {
        self.logins
            .lock()
            .push((username.to_string(), password.to_string()));
        let result = self.login_result.lock().clone();
        if result.is_ok() {
            if let Ok(status) = self.status.lock().as_mut() {
                status.session_token = Some(format!("token-{}", username));
            }
        }
        result
    }

    async fn logout(&self) -> DomainResponse<()> {
        if let Ok(status) = self.status.lock().as_mut() {
            status.session_token = None;
        }
        Ok(())
    }

    async fn user_status(&self) -> DomainResponse<UserStatus> {
        self.status.lock().clone()
    }

    async fn finish_intro(&self) -> DomainResponse<()> {
        let result = self.finish_result.lock().clone();
        if result.is_ok() {
            if let Ok(status) = self.status.lock().as_mut() {
                status.is_app_intro_finished = true;
            }
        }
        result
    }
}
