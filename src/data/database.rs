//! Embedded relational store for cart, wishlist and category selection.
//!
//! Three tables, each keyed by a unique product id or category name. Rows
//! are only inserted or deleted; duplicates are prevented by the key
//! constraint, not by application locking.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use parking_lot::Mutex;
use rusqlite::{params, Connection};
use thiserror::Error;

use crate::domain::{CartItem, DomainError, WishlistItem};

/// Errors raised by local persistence.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Database error: {0}")]
    Sqlite(#[from] rusqlite::Error),

    #[error("I/O error on '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse '{path}': {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Failed to serialize preferences: {0}")]
    Serialize(#[from] toml::ser::Error),

    #[error("Storage task failed: {0}")]
    Task(String),
}

impl From<StorageError> for DomainError {
    fn from(err: StorageError) -> Self {
        tracing::warn!(error = %err, "Local storage failure");
        DomainError::generic(err.to_string())
    }
}

const SCHEMA: &str = r#"
CREATE TABLE IF NOT EXISTS cart_items (
    product_id INTEGER PRIMARY KEY NOT NULL,
    title TEXT NOT NULL,
    price REAL NOT NULL,
    category TEXT NOT NULL,
    image TEXT NOT NULL
);

CREATE TABLE IF NOT EXISTS wishlist_items (
    product_id INTEGER PRIMARY KEY NOT NULL,
    title TEXT NOT NULL,
    price REAL NOT NULL,
    category TEXT NOT NULL,
    image TEXT NOT NULL
);

CREATE TABLE IF NOT EXISTS selected_categories (
    category TEXT PRIMARY KEY NOT NULL
);
"#;

/// Shared handle to the SQLite connection.
///
/// Queries run on Tokio's blocking pool; the connection mutex makes each
/// statement atomic with respect to the others.
#[derive(Clone)]
pub struct LocalDatabase {
    conn: Arc<Mutex<Connection>>,
}

impl LocalDatabase {
    pub fn open(db_path: &Path) -> Result<Self, StorageError> {
        if let Some(parent) = db_path.parent() {
            std::fs::create_dir_all(parent).map_err(|source| StorageError::Io {
                path: parent.to_path_buf(),
                source,
            })?;
        }
        let conn = Connection::open(db_path)?;
        Self::with_connection(conn)
    }

    pub fn open_in_memory() -> Result<Self, StorageError> {
        Self::with_connection(Connection::open_in_memory()?)
    }

    fn with_connection(conn: Connection) -> Result<Self, StorageError> {
        conn.execute_batch(SCHEMA)?;
        Ok(Self {
            conn: Arc::new(Mutex::new(conn)),
        })
    }

    async fn run<T, F>(&self, f: F) -> Result<T, StorageError>
    where
        T: Send + 'static,
        F: FnOnce(&Connection) -> rusqlite::Result<T> + Send + 'static,
    {
        let conn = Arc::clone(&self.conn);
        tokio::task::spawn_blocking(move || {
            let conn = conn.lock();
            f(&conn).map_err(StorageError::from)
        })
        .await
        .map_err(|e| StorageError::Task(e.to_string()))?
    }

    pub async fn cart_items(&self) -> Result<Vec<CartItem>, StorageError> {
        self.run(|conn| {
            let mut stmt = conn.prepare(
                "SELECT product_id, title, price, category, image FROM cart_items ORDER BY rowid",
            )?;
            let rows = stmt.query_map([], |row| {
                Ok(CartItem {
                    product_id: row.get::<_, i64>(0)? as u64,
                    title: row.get(1)?,
                    price: row.get(2)?,
                    category: row.get(3)?,
                    image: row.get(4)?,
                })
            })?;
            rows.collect()
        })
        .await
    }

    /// Returns `false` when the product was already in the cart.
    pub async fn insert_cart_item(&self, item: CartItem) -> Result<bool, StorageError> {
        self.run(move |conn| {
            let inserted = conn.execute(
                "INSERT OR IGNORE INTO cart_items (product_id, title, price, category, image)
                 VALUES (?1, ?2, ?3, ?4, ?5)",
                params![
                    item.product_id as i64,
                    item.title,
                    item.price,
                    item.category,
                    item.image
                ],
            )?;
            Ok(inserted == 1)
        })
        .await
    }

    /// Returns `false` when the product was not in the cart.
    pub async fn delete_cart_item(&self, product_id: u64) -> Result<bool, StorageError> {
        self.run(move |conn| {
            let deleted = conn.execute(
                "DELETE FROM cart_items WHERE product_id = ?1",
                params![product_id as i64],
            )?;
            Ok(deleted == 1)
        })
        .await
    }

    /// Wishlist rows with their cart membership resolved.
    pub async fn wishlist_items(&self) -> Result<Vec<WishlistItem>, StorageError> {
        self.run(|conn| {
            let mut stmt = conn.prepare(
                "SELECT w.product_id, w.title, w.price, w.category, w.image,
                        c.product_id IS NOT NULL
                 FROM wishlist_items w
                 LEFT JOIN cart_items c ON c.product_id = w.product_id
                 ORDER BY w.rowid",
            )?;
            let rows = stmt.query_map([], |row| {
                Ok(WishlistItem {
                    product_id: row.get::<_, i64>(0)? as u64,
                    title: row.get(1)?,
                    price: row.get(2)?,
                    category: row.get(3)?,
                    image: row.get(4)?,
                    is_added_to_cart: row.get(5)?,
                })
            })?;
            rows.collect()
        })
        .await
    }

    /// Returns `false` when the product was already wish-listed.
    pub async fn insert_wishlist_item(&self, item: WishlistItem) -> Result<bool, StorageError> {
        self.run(move |conn| {
            let inserted = conn.execute(
                "INSERT OR IGNORE INTO wishlist_items (product_id, title, price, category, image)
                 VALUES (?1, ?2, ?3, ?4, ?5)",
                params![
                    item.product_id as i64,
                    item.title,
                    item.price,
                    item.category,
                    item.image
                ],
            )?;
            Ok(inserted == 1)
        })
        .await
    }

    /// Returns `false` when the product was not wish-listed.
    pub async fn delete_wishlist_item(&self, product_id: u64) -> Result<bool, StorageError> {
        self.run(move |conn| {
            let deleted = conn.execute(
                "DELETE FROM wishlist_items WHERE product_id = ?1",
                params![product_id as i64],
            )?;
            Ok(deleted == 1)
        })
        .await
    }

    pub async fn selected_categories(&self) -> Result<Vec<String>, StorageError> {
        self.run(|conn| {
            let mut stmt =
                conn.prepare("SELECT category FROM selected_categories ORDER BY rowid")?;
            let rows = stmt.query_map([], |row| row.get(0))?;
            rows.collect()
        })
        .await
    }

    pub async fn insert_selected_category(&self, category: String) -> Result<bool, StorageError> {
        self.run(move |conn| {
            let inserted = conn.execute(
                "INSERT OR IGNORE INTO selected_categories (category) VALUES (?1)",
                params![category],
            )?;
            Ok(inserted == 1)
        })
        .await
    }

    pub async fn delete_selected_category(&self, category: String) -> Result<bool, StorageError> {
        self.run(move |conn| {
            let deleted = conn.execute(
                "DELETE FROM selected_categories WHERE category = ?1",
                params![category],
            )?;
            Ok(deleted == 1)
        })
        .await
    }
}
