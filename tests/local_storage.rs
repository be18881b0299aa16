mod common;

use common::{cart_item, wishlist_item};
use storefront::data::repository::{
    CartRepository, LocalCartRepository, LocalWishlistRepository, WishlistRepository,
};
use storefront::data::LocalDatabase;
use tempfile::TempDir;

fn temp_database() -> (TempDir, LocalDatabase) {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let db = LocalDatabase::open(&dir.path().join("nested").join("store.db"))
        .expect("Failed to open database");
    (dir, db)
}

#[tokio::test]
async fn cart_add_then_remove_leaves_table_unchanged() {
    let (_dir, db) = temp_database();
    let cart = LocalCartRepository::new(db);
    cart.add(cart_item(1)).await.unwrap();
    let before = cart.items().await.unwrap();

    assert!(cart.add(cart_item(2)).await.unwrap());
    assert!(cart.remove(2).await.unwrap());

    assert_eq!(cart.items().await.unwrap(), before);
}

#[tokio::test]
async fn wishlist_add_then_remove_leaves_table_unchanged() {
    let (_dir, db) = temp_database();
    let wishlist = LocalWishlistRepository::new(db);
    let before = wishlist.items().await.unwrap();

    assert!(wishlist.add(wishlist_item(8)).await.unwrap());
    assert!(wishlist.remove(8).await.unwrap());

    assert_eq!(wishlist.items().await.unwrap(), before);
}

#[tokio::test]
async fn duplicate_add_and_missing_remove_report_false() {
    let (_dir, db) = temp_database();
    let cart = LocalCartRepository::new(db);

    assert!(cart.add(cart_item(1)).await.unwrap());
    assert!(!cart.add(cart_item(1)).await.unwrap());
    assert!(!cart.remove(42).await.unwrap());
    assert_eq!(cart.items().await.unwrap().len(), 1);
}

#[tokio::test]
async fn wishlist_rows_know_cart_membership() {
    let (_dir, db) = temp_database();
    let wishlist = LocalWishlistRepository::new(db.clone());
    let cart = LocalCartRepository::new(db);

    wishlist.add(wishlist_item(1)).await.unwrap();
    wishlist.add(wishlist_item(2)).await.unwrap();
    cart.add(cart_item(2)).await.unwrap();

    let flags: Vec<(u64, bool)> = wishlist
        .items()
        .await
        .unwrap()
        .into_iter()
        .map(|item| (item.product_id, item.is_added_to_cart))
        .collect();
    assert_eq!(flags, vec![(1, false), (2, true)]);
}

#[tokio::test]
async fn database_survives_reopen() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("store.db");
    {
        let cart = LocalCartRepository::new(LocalDatabase::open(&path).unwrap());
        cart.add(cart_item(5)).await.unwrap();
    }
    let cart = LocalCartRepository::new(LocalDatabase::open(&path).unwrap());
    assert_eq!(cart.items().await.unwrap(), vec![cart_item(5)]);
}
