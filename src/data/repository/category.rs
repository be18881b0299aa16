use std::sync::Arc;

use async_trait::async_trait;

use crate::data::api::StoreApi;
use crate::data::database::LocalDatabase;
use crate::domain::{CategoryItem, DomainResponse};

#[async_trait]
pub trait CategoryRepository: Send + Sync {
    /// Remote categories with the local selection applied.
    async fn categories(&self) -> DomainResponse<Vec<CategoryItem>>;

    /// Names of the selected categories; empty means no filter.
    async fn selected(&self) -> DomainResponse<Vec<String>>;

    /// `Ok(false)` when the category was already selected.
    async fn select(&self, category: &str) -> DomainResponse<bool>;

    /// `Ok(false)` when the category was not selected.
    async fn deselect(&self, category: &str) -> DomainResponse<bool>;
}

pub struct DefaultCategoryRepository {
    api: Arc<dyn StoreApi>,
    db: LocalDatabase,
}

impl DefaultCategoryRepository {
    pub fn new(api: Arc<dyn StoreApi>, db: LocalDatabase) -> Self {
        Self { api, db }
    }
}

#[async_trait]
impl CategoryRepository for DefaultCategoryRepository {
    async fn categories(&self) -> DomainResponse<Vec<CategoryItem>> {
        let remote = self.api.categories().await?;
        let selected = self.db.selected_categories().await?;
        Ok(remote
            .into_iter()
            .map(|category| CategoryItem {
                is_selected: selected.contains(&category),
                category,
            })
            .collect())
    }

    async fn selected(&self) -> DomainResponse<Vec<String>> {
        Ok(self.db.selected_categories().await?)
    }

    async fn select(&self, category: &str) -> DomainResponse<bool> {
        Ok(self
            .db
            .insert_selected_category(category.to_string())
            .await?)
    }

    async fn deselect(&self, category: &str) -> DomainResponse<bool> {
        Ok(self
            .db
            .delete_selected_category(category.to_string())
            .await?)
    }
}
