use crate::domain::{replace_by_key, CategoryItem};
use crate::mvi::ViewData;

#[derive(Debug, Clone, PartialEq, Default)]
pub struct CategoriesModel {
    pub categories: Vec<CategoryItem>,
}

impl ViewData for CategoriesModel {}

impl CategoriesModel {
    pub fn category(&self, name: &str) -> Option<&CategoryItem> {
        self.categories.iter().find(|item| item.category == name)
    }

    pub fn selected_count(&self) -> usize {
        self.categories.iter().filter(|item| item.is_selected).count()
    }

    pub fn with_category(mut self, item: &CategoryItem) -> Self {
        replace_by_key(&mut self.categories, item, |category| category.category.clone());
        self
    }
}
