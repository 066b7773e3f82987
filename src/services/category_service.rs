use std::sync::Arc;

use crate::{
    errors::{AppError, AppResult},
    models::dto::response::CategoryMap,
    repositories::CategoryRepository,
};

pub struct CategoryService {
    repository: Arc<dyn CategoryRepository>,
}

impl CategoryService {
    pub fn new(repository: Arc<dyn CategoryRepository>) -> Self {
        Self { repository }
    }

    pub async fn category_map(&self) -> AppResult<CategoryMap> {
        let categories = self.repository.list_all().await?;
        Ok(categories.into_iter().map(|c| (c.id, c.kind)).collect())
    }

    pub async fn category_name(&self, id: i64) -> AppResult<String> {
        self.repository
            .find_by_id(id)
            .await?
            .map(|c| c.kind)
            .ok_or_else(|| AppError::NotFound(format!("Category with id '{}' not found", id)))
    }
}
