use std::{collections::BTreeMap, sync::Arc};

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::{
    errors::{AppError, AppResult},
    models::domain::{Category, NewQuestion, Question},
    repositories::{
        seed::{default_categories, sample_questions},
        CategoryRepository, QuestionRepository,
    },
};

struct QuestionTable {
    rows: BTreeMap<i64, Question>,
    next_id: i64,
}

/// Process-local question store. Writes hold the write lock for their whole
/// duration, so readers only ever see complete records.
#[derive(Clone)]
pub struct InMemoryQuestionRepository {
    table: Arc<RwLock<QuestionTable>>,
}

impl InMemoryQuestionRepository {
    pub fn new() -> Self {
        Self::with_questions(Vec::new())
    }

    pub fn with_questions(questions: Vec<Question>) -> Self {
        let next_id = questions.iter().map(|q| q.id).max().unwrap_or(0) + 1;
        let rows = questions.into_iter().map(|q| (q.id, q)).collect();

        Self {
            table: Arc::new(RwLock::new(QuestionTable { rows, next_id })),
        }
    }

    pub fn with_sample_data() -> Self {
        Self::with_questions(sample_questions())
    }

    async fn collect_where<F>(&self, predicate: F) -> Vec<Question>
    where
        F: Fn(&Question) -> bool,
    {
        let table = self.table.read().await;
        table
            .rows
            .values()
            .filter(|q| predicate(q))
            .cloned()
            .collect()
    }
}

impl Default for InMemoryQuestionRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl QuestionRepository for InMemoryQuestionRepository {
    async fn list_all(&self) -> AppResult<Vec<Question>> {
        Ok(self.collect_where(|_| true).await)
    }

    async fn list_by_category(&self, category_id: i64) -> AppResult<Vec<Question>> {
        Ok(self.collect_where(|q| q.category == category_id).await)
    }

    async fn search(&self, term: &str) -> AppResult<Vec<Question>> {
        Ok(self.collect_where(|q| q.matches_term(term)).await)
    }

    async fn find_by_id(&self, id: i64) -> AppResult<Option<Question>> {
        let table = self.table.read().await;
        Ok(table.rows.get(&id).cloned())
    }

    async fn insert(&self, question: NewQuestion) -> AppResult<Question> {
        let mut table = self.table.write().await;
        let question = question.into_question(table.next_id);

        table.next_id += 1;
        table.rows.insert(question.id, question.clone());
        Ok(question)
    }

    async fn delete(&self, id: i64) -> AppResult<()> {
        let mut table = self.table.write().await;
        if table.rows.remove(&id).is_none() {
            return Err(AppError::NotFound(format!(
                "Question with id '{}' not found",
                id
            )));
        }
        Ok(())
    }

    async fn ping(&self) -> AppResult<()> {
        Ok(())
    }
}

#[derive(Clone, Default)]
pub struct InMemoryCategoryRepository {
    categories: Arc<RwLock<BTreeMap<i64, Category>>>,
}

impl InMemoryCategoryRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_categories(categories: Vec<Category>) -> Self {
        Self {
            categories: Arc::new(RwLock::new(
                categories.into_iter().map(|c| (c.id, c)).collect(),
            )),
        }
    }

    pub fn with_defaults() -> Self {
        Self::with_categories(default_categories())
    }
}

#[async_trait]
impl CategoryRepository for InMemoryCategoryRepository {
    async fn list_all(&self) -> AppResult<Vec<Category>> {
        let categories = self.categories.read().await;
        Ok(categories.values().cloned().collect())
    }

    async fn find_by_id(&self, id: i64) -> AppResult<Option<Category>> {
        let categories = self.categories.read().await;
        Ok(categories.get(&id).cloned())
    }

    async fn ensure_defaults(&self) -> AppResult<usize> {
        let mut categories = self.categories.write().await;
        if !categories.is_empty() {
            return Ok(0);
        }

        let defaults = default_categories();
        let added = defaults.len();
        categories.extend(defaults.into_iter().map(|c| (c.id, c)));
        Ok(added)
    }
}
