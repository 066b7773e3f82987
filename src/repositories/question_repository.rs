use async_trait::async_trait;
use futures::TryStreamExt;
use mongodb::{
    bson::{doc, Document},
    options::{
        FindOneAndUpdateOptions, FindOneOptions, FindOptions, IndexOptions, ReturnDocument,
        UpdateOptions,
    },
    Collection, IndexModel,
};

use crate::{
    db::Database,
    errors::{AppError, AppResult},
    models::domain::{NewQuestion, Question},
};

const COUNTERS_COLLECTION: &str = "counters";

/// Durable question collection. Every listing is ordered by id ascending.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait QuestionRepository: Send + Sync {
    async fn list_all(&self) -> AppResult<Vec<Question>>;
    async fn list_by_category(&self, category_id: i64) -> AppResult<Vec<Question>>;
    /// Case-insensitive substring match on the question text.
    async fn search(&self, term: &str) -> AppResult<Vec<Question>>;
    async fn find_by_id(&self, id: i64) -> AppResult<Option<Question>>;
    async fn insert(&self, question: NewQuestion) -> AppResult<Question>;
    /// Fails with `NotFound` when no question has this id.
    async fn delete(&self, id: i64) -> AppResult<()>;
    async fn ping(&self) -> AppResult<()>;
}

pub struct MongoQuestionRepository {
    db: Database,
    collection: Collection<Question>,
    counters: Collection<Document>,
    collection_name: String,
}

impl MongoQuestionRepository {
    pub fn new(db: &Database, collection_name: &str) -> Self {
        Self {
            db: db.clone(),
            collection: db.get_collection(collection_name),
            counters: db.get_collection(COUNTERS_COLLECTION),
            collection_name: collection_name.to_string(),
        }
    }

    /// Creates the unique id index and lifts the id counter past any
    /// question that was loaded outside this service.
    pub async fn ensure_indexes(&self) -> AppResult<()> {
        log::info!("Creating indexes for {} collection", self.collection_name);

        let id_index = IndexModel::builder()
            .keys(doc! { "id": 1 })
            .options(
                IndexOptions::builder()
                    .unique(true)
                    .name("id_unique".to_string())
                    .build(),
            )
            .build();
        self.collection.create_index(id_index).await?;

        let category_index = IndexModel::builder()
            .keys(doc! { "category": 1, "id": 1 })
            .build();
        self.collection.create_index(category_index).await?;

        let highest = self
            .collection
            .find_one(doc! {})
            .with_options(FindOneOptions::builder().sort(doc! { "id": -1 }).build())
            .await?
            .map(|q| q.id)
            .unwrap_or(0);

        self.counters
            .update_one(
                doc! { "_id": &self.collection_name },
                doc! { "$max": { "seq": highest } },
            )
            .with_options(UpdateOptions::builder().upsert(true).build())
            .await?;

        log::info!(
            "Indexes ready for {} collection (highest id {})",
            self.collection_name,
            highest
        );
        Ok(())
    }

    async fn next_id(&self) -> AppResult<i64> {
        let options = FindOneAndUpdateOptions::builder()
            .upsert(true)
            .return_document(ReturnDocument::After)
            .build();

        let counter = self
            .counters
            .find_one_and_update(
                doc! { "_id": &self.collection_name },
                doc! { "$inc": { "seq": 1_i64 } },
            )
            .with_options(options)
            .await?
            .ok_or_else(|| AppError::DatabaseError("Id counter was not returned".to_string()))?;

        Ok(counter.get_i64("seq")?)
    }

    async fn find_sorted(&self, filter: Document) -> AppResult<Vec<Question>> {
        let find_options = FindOptions::builder().sort(doc! { "id": 1 }).build();

        let cursor = self.collection.find(filter).with_options(find_options).await?;
        let items: Vec<Question> = cursor.try_collect().await?;
        Ok(items)
    }
}

#[async_trait]
impl QuestionRepository for MongoQuestionRepository {
    async fn list_all(&self) -> AppResult<Vec<Question>> {
        self.find_sorted(doc! {}).await
    }

    async fn list_by_category(&self, category_id: i64) -> AppResult<Vec<Question>> {
        self.find_sorted(doc! { "category": category_id }).await
    }

    async fn search(&self, term: &str) -> AppResult<Vec<Question>> {
        // The term is matched literally, never as a pattern.
        let pattern = regex::escape(term);
        self.find_sorted(doc! { "question": { "$regex": pattern, "$options": "i" } })
            .await
    }

    async fn find_by_id(&self, id: i64) -> AppResult<Option<Question>> {
        let question = self.collection.find_one(doc! { "id": id }).await?;
        Ok(question)
    }

    async fn insert(&self, question: NewQuestion) -> AppResult<Question> {
        let id = self.next_id().await?;
        let question = question.into_question(id);

        self.collection.insert_one(&question).await?;
        log::debug!("Inserted question {} into {}", id, self.collection_name);

        Ok(question)
    }

    async fn delete(&self, id: i64) -> AppResult<()> {
        let result = self.collection.delete_one(doc! { "id": id }).await?;

        if result.deleted_count == 0 {
            return Err(AppError::NotFound(format!(
                "Question with id '{}' not found",
                id
            )));
        }

        Ok(())
    }

    async fn ping(&self) -> AppResult<()> {
        self.db.health_check().await
    }
}
