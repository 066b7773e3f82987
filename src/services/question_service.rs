use std::sync::Arc;

use validator::Validate;

use crate::{
    errors::{AppError, AppResult},
    models::{
        domain::{CategorySelector, NewQuestion, Question},
        dto::{
            request::CreateQuestionRequest,
            response::{
                CreateQuestionResponse, DeleteQuestionResponse, QuestionListResponse,
                QuestionPageResponse,
            },
        },
    },
    repositories::QuestionRepository,
    services::{
        category_service::CategoryService,
        pagination::{paginate, QUESTIONS_PER_PAGE},
    },
};

/// Listing, search and category filtering over the question collection.
/// Results always keep the store's id order.
pub struct QuestionService {
    repository: Arc<dyn QuestionRepository>,
    categories: Arc<CategoryService>,
}

impl QuestionService {
    pub fn new(repository: Arc<dyn QuestionRepository>, categories: Arc<CategoryService>) -> Self {
        Self {
            repository,
            categories,
        }
    }

    pub async fn list_page(&self, page: i64) -> AppResult<QuestionPageResponse> {
        let all = self.repository.list_all().await?;
        let questions = paginate(&all, page, QUESTIONS_PER_PAGE).to_vec();

        if questions.is_empty() {
            return Err(AppError::NotFound(format!("No questions on page {}", page)));
        }

        let categories = self.categories.category_map().await?;

        Ok(QuestionPageResponse {
            success: true,
            current_category: questions.iter().map(|q| q.category).collect(),
            total_questions: all.len(),
            questions,
            categories,
        })
    }

    pub async fn create(&self, request: CreateQuestionRequest) -> AppResult<CreateQuestionResponse> {
        request.validate()?;

        let question = self.repository.insert(NewQuestion::from(request)).await?;
        log::info!(
            "Created question {} in category {}",
            question.id,
            question.category
        );

        Ok(CreateQuestionResponse {
            success: true,
            created: question.id,
            question,
        })
    }

    pub async fn delete(&self, id: i64) -> AppResult<DeleteQuestionResponse> {
        self.repository.delete(id).await?;
        log::info!("Deleted question {}", id);

        Ok(DeleteQuestionResponse { success: true, id })
    }

    pub async fn search(&self, term: Option<&str>) -> AppResult<QuestionListResponse> {
        let term = term.unwrap_or_default();
        if term.trim().is_empty() {
            return Err(AppError::NotFound(
                "A non-empty searchTerm is required".to_string(),
            ));
        }

        let questions = self.repository.search(term).await?;
        log::debug!("Search '{}' matched {} questions", term, questions.len());

        Ok(QuestionListResponse::new(questions, None))
    }

    /// Questions in one category. A category id with no questions is fine,
    /// but an id with no category record is `NotFound`.
    pub async fn by_category(&self, category_id: i64) -> AppResult<QuestionListResponse> {
        let questions = self.repository.list_by_category(category_id).await?;
        let name = self.categories.category_name(category_id).await?;

        Ok(QuestionListResponse::new(questions, Some(name)))
    }

    /// Every question a quiz may draw from for the given selector.
    pub async fn resolve_pool(&self, selector: CategorySelector) -> AppResult<Vec<Question>> {
        match selector {
            CategorySelector::All => self.repository.list_all().await,
            CategorySelector::Category(id) => self.repository.list_by_category(id).await,
        }
    }

    pub async fn health_check(&self) -> AppResult<()> {
        self.repository.ping().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        repositories::{
            question_repository::MockQuestionRepository, InMemoryCategoryRepository,
            InMemoryQuestionRepository,
        },
        test_utils::fixtures::sample_question_service,
    };

    fn create_request() -> CreateQuestionRequest {
        CreateQuestionRequest {
            question: "is this test question?".to_string(),
            answer: "True".to_string(),
            category: 5,
            difficulty: 1,
        }
    }

    fn service_with(repository: MockQuestionRepository) -> QuestionService {
        let categories = Arc::new(CategoryService::new(Arc::new(
            InMemoryCategoryRepository::with_defaults(),
        )));
        QuestionService::new(Arc::new(repository), categories)
    }

    #[tokio::test]
    async fn test_first_page_has_ten_questions() {
        let service = sample_question_service();
        let page = service.list_page(1).await.unwrap();

        assert_eq!(page.questions.len(), 10);
        assert_eq!(page.total_questions, 19);
        assert_eq!(page.categories.len(), 6);
        assert_eq!(
            page.current_category,
            page.questions.iter().map(|q| q.category).collect::<Vec<_>>()
        );
    }

    #[tokio::test]
    async fn test_page_beyond_range_is_not_found() {
        let service = sample_question_service();
        assert_eq!(service.list_page(2).await.unwrap().questions.len(), 9);
        assert!(matches!(service.list_page(3).await, Err(AppError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_create_then_list_grows_by_one() {
        let service = sample_question_service();
        let before = service.list_page(1).await.unwrap().total_questions;

        let created = service.create(create_request()).await.unwrap();
        let after = service.list_page(1).await.unwrap().total_questions;

        assert_eq!(after, before + 1);
        assert_eq!(created.question.question, "is this test question?");
        assert_eq!(created.question.category, 5);
        assert_eq!(created.question.difficulty, 1);
    }

    #[tokio::test]
    async fn test_create_rejects_invalid_difficulty() {
        let service = sample_question_service();
        let mut request = create_request();
        request.difficulty = 9;

        assert!(matches!(
            service.create(request).await,
            Err(AppError::ValidationError(_))
        ));
    }

    #[tokio::test]
    async fn test_create_rejects_blank_text() {
        let service = sample_question_service();
        let request = CreateQuestionRequest {
            question: "   ".to_string(),
            answer: "\t".to_string(),
            category: 1,
            difficulty: 1,
        };

        assert!(matches!(
            service.create(request).await,
            Err(AppError::ValidationError(_))
        ));
        assert_eq!(service.list_page(1).await.unwrap().total_questions, 19);
    }

    #[tokio::test]
    async fn test_create_stores_text_as_given() {
        let service = sample_question_service();
        let request = CreateQuestionRequest {
            question: "  Who?  ".to_string(),
            answer: " Me ".to_string(),
            category: 2,
            difficulty: 4,
        };

        let created = service.create(request).await.unwrap();
        assert_eq!(created.question.question, "  Who?  ");
        assert_eq!(created.question.answer, " Me ");
        assert_eq!(created.question.category, 2);
        assert_eq!(created.question.difficulty, 4);
    }

    #[tokio::test]
    async fn test_delete_then_list_excludes_question() {
        let service = sample_question_service();
        service.delete(5).await.unwrap();

        let remaining = service.resolve_pool(CategorySelector::All).await.unwrap();
        assert_eq!(remaining.len(), 18);
        assert!(remaining.iter().all(|q| q.id != 5));
    }

    #[tokio::test]
    async fn test_delete_missing_is_not_found() {
        let service = sample_question_service();
        assert!(matches!(service.delete(1000).await, Err(AppError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_search_what_matches_seven() {
        let service = sample_question_service();
        let result = service.search(Some("What")).await.unwrap();

        assert_eq!(result.total_questions, 7);
        assert_eq!(result.questions.len(), 7);
        assert!(result.current_category.is_none());
        assert!(result.questions.windows(2).all(|w| w[0].id < w[1].id));
    }

    #[tokio::test]
    async fn test_search_without_matches_is_empty() {
        let service = sample_question_service();
        let result = service.search(Some("BTS")).await.unwrap();
        assert_eq!(result.total_questions, 0);
    }

    #[tokio::test]
    async fn test_search_term_is_not_trimmed() {
        let service = sample_question_service();
        let result = service.search(Some("What ")).await.unwrap();

        // "...study of what?" and "...known as what?" have no trailing space
        let ids: Vec<i64> = result.questions.iter().map(|q| q.id).collect();
        assert_eq!(ids, vec![1, 4, 5, 8, 15]);
    }

    #[tokio::test]
    async fn test_blank_search_term_is_rejected() {
        let service = sample_question_service();
        assert!(matches!(service.search(None).await, Err(AppError::NotFound(_))));
        assert!(matches!(service.search(Some("  ")).await, Err(AppError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_by_category_returns_name_and_total() {
        let service = sample_question_service();
        let result = service.by_category(4).await.unwrap();

        assert_eq!(result.total_questions, 3);
        assert_eq!(result.current_category.as_deref(), Some("History"));
        assert!(result.questions.iter().all(|q| q.category == 4));
    }

    #[tokio::test]
    async fn test_by_unknown_category_is_not_found() {
        let service = sample_question_service();
        assert!(matches!(service.by_category(8).await, Err(AppError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_empty_but_known_category_succeeds() {
        let categories = Arc::new(CategoryService::new(Arc::new(
            InMemoryCategoryRepository::with_defaults(),
        )));
        let service = QuestionService::new(Arc::new(InMemoryQuestionRepository::new()), categories);

        let result = service.by_category(2).await.unwrap();
        assert_eq!(result.total_questions, 0);
        assert_eq!(result.current_category.as_deref(), Some("Art"));
    }

    #[tokio::test]
    async fn test_delete_storage_failure_propagates() {
        let mut repository = MockQuestionRepository::new();
        repository
            .expect_delete()
            .returning(|_| Err(AppError::DatabaseError("write failed".into())));

        let service = service_with(repository);
        assert!(matches!(
            service.delete(3).await,
            Err(AppError::DatabaseError(_))
        ));
    }

    #[tokio::test]
    async fn test_create_storage_failure_propagates() {
        let mut repository = MockQuestionRepository::new();
        repository
            .expect_insert()
            .times(1)
            .returning(|_| Err(AppError::DatabaseError("insert failed".into())));

        let service = service_with(repository);
        assert!(matches!(
            service.create(create_request()).await,
            Err(AppError::DatabaseError(_))
        ));
    }
}
