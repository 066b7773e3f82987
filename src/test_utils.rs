#[cfg(test)]
pub mod fixtures {
    use std::sync::Arc;

    use rand::{rngs::StdRng, SeedableRng};

    use crate::{
        app_state::AppState,
        config::Config,
        repositories::{InMemoryCategoryRepository, InMemoryQuestionRepository},
        services::{CategoryService, QuestionService},
    };

    /// Question service over the sample trivia set and default categories.
    pub fn sample_question_service() -> QuestionService {
        let categories = Arc::new(CategoryService::new(Arc::new(
            InMemoryCategoryRepository::with_defaults(),
        )));
        QuestionService::new(
            Arc::new(InMemoryQuestionRepository::with_sample_data()),
            categories,
        )
    }

    /// Full application state with a fixed quiz seed.
    pub fn sample_state() -> AppState {
        AppState::from_repositories(
            Config::test_config(),
            Arc::new(InMemoryQuestionRepository::with_sample_data()),
            Arc::new(InMemoryCategoryRepository::with_defaults()),
            Some(StdRng::seed_from_u64(42)),
        )
    }
}

#[cfg(test)]
pub mod test_helpers {
    use actix_web::http::StatusCode;

    /// Asserts that a status code represents an error (4xx or 5xx)
    pub fn assert_error_status(status: StatusCode) {
        assert!(
            status.is_client_error() || status.is_server_error(),
            "Expected error status, got: {}",
            status
        );
    }

    /// Asserts that a status code represents success (2xx)
    pub fn assert_success_status(status: StatusCode) {
        assert!(
            status.is_success(),
            "Expected success status, got: {}",
            status
        );
    }
}

#[cfg(test)]
mod tests {
    use super::fixtures::*;

    #[tokio::test]
    async fn test_sample_state_has_seed_data() {
        let state = sample_state();
        let page = state.question_service.list_page(1).await.unwrap();
        assert_eq!(page.total_questions, 19);
        assert_eq!(page.categories.len(), 6);
    }
}
