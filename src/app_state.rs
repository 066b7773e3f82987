use std::sync::Arc;

use rand::rngs::StdRng;

use crate::{
    config::{Config, StorageBackend},
    db::Database,
    errors::AppResult,
    repositories::{
        CategoryRepository, InMemoryCategoryRepository, InMemoryQuestionRepository,
        MongoCategoryRepository, MongoQuestionRepository, QuestionRepository,
    },
    services::{CategoryService, QuestionService, QuizService},
};

#[derive(Clone)]
pub struct AppState {
    pub category_service: Arc<CategoryService>,
    pub question_service: Arc<QuestionService>,
    pub quiz_service: Arc<QuizService>,
    pub config: Arc<Config>,
}

impl AppState {
    pub async fn new(config: Config) -> AppResult<Self> {
        let (questions, categories): (Arc<dyn QuestionRepository>, Arc<dyn CategoryRepository>) =
            match config.storage_backend {
                StorageBackend::Mongo => {
                    let db = Database::connect(&config).await?;

                    let question_repository =
                        MongoQuestionRepository::new(&db, &config.questions_collection);
                    question_repository.ensure_indexes().await?;

                    let category_repository =
                        MongoCategoryRepository::new(&db, &config.categories_collection);
                    category_repository.ensure_indexes().await?;

                    log::info!("Using MongoDB storage in '{}'", db.db_name());
                    (Arc::new(question_repository), Arc::new(category_repository))
                }
                StorageBackend::Memory => {
                    log::warn!("Using in-memory storage; changes are lost on restart");
                    (
                        Arc::new(InMemoryQuestionRepository::with_sample_data()),
                        Arc::new(InMemoryCategoryRepository::new()),
                    )
                }
            };

        if config.seed_categories {
            categories.ensure_defaults().await?;
        }

        Ok(Self::from_repositories(config, questions, categories, None))
    }

    /// Wires services over already-built repositories. Pass an `rng` to make
    /// quiz selection reproducible.
    pub fn from_repositories(
        config: Config,
        questions: Arc<dyn QuestionRepository>,
        categories: Arc<dyn CategoryRepository>,
        rng: Option<StdRng>,
    ) -> Self {
        let category_service = Arc::new(CategoryService::new(categories));
        let question_service = Arc::new(QuestionService::new(questions, category_service.clone()));
        let quiz_service = Arc::new(match rng {
            Some(rng) => QuizService::with_rng(question_service.clone(), rng),
            None => QuizService::new(question_service.clone()),
        });

        Self {
            category_service,
            question_service,
            quiz_service,
            config: Arc::new(config),
        }
    }
}
