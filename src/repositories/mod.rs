pub mod category_repository;
pub mod in_memory;
pub mod question_repository;
pub mod seed;

pub use category_repository::{CategoryRepository, MongoCategoryRepository};
pub use in_memory::{InMemoryCategoryRepository, InMemoryQuestionRepository};
pub use question_repository::{MongoQuestionRepository, QuestionRepository};
