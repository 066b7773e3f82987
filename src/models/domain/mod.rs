pub mod category;
pub mod question;
pub mod quiz;
pub use category::Category;
pub use question::{NewQuestion, Question};
pub use quiz::{CategorySelector, QuizOutcome, QuizSelector};
