use std::collections::BTreeMap;

use serde::Serialize;

use crate::models::domain::{Question, QuizOutcome};

/// Category id to display name, ordered by id.
pub type CategoryMap = BTreeMap<i64, String>;

#[derive(Debug, Serialize)]
pub struct CategoriesResponse {
    pub success: bool,
    pub categories: CategoryMap,
}

#[derive(Debug, Serialize)]
pub struct QuestionPageResponse {
    pub success: bool,
    pub questions: Vec<Question>,
    pub total_questions: usize,
    pub categories: CategoryMap,
    pub current_category: Vec<i64>,
}

/// Shared by search and by-category lookups. `current_category` is null for
/// search results.
#[derive(Debug, Serialize)]
pub struct QuestionListResponse {
    pub success: bool,
    pub questions: Vec<Question>,
    pub total_questions: usize,
    pub current_category: Option<String>,
}

impl QuestionListResponse {
    pub fn new(questions: Vec<Question>, current_category: Option<String>) -> Self {
        Self {
            success: true,
            total_questions: questions.len(),
            questions,
            current_category,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct CreateQuestionResponse {
    pub success: bool,
    pub created: i64,
    pub question: Question,
}

#[derive(Debug, Serialize)]
pub struct DeleteQuestionResponse {
    pub success: bool,
    pub id: i64,
}

#[derive(Debug, Serialize)]
pub struct QuizResponse {
    pub success: bool,
    pub question: Option<Question>,
    pub exhausted: bool,
}

impl From<QuizOutcome> for QuizResponse {
    fn from(outcome: QuizOutcome) -> Self {
        QuizResponse {
            success: true,
            exhausted: outcome.is_exhausted(),
            question: outcome.into_question(),
        }
    }
}
