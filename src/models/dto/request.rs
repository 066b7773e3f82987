use serde::Deserialize;
use validator::{Validate, ValidationError};

use crate::models::domain::{CategorySelector, NewQuestion, QuizSelector};
use crate::services::pagination::parse_page;

/// `?page=N` on the question listing. Kept as raw text so a non-numeric
/// value falls back to the first page instead of failing extraction.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PageParams {
    pub page: Option<String>,
}

impl PageParams {
    pub fn page(&self) -> i64 {
        parse_page(self.page.as_deref())
    }
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateQuestionRequest {
    #[validate(length(min = 1, max = 1000), custom(function = "not_blank"))]
    pub question: String,

    #[validate(length(min = 1, max = 1000), custom(function = "not_blank"))]
    pub answer: String,

    #[validate(range(min = 1))]
    pub category: i64,

    #[validate(range(min = 1, max = 5))]
    pub difficulty: i32,
}

impl From<CreateQuestionRequest> for NewQuestion {
    fn from(request: CreateQuestionRequest) -> Self {
        NewQuestion {
            question: request.question,
            answer: request.answer,
            category: request.category,
            difficulty: request.difficulty,
        }
    }
}

fn not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new("blank"));
    }
    Ok(())
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct SearchRequest {
    #[serde(rename = "searchTerm", default)]
    pub search_term: Option<String>,
}

/// Only the id drives selection; the display `type` the client sends along
/// is ignored.
#[derive(Debug, Clone, Deserialize)]
pub struct QuizCategoryInput {
    pub id: i64,
}

/// Body of `POST /quizzes`. `previous_questions` must be plain integer ids;
/// anything else fails deserialization and is reported as invalid input.
#[derive(Debug, Clone, Deserialize)]
pub struct QuizRequest {
    #[serde(default)]
    pub previous_questions: Vec<i64>,
    pub quiz_category: QuizCategoryInput,
}

impl From<QuizRequest> for QuizSelector {
    fn from(request: QuizRequest) -> Self {
        QuizSelector::new(
            CategorySelector::from_id(request.quiz_category.id),
            request.previous_questions,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use validator::Validate;

    fn create_request(difficulty: i32) -> CreateQuestionRequest {
        CreateQuestionRequest {
            question: "is this test question?".to_string(),
            answer: "True".to_string(),
            category: 5,
            difficulty,
        }
    }

    #[test]
    fn test_valid_create_question_request() {
        assert!(create_request(1).validate().is_ok());
        assert!(create_request(5).validate().is_ok());
    }

    #[test]
    fn test_difficulty_out_of_range() {
        assert!(create_request(0).validate().is_err());
        assert!(create_request(6).validate().is_err());
    }

    #[test]
    fn test_empty_answer_rejected() {
        let mut request = create_request(2);
        request.answer = String::new();
        assert!(request.validate().is_err());
    }

    #[test]
    fn test_whitespace_only_text_rejected() {
        let mut request = create_request(2);
        request.question = "   ".to_string();
        assert!(request.validate().is_err());

        let mut request = create_request(2);
        request.answer = "\t\n".to_string();
        assert!(request.validate().is_err());
    }

    #[test]
    fn test_create_request_keeps_text_as_given() {
        let mut request = create_request(3);
        request.question = "  Who?  ".to_string();
        request.answer = " Me ".to_string();

        let new_question = NewQuestion::from(request);
        assert_eq!(new_question.question, "  Who?  ");
        assert_eq!(new_question.answer, " Me ");
    }

    #[test]
    fn test_page_params_default_to_first_page() {
        assert_eq!(PageParams::default().page(), 1);
        assert_eq!(PageParams { page: Some("abc".into()) }.page(), 1);
        assert_eq!(PageParams { page: Some("3".into()) }.page(), 3);
    }

    #[test]
    fn test_quiz_request_builds_selector() {
        let request: QuizRequest = serde_json::from_str(
            r#"{"previous_questions": [16, 19, 16], "quiz_category": {"type": "Art", "id": 2}}"#,
        )
        .unwrap();

        let selector = QuizSelector::from(request);
        assert_eq!(selector.category, CategorySelector::Category(2));
        assert_eq!(selector.excluded.len(), 2);
        assert!(selector.excluded.contains(&16));
    }

    #[test]
    fn test_quiz_request_rejects_object_entries() {
        let parsed = serde_json::from_str::<QuizRequest>(
            r#"{"previous_questions": [1, {"id": 2}], "quiz_category": {"id": 0}}"#,
        );
        assert!(parsed.is_err());
    }

    #[test]
    fn test_search_request_uses_camel_case_key() {
        let request: SearchRequest = serde_json::from_str(r#"{"searchTerm": "What"}"#).unwrap();
        assert_eq!(request.search_term.as_deref(), Some("What"));

        let empty: SearchRequest = serde_json::from_str("{}").unwrap();
        assert!(empty.search_term.is_none());
    }
}
