pub mod category_handler;
pub mod health_handler;
pub mod question_handler;
pub mod quiz_handler;

use actix_web::{web, HttpResponse};

pub use category_handler::{get_categories, get_questions_by_category};
pub use health_handler::{health_check, health_check_live, health_check_ready};
pub use question_handler::{create_question, delete_question, get_questions, search_questions};
pub use quiz_handler::next_quiz_question;

use crate::errors::AppError;

/// Registers every route plus JSON error translation for extractor failures
/// and unknown paths.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(
        web::JsonConfig::default().error_handler(|err, _req| AppError::from(err).into()),
    )
    .app_data(
        web::PathConfig::default()
            .error_handler(|err, _req| AppError::NotFound(err.to_string()).into()),
    )
    .service(health_check)
    .service(health_check_live)
    .service(health_check_ready)
    .service(get_categories)
    .service(get_questions_by_category)
    .service(get_questions)
    .service(create_question)
    .service(search_questions)
    .service(delete_question)
    .service(next_quiz_question)
    .default_service(web::to(not_found));
}

async fn not_found() -> Result<HttpResponse, AppError> {
    Err(AppError::NotFound("Resource not found".to_string()))
}
