use actix_web::{post, web, HttpResponse};

use crate::{
    app_state::AppState,
    errors::AppError,
    models::dto::{request::QuizRequest, response::QuizResponse},
};

/// Next quiz question. Running out of questions is a normal response with
/// `question: null` and `exhausted: true`.
#[post("/quizzes")]
pub async fn next_quiz_question(
    state: web::Data<AppState>,
    request: web::Json<QuizRequest>,
) -> Result<HttpResponse, AppError> {
    let outcome = state
        .quiz_service
        .next_question(request.into_inner().into())
        .await?;
    Ok(HttpResponse::Ok().json(QuizResponse::from(outcome)))
}
