use actix_web::{delete, get, post, web, HttpResponse};

use crate::{
    app_state::AppState,
    errors::AppError,
    models::dto::request::{CreateQuestionRequest, PageParams, SearchRequest},
};

#[get("/questions")]
pub async fn get_questions(
    state: web::Data<AppState>,
    query: web::Query<PageParams>,
) -> Result<HttpResponse, AppError> {
    let response = state.question_service.list_page(query.page()).await?;
    Ok(HttpResponse::Ok().json(response))
}

#[post("/questions")]
pub async fn create_question(
    state: web::Data<AppState>,
    request: web::Json<CreateQuestionRequest>,
) -> Result<HttpResponse, AppError> {
    let response = state.question_service.create(request.into_inner()).await?;
    Ok(HttpResponse::Ok().json(response))
}

#[delete("/questions/{id}")]
pub async fn delete_question(
    state: web::Data<AppState>,
    id: web::Path<i64>,
) -> Result<HttpResponse, AppError> {
    let response = state.question_service.delete(id.into_inner()).await?;
    Ok(HttpResponse::Ok().json(response))
}

#[post("/questions/search")]
pub async fn search_questions(
    state: web::Data<AppState>,
    request: web::Json<SearchRequest>,
) -> Result<HttpResponse, AppError> {
    let response = state
        .question_service
        .search(request.search_term.as_deref())
        .await?;
    Ok(HttpResponse::Ok().json(response))
}
