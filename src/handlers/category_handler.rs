use actix_web::{get, web, HttpResponse};

use crate::{app_state::AppState, errors::AppError, models::dto::response::CategoriesResponse};

#[get("/categories")]
pub async fn get_categories(state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
    let categories = state.category_service.category_map().await?;
    Ok(HttpResponse::Ok().json(CategoriesResponse {
        success: true,
        categories,
    }))
}

#[get("/categories/{id}/questions")]
pub async fn get_questions_by_category(
    state: web::Data<AppState>,
    id: web::Path<i64>,
) -> Result<HttpResponse, AppError> {
    let response = state.question_service.by_category(id.into_inner()).await?;
    Ok(HttpResponse::Ok().json(response))
}
