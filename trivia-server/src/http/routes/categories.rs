//! Category endpoints

use std::collections::BTreeMap;
use std::sync::Arc;

use axum::{
    extract::State,
    routing::get,
    Json, Router,
};
use serde::Serialize;

use super::questions::FilteredQuestionsResponse;
use crate::http::error::ApiError;
use crate::http::extractors::{PageQuery, PathId};
use crate::http::server::AppState;
use crate::models::{category_map, Category};

/// GET /categories response
#[derive(Debug, Serialize)]
pub struct CategoriesResponse {
    pub success: bool,
    /// `{id: type}` lookup
    pub categories: BTreeMap<i32, String>,
    /// Full records, in id order
    pub category: Vec<Category>,
    pub total_categories: usize,
}

/// GET /categories - every category; 404 when there are none
async fn list_categories(
    State(state): State<Arc<AppState>>,
) -> Result<Json<CategoriesResponse>, ApiError> {
    let categories = state.store.categories().await?;
    if categories.is_empty() {
        return Err(ApiError::NotFound {
            resource: "category",
            id: "*".into(),
        });
    }

    Ok(Json(CategoriesResponse {
        success: true,
        categories: category_map(&categories),
        total_categories: categories.len(),
        category: categories,
    }))
}

/// GET /categories/{id}/questions - paginated questions in one category
async fn category_questions(
    State(state): State<Arc<AppState>>,
    PathId(category_id): PathId,
    PageQuery(page): PageQuery,
) -> Result<Json<FilteredQuestionsResponse>, ApiError> {
    let questions = state.store.questions_in_category(category_id).await?;

    Ok(Json(FilteredQuestionsResponse {
        success: true,
        questions: page.apply(&questions),
        total_questions: questions.len(),
        current_category: Some(category_id),
    }))
}

/// Category routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/categories", get(list_categories))
        .route("/categories/{id}/questions", get(category_questions))
}
