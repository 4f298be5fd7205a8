//! Question endpoints
//!
//! Every listing returns one page of `QUESTIONS_PER_PAGE` records and a
//! `total_questions` count of the whole filtered set.

use std::collections::BTreeMap;
use std::sync::Arc;

use axum::{
    extract::State,
    routing::{delete, get, post},
    Json, Router,
};
use serde::Serialize;

use crate::http::error::ApiError;
use crate::db::DbError;
use crate::http::extractors::{JsonBody, PageQuery, PathId};
use crate::http::server::AppState;
use crate::models::{
    category_map, CreateQuestionRequest, NewQuestion, Question, SearchRequest, SearchTerm,
};

/// GET /questions response
#[derive(Debug, Serialize)]
pub struct QuestionsResponse {
    pub success: bool,
    pub questions: Vec<Question>,
    pub total_questions: usize,
    pub categories: BTreeMap<i32, String>,
}

/// Search and per-category listing response
#[derive(Debug, Serialize)]
pub struct FilteredQuestionsResponse {
    pub success: bool,
    pub questions: Vec<Question>,
    pub total_questions: usize,
    /// Always serialized, `null` for searches
    pub current_category: Option<i32>,
}

/// DELETE /questions/{id} response
#[derive(Debug, Serialize)]
pub struct DeleteQuestionResponse {
    pub success: bool,
    pub deleted: i32,
    pub questions: Vec<Question>,
    pub total_questions: usize,
}

/// POST /questions/create response
#[derive(Debug, Serialize)]
pub struct CreateQuestionResponse {
    pub success: bool,
    pub created: i32,
    pub questions: Vec<Question>,
    pub total_questions: usize,
}

/// GET /questions - paginated list of all questions
async fn list_questions(
    State(state): State<Arc<AppState>>,
    PageQuery(page): PageQuery,
) -> Result<Json<QuestionsResponse>, ApiError> {
    let questions = state.store.questions().await?;
    let categories = state.store.categories().await?;

    Ok(Json(QuestionsResponse {
        success: true,
        questions: page.apply(&questions),
        total_questions: questions.len(),
        categories: category_map(&categories),
    }))
}

/// DELETE /questions/{id} - remove a question, return the remaining page
async fn delete_question(
    State(state): State<Arc<AppState>>,
    PathId(id): PathId,
    PageQuery(page): PageQuery,
) -> Result<Json<DeleteQuestionResponse>, ApiError> {
    let deleted = state.store.delete_question(id).await?;
    tracing::info!(id = deleted.id, "Deleted question");

    let remaining = state.store.questions().await?;

    Ok(Json(DeleteQuestionResponse {
        success: true,
        deleted: deleted.id,
        questions: page.apply(&remaining),
        total_questions: remaining.len(),
    }))
}

/// POST /questions/create - insert a question
async fn create_question(
    State(state): State<Arc<AppState>>,
    PageQuery(page): PageQuery,
    JsonBody(req): JsonBody<CreateQuestionRequest>,
) -> Result<Json<CreateQuestionResponse>, ApiError> {
    // Non-integer columns fail like any other rejected insert
    let new = NewQuestion::try_from(req)
        .map_err(|e| ApiError::Store(DbError::Constraint(e.to_string())))?;
    let created = state.store.create_question(new).await?;
    tracing::info!(id = created.id, category = created.category, "Created question");

    let questions = state.store.questions().await?;

    Ok(Json(CreateQuestionResponse {
        success: true,
        created: created.id,
        questions: page.apply(&questions),
        total_questions: questions.len(),
    }))
}

/// POST /questions/search - case-insensitive substring search on question text
async fn search_questions(
    State(state): State<Arc<AppState>>,
    PageQuery(page): PageQuery,
    JsonBody(req): JsonBody<SearchRequest>,
) -> Result<Json<FilteredQuestionsResponse>, ApiError> {
    let term = SearchTerm::try_from(req)?;
    let matches = state.store.search_questions(&term).await?;
    tracing::debug!(term = term.as_str(), total = matches.len(), "Search complete");

    Ok(Json(FilteredQuestionsResponse {
        success: true,
        questions: page.apply(&matches),
        total_questions: matches.len(),
        current_category: None,
    }))
}

/// Question routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/questions", get(list_questions))
        .route("/questions/{id}", delete(delete_question))
        .route("/questions/create", post(create_question))
        .route("/questions/search", post(search_questions))
}
