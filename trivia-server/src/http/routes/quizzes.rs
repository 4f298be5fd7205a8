//! Quiz endpoint

use std::sync::Arc;

use axum::{extract::State, routing::post, Json, Router};
use serde::Serialize;

use crate::http::error::ApiError;
use crate::http::extractors::JsonBody;
use crate::http::server::AppState;
use crate::models::{select_question, Question, QuizQuery, QuizRequest, QuizScope};

/// POST /quizzes response
#[derive(Debug, Serialize)]
pub struct QuizResponse {
    pub success: bool,
    /// `null` once every candidate has been played
    pub question: Option<Question>,
}

/// POST /quizzes - next random unseen question for the chosen category
async fn next_question(
    State(state): State<Arc<AppState>>,
    JsonBody(req): JsonBody<QuizRequest>,
) -> Result<Json<QuizResponse>, ApiError> {
    let query = QuizQuery::try_from(req)?;

    let candidates = match query.scope {
        QuizScope::Any => state.store.questions().await?,
        QuizScope::Category(id) => state.store.questions_in_category(id).await?,
    };

    let question = select_question(candidates, &query.previous, &mut rand::thread_rng());
    if question.is_none() {
        tracing::debug!(scope = ?query.scope, seen = query.previous.len(), "Quiz pool exhausted");
    }

    Ok(Json(QuizResponse {
        success: true,
        question,
    }))
}

/// Quiz routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/quizzes", post(next_question))
}
