//! Store abstraction used by the HTTP handlers

use async_trait::async_trait;
use sqlx::PgPool;

use super::repos::{CategoryRepo, DbError, QuestionRepo};
use crate::models::{Category, NewQuestion, Question, SearchTerm};

/// Persistence operations the trivia API needs.
///
/// Every list is ordered by question/category id.
#[async_trait]
pub trait TriviaStore: Send + Sync {
    async fn categories(&self) -> Result<Vec<Category>, DbError>;

    async fn questions(&self) -> Result<Vec<Question>, DbError>;

    async fn questions_in_category(&self, category: i32) -> Result<Vec<Question>, DbError>;

    async fn search_questions(&self, term: &SearchTerm) -> Result<Vec<Question>, DbError>;

    /// Remove a question and return it; `DbError::NotFound` when absent.
    async fn delete_question(&self, id: i32) -> Result<Question, DbError>;

    async fn create_question(&self, new: NewQuestion) -> Result<Question, DbError>;
}

/// PostgreSQL-backed store
#[derive(Clone)]
pub struct PgStore {
    pool: PgPool,
}

impl PgStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    /// Wait for checked-out connections to be returned, then close the pool.
    pub async fn close(&self) {
        self.pool.close().await;
    }
}

#[async_trait]
impl TriviaStore for PgStore {
    async fn categories(&self) -> Result<Vec<Category>, DbError> {
        CategoryRepo::new(&self.pool).list().await
    }

    async fn questions(&self) -> Result<Vec<Question>, DbError> {
        QuestionRepo::new(&self.pool).list().await
    }

    async fn questions_in_category(&self, category: i32) -> Result<Vec<Question>, DbError> {
        QuestionRepo::new(&self.pool).list_by_category(category).await
    }

    async fn search_questions(&self, term: &SearchTerm) -> Result<Vec<Question>, DbError> {
        QuestionRepo::new(&self.pool).search(term).await
    }

    async fn delete_question(&self, id: i32) -> Result<Question, DbError> {
        QuestionRepo::new(&self.pool).delete(id).await
    }

    async fn create_question(&self, new: NewQuestion) -> Result<Question, DbError> {
        QuestionRepo::new(&self.pool).create(&new).await
    }
}
