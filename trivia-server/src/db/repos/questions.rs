//! Question repository
//!
//! Handles question CRUD:
//! - list/filter/search: ordered by id, full candidate sets (paginated by the caller)
//! - delete: DELETE ... RETURNING (missing id is NotFound)
//! - create: INSERT ... RETURNING, constraint failures propagate

use sqlx::PgPool;

use super::DbError;
use crate::models::{NewQuestion, Question, SearchTerm};

/// Question repository
pub struct QuestionRepo<'a> {
    pool: &'a PgPool,
}

impl<'a> QuestionRepo<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// All questions ordered by id.
    pub async fn list(&self) -> Result<Vec<Question>, DbError> {
        let questions = sqlx::query_as::<_, Question>(
            r#"
            SELECT id, question, answer, category, difficulty
            FROM questions
            ORDER BY id
            "#,
        )
        .fetch_all(self.pool)
        .await?;

        Ok(questions)
    }

    /// Questions belonging to one category.
    pub async fn list_by_category(&self, category: i32) -> Result<Vec<Question>, DbError> {
        let questions = sqlx::query_as::<_, Question>(
            r#"
            SELECT id, question, answer, category, difficulty
            FROM questions
            WHERE category = $1
            ORDER BY id
            "#,
        )
        .bind(category)
        .fetch_all(self.pool)
        .await?;

        Ok(questions)
    }

    /// Questions whose text contains the term, ignoring case.
    pub async fn search(&self, term: &SearchTerm) -> Result<Vec<Question>, DbError> {
        let questions = sqlx::query_as::<_, Question>(
            r#"
            SELECT id, question, answer, category, difficulty
            FROM questions
            WHERE question ILIKE $1
            ORDER BY id
            "#,
        )
        .bind(term.like_pattern())
        .fetch_all(self.pool)
        .await?;

        Ok(questions)
    }

    /// Get a single question by id.
    #[cfg(test)]
    pub async fn get(&self, id: i32) -> Result<Question, DbError> {
        sqlx::query_as::<_, Question>(
            r#"
            SELECT id, question, answer, category, difficulty
            FROM questions
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(self.pool)
        .await?
        .ok_or_else(|| DbError::question_not_found(id))
    }

    /// Delete a question, returning the removed record.
    pub async fn delete(&self, id: i32) -> Result<Question, DbError> {
        sqlx::query_as::<_, Question>(
            r#"
            DELETE FROM questions
            WHERE id = $1
            RETURNING id, question, answer, category, difficulty
            "#,
        )
        .bind(id)
        .fetch_optional(self.pool)
        .await?
        .ok_or_else(|| DbError::question_not_found(id))
    }

    /// Insert a question. NULL fields and unknown categories are rejected
    /// by the table constraints.
    pub async fn create(&self, new: &NewQuestion) -> Result<Question, DbError> {
        let question = sqlx::query_as::<_, Question>(
            r#"
            INSERT INTO questions (question, answer, difficulty, category)
            VALUES ($1, $2, $3, $4)
            RETURNING id, question, answer, category, difficulty
            "#,
        )
        .bind(new.question.as_deref())
        .bind(new.answer.as_deref())
        .bind(new.difficulty)
        .bind(new.category)
        .fetch_one(self.pool)
        .await?;

        Ok(question)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::{create_pool, migrations};

    // Integration tests - run with DATABASE_URL set
    // cargo test -p trivia-server -- --ignored

    async fn pool() -> PgPool {
        let url = std::env::var("DATABASE_URL").expect("DATABASE_URL required");
        let pool = create_pool(&url).await.expect("pool creation failed");
        migrations::run(&pool).await.expect("migrations failed");
        migrations::seed_categories(&pool).await.expect("seed failed");
        pool
    }

    fn new_question(text: &str, category: Option<i32>) -> NewQuestion {
        NewQuestion {
            question: Some(text.to_owned()),
            answer: Some("answer".to_owned()),
            difficulty: Some(2),
            category,
        }
    }

    #[tokio::test]
    #[ignore = "requires database"]
    async fn create_then_delete() {
        let pool = pool().await;
        let repo = QuestionRepo::new(&pool);

        let created = repo
            .create(&new_question("repo test question", Some(1)))
            .await
            .expect("create failed");
        assert_eq!(repo.get(created.id).await.expect("get failed"), created);

        let deleted = repo.delete(created.id).await.expect("delete failed");
        assert_eq!(deleted.id, created.id);
        assert!(matches!(
            repo.get(created.id).await,
            Err(DbError::NotFound { .. })
        ));
    }

    #[tokio::test]
    #[ignore = "requires database"]
    async fn create_rejects_missing_fields() {
        let pool = pool().await;
        let result = QuestionRepo::new(&pool)
            .create(&new_question("no category", None))
            .await;
        assert!(matches!(result, Err(DbError::Sqlx(_))));
    }

    #[tokio::test]
    #[ignore = "requires database"]
    async fn search_treats_wildcards_literally() {
        let pool = pool().await;
        let repo = QuestionRepo::new(&pool);
        let created = repo
            .create(&new_question("What is 100% of zero?", Some(1)))
            .await
            .expect("create failed");

        let term = SearchTerm::new(Some("100%")).unwrap();
        let found = repo.search(&term).await.expect("search failed");
        assert!(found.iter().any(|q| q.id == created.id));
        assert!(found.iter().all(|q| q.question.contains("100%")));

        repo.delete(created.id).await.expect("cleanup failed");
    }
}
