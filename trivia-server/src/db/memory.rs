//! In-process store for tests and local runs without PostgreSQL
//!
//! Mirrors the table constraints of the Postgres schema: every question
//! field is required and `category` must name an existing category.

use std::collections::BTreeMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use super::migrations::DEFAULT_CATEGORIES;
use super::repos::DbError;
use super::store::TriviaStore;
use crate::models::{Category, NewQuestion, Question, SearchTerm};

#[derive(Debug, Default)]
struct Tables {
    categories: BTreeMap<i32, Category>,
    questions: BTreeMap<i32, Question>,
    next_question_id: i32,
}

/// In-memory store
#[derive(Debug, Default)]
pub struct MemoryStore {
    tables: RwLock<Tables>,
}

impl MemoryStore {
    /// Empty store with no categories.
    pub fn new() -> Self {
        Self::default()
    }

    /// Store holding the default categories (Science .. Sports).
    pub fn with_default_categories() -> Self {
        DEFAULT_CATEGORIES
            .iter()
            .fold(Self::new(), |store, (id, kind)| store.with_category(*id, kind))
    }

    /// Add a category while building the store.
    pub fn with_category(mut self, id: i32, kind: &str) -> Self {
        self.tables.get_mut().categories.insert(
            id,
            Category {
                id,
                kind: kind.to_owned(),
            },
        );
        self
    }
}

fn require<T>(value: Option<T>, column: &str) -> Result<T, DbError> {
    value.ok_or_else(|| {
        DbError::Constraint(format!("null value in column \"{}\" of relation \"questions\"", column))
    })
}

#[async_trait]
impl TriviaStore for MemoryStore {
    async fn categories(&self) -> Result<Vec<Category>, DbError> {
        Ok(self.tables.read().await.categories.values().cloned().collect())
    }

    async fn questions(&self) -> Result<Vec<Question>, DbError> {
        Ok(self.tables.read().await.questions.values().cloned().collect())
    }

    async fn questions_in_category(&self, category: i32) -> Result<Vec<Question>, DbError> {
        let tables = self.tables.read().await;
        Ok(tables
            .questions
            .values()
            .filter(|q| q.category == category)
            .cloned()
            .collect())
    }

    async fn search_questions(&self, term: &SearchTerm) -> Result<Vec<Question>, DbError> {
        let tables = self.tables.read().await;
        Ok(tables
            .questions
            .values()
            .filter(|q| term.matches(&q.question))
            .cloned()
            .collect())
    }

    async fn delete_question(&self, id: i32) -> Result<Question, DbError> {
        self.tables
            .write()
            .await
            .questions
            .remove(&id)
            .ok_or_else(|| DbError::question_not_found(id))
    }

    async fn create_question(&self, new: NewQuestion) -> Result<Question, DbError> {
        let mut tables = self.tables.write().await;

        let category = require(new.category, "category")?;
        if !tables.categories.contains_key(&category) {
            return Err(DbError::Constraint(format!(
                "category {} does not exist",
                category
            )));
        }

        tables.next_question_id += 1;
        let question = Question {
            id: tables.next_question_id,
            question: require(new.question, "question")?,
            answer: require(new.answer, "answer")?,
            difficulty: require(new.difficulty, "difficulty")?,
            category,
        };
        tables.questions.insert(question.id, question.clone());

        Ok(question)
    }
}
