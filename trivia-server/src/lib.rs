//! trivia-server: HTTP API for trivia questions and categories
//!
//! Serves paginated question listings, search, create/delete, and a quiz
//! endpoint that draws a random unseen question. Storage sits behind the
//! [`db::TriviaStore`] trait: PostgreSQL via sqlx in production, an
//! in-memory store for tests.

pub mod db;
pub mod http;
pub mod models;

pub use db::{DbError, MemoryStore, PgStore, TriviaStore};
pub use http::{build_router, run_server, ApiError, AppState, ServerConfig};
