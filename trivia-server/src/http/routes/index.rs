//! Landing route

use axum::{routing::get, Router};

pub const WELCOME: &str = "Welcome to Trivia API";

/// GET /
async fn index() -> &'static str {
    WELCOME
}

pub fn router<S>() -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    Router::new().route("/", get(index))
}
