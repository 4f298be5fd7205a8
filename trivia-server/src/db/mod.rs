//! Database layer - store trait, connection pool and repositories
//!
//! # Design Principles
//!
//! - Handlers talk to a `TriviaStore`, never to the pool directly
//! - Connection pool (max 5 connections) owned by `PgStore`
//! - Rely on DB constraints, map their failures - no pre-validation

pub mod memory;
pub mod migrations;
pub mod pool;
pub mod repos;
pub mod store;

pub use memory::MemoryStore;
pub use pool::{create_pool, create_pool_with_options, DEFAULT_MAX_CONNECTIONS};
pub use repos::*;
pub use store::{PgStore, TriviaStore};
