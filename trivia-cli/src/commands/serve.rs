//! HTTP server command for the trivia API

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;

use trivia_server::db::{create_pool_with_options, migrations, DEFAULT_MAX_CONNECTIONS};
use trivia_server::http::{run_server, ServerConfig};
use trivia_server::{MemoryStore, PgStore};

use super::require_database_url;

/// Arguments for the serve command
#[derive(Parser, Debug)]
pub struct ServeArgs {
    /// Address to bind to
    #[arg(long, short = 'b', default_value = "127.0.0.1:3030")]
    pub bind: SocketAddr,

    /// PostgreSQL connection string
    #[arg(long, env = "DATABASE_URL", hide_env_values = true)]
    pub database_url: Option<String>,

    /// Maximum pooled database connections
    #[arg(long, default_value_t = DEFAULT_MAX_CONNECTIONS)]
    pub max_connections: u32,

    /// Create missing tables before serving
    #[arg(long)]
    pub migrate: bool,

    /// Insert the default categories before serving (implies --migrate)
    #[arg(long)]
    pub seed: bool,

    /// Serve from an in-memory store with the default categories (no database)
    #[arg(long, conflicts_with_all = ["migrate", "seed"])]
    pub in_memory: bool,
}

/// Run the HTTP server
pub async fn run_serve(args: ServeArgs) -> Result<()> {
    let config = ServerConfig {
        bind_addr: args.bind,
    };

    if args.in_memory {
        tracing::warn!("Serving from an in-memory store; data is lost on shutdown");
        let store = Arc::new(MemoryStore::with_default_categories());
        return run_server(store, config).await.context("Server error");
    }

    let database_url = require_database_url(args.database_url)?;

    tracing::info!("Starting trivia server on {}", args.bind);

    let pool = create_pool_with_options(&database_url, args.max_connections)
        .await
        .context("Failed to create database pool")?;

    if args.migrate || args.seed {
        migrations::run(&pool)
            .await
            .context("Failed to run migrations")?;
    }
    if args.seed {
        migrations::seed_categories(&pool)
            .await
            .context("Failed to seed categories")?;
    }

    let store = PgStore::new(pool);

    // Run server (blocks until shutdown)
    let result = run_server(Arc::new(store.clone()), config)
        .await
        .context("Server error");

    store.close().await;
    tracing::info!("Database pool closed");

    result
}
