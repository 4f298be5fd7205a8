//! Schema migration command

use anyhow::{Context, Result};
use clap::Parser;

use trivia_server::db::{create_pool, migrations};

use super::require_database_url;

/// Arguments for the migrate command
#[derive(Parser, Debug)]
pub struct MigrateArgs {
    /// PostgreSQL connection string
    #[arg(long, env = "DATABASE_URL", hide_env_values = true)]
    pub database_url: Option<String>,

    /// Also insert the default categories
    #[arg(long)]
    pub seed: bool,
}

/// Create the trivia tables (and optionally seed categories)
pub async fn run_migrate(args: MigrateArgs) -> Result<()> {
    let database_url = require_database_url(args.database_url)?;

    let pool = create_pool(&database_url)
        .await
        .context("Failed to create database pool")?;

    migrations::run(&pool)
        .await
        .context("Failed to run migrations")?;

    if args.seed {
        let inserted = migrations::seed_categories(&pool)
            .await
            .context("Failed to seed categories")?;
        println!("Seeded {} categories", inserted);
    }

    pool.close().await;
    println!("Migrations complete");
    Ok(())
}
