use anyhow::{Context, Result};
use sqlx::{Executor, SqlitePool};
use std::{fs, path::Path};

pub mod messages;

fn load_schema(schema_dir: &str) -> Result<String> {
    let schema_path = Path::new(env!("CARGO_MANIFEST_DIR"))
        .join(schema_dir)
        .join("schema.sql");
    fs::read_to_string(&schema_path)
        .with_context(|| format!("Failed to read schema file: {:?}", schema_path))
}

async fn table_exists(pool: &SqlitePool, table: &str) -> Result<bool> {
    let exists: (bool,) = sqlx::query_as(
        "SELECT EXISTS (
            SELECT 1 FROM sqlite_master
            WHERE type = 'table' AND name = ?
        )",
    )
    .bind(table)
    .fetch_one(pool)
    .await?;

    Ok(exists.0)
}

/// Connects the pool and makes sure the `messages` table exists, creating it
/// from the checked-in schema file on first run.
pub async fn setup_database(database_url: &str) -> Result<SqlitePool> {
    let pool = SqlitePool::connect(database_url)
        .await
        .context("Failed to connect to database")?;

    if !table_exists(&pool, "messages").await? {
        println!("Table 'messages' does NOT exist. Running schema SQL to create it...");
        let schema_sql = load_schema("databases/messages")?;
        pool.execute(schema_sql.as_str())
            .await
            .context("Failed to execute schema SQL")?;
        println!("Schema SQL executed successfully.");
    }

    Ok(pool)
}

#[cfg(test)]
pub async fn setup_test_pool() -> SqlitePool {
    use sqlx::sqlite::SqlitePoolOptions;

    // A single connection keeps the in-memory database alive for the whole
    // test; every new :memory: connection would otherwise start empty.
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect("sqlite::memory:")
        .await
        .expect("failed to open in-memory database");

    let schema_sql = load_schema("databases/messages").expect("failed to load schema");
    pool.execute(schema_sql.as_str())
        .await
        .expect("failed to apply schema");

    pool
}
