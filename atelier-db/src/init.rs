use anyhow::{Context, Result};
use sqlx::sqlite::SqliteConnectOptions;
use sqlx::{Row, SqlitePool};
use std::path::Path;
use std::str::FromStr;

/// Columns every `projects` table must have. Databases created before a
/// column existed get it appended at startup.
const PROJECT_COLUMNS: [&str; 6] = [
    "tag",
    "date",
    "image_url",
    "description",
    "content",
    "learning",
];

/// Columns appended to `news` tables that predate `link`.
const NEWS_COLUMNS: [&str; 1] = ["link"];

/// Initialize the database, creating the file if needed and bringing the
/// schema up to date.
pub async fn init_database(database_url: &str) -> Result<SqlitePool> {
    // Create database file if it doesn't exist
    if database_url.starts_with("sqlite:") {
        let path = database_url.trim_start_matches("sqlite:");
        if !path.starts_with(":memory:") {
            if let Some(parent) = Path::new(path).parent() {
                std::fs::create_dir_all(parent).context("Failed to create database directory")?;
            }
        }
    }

    let options = SqliteConnectOptions::from_str(database_url)
        .context("Invalid database URL")?
        .create_if_missing(true);
    let pool = SqlitePool::connect_with(options)
        .await
        .context("Failed to connect to database")?;

    ensure_schema(&pool).await?;

    Ok(pool)
}

/// Create missing tables and append missing columns. Evolution is
/// additive only: nothing is dropped or renamed, existing rows keep
/// their data, and rows older than a column read it back as NULL.
pub async fn ensure_schema(pool: &SqlitePool) -> Result<()> {
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS projects (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            title TEXT,
            tag TEXT,
            date TEXT,
            image_url TEXT,
            description TEXT,
            content TEXT,
            learning TEXT
        )
        "#,
    )
    .execute(pool)
    .await
    .context("Failed to create projects table")?;

    ensure_columns(pool, "projects", &PROJECT_COLUMNS).await?;

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS news (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            title TEXT,
            body TEXT,
            date TEXT,
            link TEXT
        )
        "#,
    )
    .execute(pool)
    .await
    .context("Failed to create news table")?;

    ensure_columns(pool, "news", &NEWS_COLUMNS).await?;

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS sessions (
            id TEXT PRIMARY KEY,
            is_admin BOOLEAN NOT NULL DEFAULT 0,
            expires_at TEXT NOT NULL,
            created_at TEXT NOT NULL DEFAULT (datetime('now'))
        )
        "#,
    )
    .execute(pool)
    .await
    .context("Failed to create sessions table")?;

    Ok(())
}

/// Append any of `wanted` not already present on `table`. Table and
/// column names come from the fixed lists above, never from user input.
async fn ensure_columns(pool: &SqlitePool, table: &str, wanted: &[&str]) -> Result<()> {
    let rows = sqlx::query(&format!("PRAGMA table_info({})", table))
        .fetch_all(pool)
        .await
        .with_context(|| format!("Failed to read columns of {}", table))?;

    let mut present = Vec::new();
    for row in &rows {
        let name: String = row
            .try_get("name")
            .context("PRAGMA table_info row has no name column")?;
        present.push(name);
    }

    for col in wanted {
        if !present.iter().any(|c| c == col) {
            tracing::info!(table, column = col, "Adding missing column");
            sqlx::query(&format!("ALTER TABLE {} ADD COLUMN {} TEXT", table, col))
                .execute(pool)
                .await
                .with_context(|| format!("Failed to add column {} to {}", col, table))?;
        }
    }

    Ok(())
}
