use anyhow::{Context, Result};
use atelier_core::models::session::AdminSession;
use chrono::{DateTime, Utc};
use sqlx::SqlitePool;

// SQLite stores datetimes either as RFC3339 (what we bind) or as
// "YYYY-MM-DD HH:MM:SS" (what datetime('now') defaults produce).
fn parse_datetime(value: &str, field: &'static str) -> Result<DateTime<Utc>> {
    if value.contains('T') {
        Ok(DateTime::parse_from_rfc3339(value)
            .with_context(|| format!("Failed to parse {} as RFC3339", field))?
            .with_timezone(&Utc))
    } else {
        Ok(
            chrono::NaiveDateTime::parse_from_str(value, "%Y-%m-%d %H:%M:%S")
                .with_context(|| format!("Failed to parse {} as SQLite format", field))?
                .and_utc(),
        )
    }
}

pub struct SessionRepository {
    pool: SqlitePool,
}

impl SessionRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn create(&self, session: &AdminSession) -> Result<()> {
        sqlx::query(
            r#"
            INSERT INTO sessions (id, is_admin, expires_at, created_at)
            VALUES (?, ?, ?, ?)
            "#,
        )
        .bind(&session.id)
        .bind(session.is_admin)
        .bind(session.expires_at.to_rfc3339())
        .bind(session.created_at.to_rfc3339())
        .execute(&self.pool)
        .await
        .context("Failed to create session")?;

        Ok(())
    }

    pub async fn find_by_id(&self, id: &str) -> Result<Option<AdminSession>> {
        let row = sqlx::query_as::<_, (String, bool, String, String)>(
            r#"
            SELECT id, is_admin, expires_at, created_at
            FROM sessions
            WHERE id = ?
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .context("Failed to find session by id")?;

        match row {
            Some((id, is_admin, expires_at_str, created_at_str)) => Ok(Some(AdminSession {
                id,
                is_admin,
                expires_at: parse_datetime(&expires_at_str, "expires_at")?,
                created_at: parse_datetime(&created_at_str, "created_at")?,
            })),
            None => Ok(None),
        }
    }

    pub async fn delete_expired(&self) -> Result<u64> {
        // Bound values are RFC3339, so string comparison orders correctly
        let now = Utc::now().to_rfc3339();

        let result = sqlx::query(
            r#"
            DELETE FROM sessions
            WHERE expires_at < ?
            "#,
        )
        .bind(now)
        .execute(&self.pool)
        .await
        .context("Failed to delete expired sessions")?;

        Ok(result.rows_affected())
    }

    pub async fn delete(&self, id: &str) -> Result<()> {
        let rows_affected = sqlx::query("DELETE FROM sessions WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await
            .context("Failed to delete session")?
            .rows_affected();

        if rows_affected == 0 {
            return Err(anyhow::anyhow!("Session not found"));
        }

        Ok(())
    }
}
