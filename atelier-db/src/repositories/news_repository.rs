use anyhow::{Context, Result};
use atelier_core::models::news_item::NewsItem;
use sqlx::SqlitePool;

type NewsRow = (i64, Option<String>, Option<String>, Option<String>, Option<String>);

fn row_to_news_item((id, title, body, date, link): NewsRow) -> NewsItem {
    NewsItem {
        id: Some(id),
        title: title.unwrap_or_default(),
        body: body.unwrap_or_default(),
        date: date.unwrap_or_default(),
        link: link.unwrap_or_default(),
    }
}

pub struct NewsRepository {
    pool: SqlitePool,
}

impl NewsRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn create(&self, item: &NewsItem) -> Result<i64> {
        let result = sqlx::query(
            r#"
            INSERT INTO news (title, body, date, link)
            VALUES (?, ?, ?, ?)
            "#,
        )
        .bind(&item.title)
        .bind(&item.body)
        .bind(&item.date)
        .bind(&item.link)
        .execute(&self.pool)
        .await
        .context("Failed to create news item")?;

        Ok(result.last_insert_rowid())
    }

    pub async fn find_by_id(&self, id: i64) -> Result<Option<NewsItem>> {
        let row = sqlx::query_as::<_, NewsRow>(
            r#"
            SELECT id, title, body, date, link
            FROM news
            WHERE id = ?
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .context("Failed to find news item by id")?;

        Ok(row.map(row_to_news_item))
    }

    /// Newest first: by date, ties broken by id so same-day entries keep
    /// insertion order reversed.
    pub async fn list(&self) -> Result<Vec<NewsItem>> {
        let rows = sqlx::query_as::<_, NewsRow>(
            r#"
            SELECT id, title, body, date, link
            FROM news
            ORDER BY date DESC, id DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .context("Failed to list news")?;

        Ok(rows.into_iter().map(row_to_news_item).collect())
    }

    /// Delete by id. Returns whether a row was removed; deleting an id
    /// that does not exist is not an error.
    pub async fn delete(&self, id: i64) -> Result<bool> {
        let rows_affected = sqlx::query("DELETE FROM news WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await
            .context("Failed to delete news item")?
            .rows_affected();

        Ok(rows_affected > 0)
    }
}
