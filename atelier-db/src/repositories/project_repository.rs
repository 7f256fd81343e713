// Atelier - A server-rendered portfolio and news site built with Rust
// Copyright (C) 2025 Atelier Project Contributors
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU Affero General Public License as
// published by the Free Software Foundation, either version 3 of the
// License, or (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU Affero General Public License for more details.
//
// You should have received a copy of the GNU Affero General Public License
// along with this program.  If not, see <https://www.gnu.org/licenses/>.

use anyhow::{Context, Result};
use atelier_core::models::project::Project;
use sqlx::SqlitePool;

/// Listing order for projects. The public site shows oldest first, the
/// admin dashboard newest first.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProjectOrder {
    OldestFirst,
    NewestFirst,
}

impl ProjectOrder {
    fn as_sql(&self) -> &'static str {
        match self {
            ProjectOrder::OldestFirst => "id ASC",
            ProjectOrder::NewestFirst => "id DESC",
        }
    }
}

type ProjectRow = (
    i64,
    Option<String>,
    Option<String>,
    Option<String>,
    Option<String>,
    Option<String>,
    Option<String>,
    Option<String>,
);

// Columns appended by schema evolution are NULL on rows older than the
// column; they read back as empty strings.
fn row_to_project(
    (id, title, tag, date, image_url, description, content, learning): ProjectRow,
) -> Project {
    Project {
        id: Some(id),
        title: title.unwrap_or_default(),
        tag: tag.unwrap_or_default(),
        date: date.unwrap_or_default(),
        image_url: image_url.unwrap_or_default(),
        description: description.unwrap_or_default(),
        content: content.unwrap_or_default(),
        learning: learning.unwrap_or_default(),
    }
}

pub struct ProjectRepository {
    pool: SqlitePool,
}

impl ProjectRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn create(&self, project: &Project) -> Result<i64> {
        let result = sqlx::query(
            r#"
            INSERT INTO projects (title, tag, date, image_url, description, content, learning)
            VALUES (?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(&project.title)
        .bind(&project.tag)
        .bind(&project.date)
        .bind(&project.image_url)
        .bind(&project.description)
        .bind(&project.content)
        .bind(&project.learning)
        .execute(&self.pool)
        .await
        .context("Failed to create project")?;

        Ok(result.last_insert_rowid())
    }

    pub async fn find_by_id(&self, id: i64) -> Result<Option<Project>> {
        let row = sqlx::query_as::<_, ProjectRow>(
            r#"
            SELECT id, title, tag, date, image_url, description, content, learning
            FROM projects
            WHERE id = ?
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .context("Failed to find project by id")?;

        Ok(row.map(row_to_project))
    }

    pub async fn list(&self, order: ProjectOrder) -> Result<Vec<Project>> {
        let sql = format!(
            "SELECT id, title, tag, date, image_url, description, content, learning \
             FROM projects ORDER BY {}",
            order.as_sql()
        );

        let rows = sqlx::query_as::<_, ProjectRow>(&sql)
            .fetch_all(&self.pool)
            .await
            .context("Failed to list projects")?;

        Ok(rows.into_iter().map(row_to_project).collect())
    }

    /// Delete by id. Returns whether a row was removed; deleting an id
    /// that does not exist is not an error.
    pub async fn delete(&self, id: i64) -> Result<bool> {
        let rows_affected = sqlx::query("DELETE FROM projects WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await
            .context("Failed to delete project")?
            .rows_affected();

        Ok(rows_affected > 0)
    }
}
