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

use axum::{
    extract::{Path, State},
    response::{Html, Redirect},
    Form,
};
use tera::Context;

use atelier_core::models::{NewsDraft, ProjectDraft};
use atelier_db::repositories::{NewsRepository, ProjectOrder, ProjectRepository};

use crate::{auth::AdminUser, error::AppError, AppState};

/// Project dashboard: newest first, so fresh entries sit on top.
pub async fn dashboard(
    State(state): State<AppState>,
    AdminUser(_session): AdminUser,
) -> Result<Html<String>, AppError> {
    let repo = ProjectRepository::new(state.db.clone());
    let projects = repo.list(ProjectOrder::NewestFirst).await?;

    let mut context = Context::new();
    context.insert("projects", &projects);
    context.insert("is_admin", &true);

    let html = state.templates.render("admin/dashboard.html", &context)?;
    Ok(Html(html))
}

/// Form-post project creation. Whatever fields the form left out are
/// stored as empty strings.
pub async fn add_project(
    State(state): State<AppState>,
    AdminUser(_session): AdminUser,
    Form(draft): Form<ProjectDraft>,
) -> Result<Redirect, AppError> {
    let project = draft.into_project();

    ProjectRepository::new(state.db.clone())
        .create(&project)
        .await
        .map_err(|e| AppError::internal_server_error(format!("DB error: {}", e)))?;

    Ok(Redirect::to("/admin"))
}

/// Form-post delete used by the dashboard table.
///
/// TODO: guard this with `AdminUser` once the dashboard posts deletes
/// through the JSON endpoint; today it is reachable without a session.
pub async fn delete_project_form(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Redirect, AppError> {
    if let Ok(id) = id.parse::<i64>() {
        ProjectRepository::new(state.db.clone()).delete(id).await?;
    }

    Ok(Redirect::to("/admin"))
}

/// News dashboard, same ordering as the public feed.
pub async fn news_admin(
    State(state): State<AppState>,
    AdminUser(_session): AdminUser,
) -> Result<Html<String>, AppError> {
    let repo = NewsRepository::new(state.db.clone());
    let news = repo.list().await?;

    let mut context = Context::new();
    context.insert("news", &news);
    context.insert("is_admin", &true);

    let html = state.templates.render("admin/news.html", &context)?;
    Ok(Html(html))
}

pub async fn add_news(
    State(state): State<AppState>,
    AdminUser(_session): AdminUser,
    Form(draft): Form<NewsDraft>,
) -> Result<Redirect, AppError> {
    let item = draft.into_news_item();

    NewsRepository::new(state.db.clone())
        .create(&item)
        .await
        .map_err(|e| AppError::internal_server_error(format!("DB error: {}", e)))?;

    Ok(Redirect::to("/admin/news"))
}

pub async fn delete_news(
    State(state): State<AppState>,
    AdminUser(_session): AdminUser,
    Path(id): Path<String>,
) -> Result<Redirect, AppError> {
    if let Ok(id) = id.parse::<i64>() {
        NewsRepository::new(state.db.clone()).delete(id).await?;
    }

    Ok(Redirect::to("/admin/news"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::Result;
    use atelier_core::models::AdminSession;
    use axum::http::StatusCode;
    use axum::response::IntoResponse;

    fn admin() -> AdminUser {
        AdminUser(AdminSession::new())
    }

    #[tokio::test]
    async fn test_dashboard_lists_newest_first() -> Result<()> {
        let state = crate::test_helpers::create_test_app_state().await?;
        let repo = ProjectRepository::new(state.db.clone());
        repo.create(
            &ProjectDraft {
                title: Some("First work".to_string()),
                ..Default::default()
            }
            .into_project(),
        )
        .await?;
        repo.create(
            &ProjectDraft {
                title: Some("Second work".to_string()),
                ..Default::default()
            }
            .into_project(),
        )
        .await?;

        let Html(html) = dashboard(State(state), admin()).await.unwrap();
        let second = html.find("Second work").unwrap();
        let first = html.find("First work").unwrap();
        assert!(second < first);

        Ok(())
    }

    #[tokio::test]
    async fn test_add_project_persists_and_redirects() -> Result<()> {
        let state = crate::test_helpers::create_test_app_state().await?;
        let pool = state.db.clone();

        let draft = ProjectDraft {
            title: Some("New work".to_string()),
            tag: Some("Zine".to_string()),
            ..Default::default()
        };

        let redirect = add_project(State(state), admin(), Form(draft)).await?;
        let response = redirect.into_response();
        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        assert_eq!(response.headers().get("location").unwrap(), "/admin");

        let repo = ProjectRepository::new(pool);
        let projects = repo.list(ProjectOrder::OldestFirst).await?;
        assert_eq!(projects.len(), 1);
        assert_eq!(projects[0].title, "New work");
        // Fields the form left out come back as empty strings
        assert_eq!(projects[0].date, "");
        assert_eq!(projects[0].learning, "");

        Ok(())
    }

    #[tokio::test]
    async fn test_delete_project_form_removes_row() -> Result<()> {
        let state = crate::test_helpers::create_test_app_state().await?;
        let repo = ProjectRepository::new(state.db.clone());
        let id = repo
            .create(
                &ProjectDraft {
                    title: Some("Doomed".to_string()),
                    ..Default::default()
                }
                .into_project(),
            )
            .await?;

        let redirect =
            delete_project_form(State(state.clone()), Path(id.to_string())).await?;
        let response = redirect.into_response();
        assert_eq!(response.headers().get("location").unwrap(), "/admin");

        assert!(repo.find_by_id(id).await?.is_none());

        Ok(())
    }

    #[tokio::test]
    async fn test_delete_project_form_ignores_bad_id() -> Result<()> {
        let state = crate::test_helpers::create_test_app_state().await?;

        let redirect =
            delete_project_form(State(state), Path("junk".to_string())).await?;
        let response = redirect.into_response();
        assert_eq!(response.status(), StatusCode::SEE_OTHER);

        Ok(())
    }

    #[tokio::test]
    async fn test_news_admin_renders() -> Result<()> {
        let state = crate::test_helpers::create_test_app_state().await?;

        let response = news_admin(State(state), admin()).await;
        assert!(response.is_ok());

        Ok(())
    }

    #[tokio::test]
    async fn test_add_news_persists_and_redirects() -> Result<()> {
        let state = crate::test_helpers::create_test_app_state().await?;
        let pool = state.db.clone();

        let draft = NewsDraft {
            title: Some("Open studio".to_string()),
            date: Some("2024-06-01".to_string()),
            ..Default::default()
        };

        let redirect = add_news(State(state), admin(), Form(draft)).await?;
        let response = redirect.into_response();
        assert_eq!(response.headers().get("location").unwrap(), "/admin/news");

        let repo = NewsRepository::new(pool);
        let news = repo.list().await?;
        assert_eq!(news.len(), 1);
        assert_eq!(news[0].title, "Open studio");
        assert_eq!(news[0].body, "");

        Ok(())
    }

    #[tokio::test]
    async fn test_delete_news_removes_row() -> Result<()> {
        let state = crate::test_helpers::create_test_app_state().await?;
        let repo = NewsRepository::new(state.db.clone());
        let id = repo
            .create(
                &NewsDraft {
                    title: Some("Old entry".to_string()),
                    ..Default::default()
                }
                .into_news_item(),
            )
            .await?;

        let redirect = delete_news(State(state), admin(), Path(id.to_string())).await?;
        let response = redirect.into_response();
        assert_eq!(response.headers().get("location").unwrap(), "/admin/news");

        assert!(repo.find_by_id(id).await?.is_none());

        Ok(())
    }
}
