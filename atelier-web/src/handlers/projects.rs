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
    response::{Html, IntoResponse, Redirect, Response},
};
use tera::Context;

use atelier_db::repositories::{ProjectOrder, ProjectRepository};

use crate::{auth::OptionalAdmin, error::AppError, AppState};

/// Landing page: every project, oldest first.
pub async fn home(
    State(state): State<AppState>,
    OptionalAdmin(admin): OptionalAdmin,
) -> Result<Html<String>, AppError> {
    let repo = ProjectRepository::new(state.db.clone());
    let projects = repo.list(ProjectOrder::OldestFirst).await?;

    let mut context = Context::new();
    context.insert("projects", &projects);
    context.insert("is_admin", &admin.is_some());

    let html = state.templates.render("index.html", &context)?;
    Ok(Html(html))
}

/// Project detail page. Unknown ids go back to the landing page rather
/// than a 404.
pub async fn project_detail(
    State(state): State<AppState>,
    OptionalAdmin(admin): OptionalAdmin,
    Path(id): Path<String>,
) -> Result<Response, AppError> {
    let Ok(id) = id.parse::<i64>() else {
        return Ok(Redirect::to("/").into_response());
    };

    let repo = ProjectRepository::new(state.db.clone());
    let project = match repo.find_by_id(id).await? {
        Some(project) => project,
        None => return Ok(Redirect::to("/").into_response()),
    };

    let mut context = Context::new();
    context.insert("project", &project);
    context.insert("is_admin", &admin.is_some());

    let html = state.templates.render("project_detail.html", &context)?;
    Ok(Html(html).into_response())
}

/// Static page describing why the site exists.
pub async fn purpose(
    State(state): State<AppState>,
    OptionalAdmin(admin): OptionalAdmin,
) -> Result<Html<String>, AppError> {
    let mut context = Context::new();
    context.insert("is_admin", &admin.is_some());

    let html = state.templates.render("purpose.html", &context)?;
    Ok(Html(html))
}
