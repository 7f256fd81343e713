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

use atelier_db::repositories::NewsRepository;

use crate::{auth::OptionalAdmin, error::AppError, AppState};

/// News feed, newest first.
pub async fn news_index(
    State(state): State<AppState>,
    OptionalAdmin(admin): OptionalAdmin,
) -> Result<Html<String>, AppError> {
    let repo = NewsRepository::new(state.db.clone());
    let news = repo.list().await?;

    let mut context = Context::new();
    context.insert("news", &news);
    context.insert("is_admin", &admin.is_some());

    let html = state.templates.render("news/index.html", &context)?;
    Ok(Html(html))
}

/// Single news item. Unknown ids go back to the feed.
pub async fn news_detail(
    State(state): State<AppState>,
    OptionalAdmin(admin): OptionalAdmin,
    Path(id): Path<String>,
) -> Result<Response, AppError> {
    let Ok(id) = id.parse::<i64>() else {
        return Ok(Redirect::to("/news").into_response());
    };

    let repo = NewsRepository::new(state.db.clone());
    let item = match repo.find_by_id(id).await? {
        Some(item) => item,
        None => return Ok(Redirect::to("/news").into_response()),
    };

    let mut context = Context::new();
    context.insert("item", &item);
    context.insert("is_admin", &admin.is_some());

    let html = state.templates.render("news/detail.html", &context)?;
    Ok(Html(html).into_response())
}
