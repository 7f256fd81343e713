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
    extract::State,
    response::{Html, IntoResponse, Redirect, Response},
    Form,
};
use axum_extra::extract::{cookie::Cookie, CookieJar};
use serde::Deserialize;
use tera::Context;

use atelier_core::models::AdminSession;
use atelier_db::repositories::SessionRepository;

use crate::{error::AppError, session::SESSION_COOKIE, AppState};

#[derive(Debug, Deserialize)]
pub struct LoginForm {
    pub password: String,
}

/// Display login form
pub async fn login_form(State(state): State<AppState>) -> Result<Html<String>, AppError> {
    let mut context = Context::new();
    context.insert("is_admin", &false);

    let html = state.templates.render("login.html", &context)?;
    Ok(Html(html))
}

/// Handle login POST request
pub async fn login(
    State(state): State<AppState>,
    jar: CookieJar,
    Form(form): Form<LoginForm>,
) -> Result<Response, AppError> {
    if form.password != state.config.admin_password {
        let mut context = Context::new();
        context.insert("error", "Invalid password");
        context.insert("is_admin", &false);

        let html = state.templates.render("login.html", &context)?;
        return Ok((jar, Html(html)).into_response());
    }

    // Create session
    let session = AdminSession::new();
    let session_id = session.id.clone();

    let session_repo = SessionRepository::new(state.db.clone());
    session_repo.create(&session).await?;

    // Set session cookie
    let cookie = Cookie::build((SESSION_COOKIE, session_id))
        .path("/")
        .http_only(true)
        .same_site(cookie::SameSite::Lax)
        .build();

    Ok((jar.add(cookie), Redirect::to("/admin")).into_response())
}

/// Handle logout
pub async fn logout(
    State(state): State<AppState>,
    jar: CookieJar,
) -> Result<impl IntoResponse, AppError> {
    // Get session ID from cookie
    if let Some(session_cookie) = jar.get(SESSION_COOKIE) {
        let session_id = session_cookie.value();

        // Delete session from database
        let session_repo = SessionRepository::new(state.db.clone());
        let _ = session_repo.delete(session_id).await; // Ignore errors
    }

    // Remove session cookie
    let jar = jar.remove(SESSION_COOKIE);

    Ok((jar, Redirect::to("/")))
}
