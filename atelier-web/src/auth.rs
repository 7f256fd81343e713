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
    extract::{FromRef, FromRequestParts},
    http::request::Parts,
    response::{IntoResponse, Redirect, Response},
};
use axum_extra::extract::CookieJar;

use atelier_core::models::AdminSession;

use crate::{error::AppError, session::get_admin_session, AppState};

/// Authenticated admin, extracted from the session cookie. Requests
/// without a valid session are redirected to the login form.
#[derive(Debug, Clone)]
pub struct AdminUser(pub AdminSession);

impl<S> FromRequestParts<S> for AdminUser
where
    AppState: FromRef<S>,
    S: Send + Sync,
{
    type Rejection = Response;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let jar = CookieJar::from_request_parts(parts, state)
            .await
            .map_err(|err| match err {})?;
        let state = AppState::from_ref(state);

        let session = get_admin_session(&state.db, &jar)
            .await
            .map_err(|e| AppError::from(e).into_response())?;

        match session {
            Some(session) => Ok(AdminUser(session)),
            None => Err(Redirect::to("/login").into_response()),
        }
    }
}

/// Admin session if the request carries a valid one, `None` otherwise.
/// Public pages use this to decide whether to show admin controls.
#[derive(Debug, Clone)]
pub struct OptionalAdmin(pub Option<AdminSession>);

impl<S> FromRequestParts<S> for OptionalAdmin
where
    AppState: FromRef<S>,
    S: Send + Sync,
{
    type Rejection = Response;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let jar = CookieJar::from_request_parts(parts, state)
            .await
            .map_err(|err| match err {})?;
        let state = AppState::from_ref(state);

        let session = get_admin_session(&state.db, &jar)
            .await
            .map_err(|e| AppError::from(e).into_response())?;

        Ok(OptionalAdmin(session))
    }
}
