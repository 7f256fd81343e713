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

use anyhow::Result;
use atelier_core::models::AdminSession;
use atelier_db::repositories::SessionRepository;
use sqlx::SqlitePool;

pub const SESSION_COOKIE: &str = "session_id";

/// Look up the admin session named by the request cookie. Expired or
/// non-admin sessions count as not logged in.
pub async fn get_admin_session(
    db: &SqlitePool,
    jar: &axum_extra::extract::CookieJar,
) -> Result<Option<AdminSession>> {
    if let Some(session_cookie) = jar.get(SESSION_COOKIE) {
        let session_repo = SessionRepository::new(db.clone());

        if let Some(session) = session_repo.find_by_id(session_cookie.value()).await? {
            if session.is_admin && !session.is_expired() {
                return Ok(Some(session));
            }
        }
    }
    Ok(None)
}
