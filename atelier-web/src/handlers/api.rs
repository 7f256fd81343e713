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
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

use atelier_core::models::ProjectDraft;
use atelier_db::repositories::ProjectRepository;

use crate::{auth::AdminUser, AppState};

/// JSON project creation, used by the quick-add form on the landing
/// page. Replies with the new row id.
pub async fn create_project(
    State(state): State<AppState>,
    AdminUser(_session): AdminUser,
    Json(draft): Json<ProjectDraft>,
) -> Response {
    let project = draft.into_project();

    match ProjectRepository::new(state.db.clone()).create(&project).await {
        Ok(id) => Json(json!({ "ok": true, "id": id })).into_response(),
        Err(e) => {
            tracing::error!("Failed to create project: {:?}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({ "ok": false, "error": "db_error" })),
            )
                .into_response()
        }
    }
}

/// JSON project delete. Deleting an id that is already gone still
/// reports success.
pub async fn delete_project(
    State(state): State<AppState>,
    AdminUser(_session): AdminUser,
    Path(id): Path<i64>,
) -> Response {
    match ProjectRepository::new(state.db.clone()).delete(id).await {
        Ok(_) => Json(json!({ "ok": true })).into_response(),
        Err(e) => {
            tracing::error!("Failed to delete project {}: {:?}", id, e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({ "ok": false, "error": "db_error" })),
            )
                .into_response()
        }
    }
}
