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
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

use atelier_core::models::ContactSubmission;

use crate::{rate_limit::ClientKey, AppState};

/// Contact form endpoint. Checks run in a fixed order: honeypot, then
/// required fields, then the per-client rate limit, and only then is
/// the notifier invoked.
pub async fn submit_contact(
    State(state): State<AppState>,
    ClientKey(key): ClientKey,
    Json(submission): Json<ContactSubmission>,
) -> Response {
    let message = match submission.validate() {
        Ok(message) => message,
        Err(rejection) => {
            return (
                StatusCode::BAD_REQUEST,
                Json(json!({ "ok": false, "error": rejection.as_code() })),
            )
                .into_response();
        }
    };

    if !state.contact_limiter.allow(&key) {
        return (
            StatusCode::TOO_MANY_REQUESTS,
            Json(json!({ "ok": false, "error": "too_many" })),
        )
            .into_response();
    }

    match state.notifier.send(&message).await {
        Ok(()) => Json(json!({ "ok": true })).into_response(),
        Err(e) => {
            tracing::error!("Failed to deliver contact message: {:?}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({ "ok": false, "error": "mail_failed" })),
            )
                .into_response()
        }
    }
}
