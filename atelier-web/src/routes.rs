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

use crate::{handlers, AppState};
use axum::extract::DefaultBodyLimit;
use axum::{
    routing::{delete, get, post},
    Router,
};
use tower::ServiceBuilder;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

pub fn create_router(state: AppState) -> Router {
    let max_body_size = state.config.max_body_size;
    let static_dir = state.config.static_dir.clone();

    Router::new()
        // Public site
        .route("/", get(handlers::home))
        .route("/projects/{id}", get(handlers::project_detail))
        .route("/purpose", get(handlers::purpose))
        .route("/news", get(handlers::news_index))
        .route("/news/{id}", get(handlers::news_detail))
        // Auth
        .route("/login", get(handlers::login_form).post(handlers::login))
        .route("/logout", post(handlers::logout))
        // Admin CMS
        .route("/admin", get(handlers::dashboard))
        .route("/admin/projects/add", post(handlers::add_project))
        .route(
            "/admin/projects/delete/{id}",
            post(handlers::delete_project_form),
        )
        .route("/admin/news", get(handlers::news_admin))
        .route("/admin/news/add", post(handlers::add_news))
        .route("/admin/news/delete/{id}", post(handlers::delete_news))
        // JSON API
        .route("/api/projects", post(handlers::api::create_project))
        .route("/api/projects/{id}", delete(handlers::api::delete_project))
        // Contact
        .route("/contact", post(handlers::submit_contact))
        // Static assets
        .nest_service("/static", ServeDir::new(static_dir))
        .layer(
            ServiceBuilder::new()
                .layer(DefaultBodyLimit::max(max_body_size))
                .layer(TraceLayer::new_for_http()),
        )
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use atelier_core::models::ProjectDraft;
    use atelier_db::repositories::{ProjectOrder, ProjectRepository};
    use axum::http::{header, StatusCode};
    use axum_test::TestServer;

    #[tokio::test]
    async fn test_home_page_renders() {
        let state = crate::test_helpers::create_test_app_state()
            .await
            .expect("Failed to create test state");

        let app = create_router(state);
        let server = TestServer::new(app).expect("Failed to create test server");

        let response = server.get("/").await;
        response.assert_status(StatusCode::OK);
    }

    #[tokio::test]
    async fn test_news_page_renders() {
        let state = crate::test_helpers::create_test_app_state()
            .await
            .expect("Failed to create test state");

        let app = create_router(state);
        let server = TestServer::new(app).expect("Failed to create test server");

        let response = server.get("/news").await;
        response.assert_status(StatusCode::OK);
    }

    #[tokio::test]
    async fn test_admin_pages_redirect_to_login() {
        let state = crate::test_helpers::create_test_app_state()
            .await
            .expect("Failed to create test state");

        let app = create_router(state);
        let server = TestServer::new(app).expect("Failed to create test server");

        for path in ["/admin", "/admin/news"] {
            let response = server.get(path).await;
            response.assert_status(StatusCode::SEE_OTHER);
            response.assert_header(header::LOCATION, "/login");
        }
    }

    #[tokio::test]
    async fn test_admin_posts_without_session_do_not_mutate() {
        let state = crate::test_helpers::create_test_app_state()
            .await
            .expect("Failed to create test state");
        let pool = state.db.clone();

        let app = create_router(state);
        let server = TestServer::new(app).expect("Failed to create test server");

        let response = server
            .post("/admin/projects/add")
            .form(&[("title", "Sneaky")])
            .await;
        response.assert_status(StatusCode::SEE_OTHER);
        response.assert_header(header::LOCATION, "/login");

        let projects = ProjectRepository::new(pool)
            .list(ProjectOrder::OldestFirst)
            .await
            .unwrap();
        assert!(projects.is_empty());
    }

    #[tokio::test]
    async fn test_api_routes_redirect_without_session() {
        let state = crate::test_helpers::create_test_app_state()
            .await
            .expect("Failed to create test state");

        let app = create_router(state);
        let server = TestServer::new(app).expect("Failed to create test server");

        let response = server
            .post("/api/projects")
            .json(&serde_json::json!({ "title": "Sneaky" }))
            .await;
        response.assert_status(StatusCode::SEE_OTHER);
        response.assert_header(header::LOCATION, "/login");

        let response = server.delete("/api/projects/1").await;
        response.assert_status(StatusCode::SEE_OTHER);
    }

    #[tokio::test]
    async fn test_legacy_project_delete_is_reachable_without_session() {
        let state = crate::test_helpers::create_test_app_state()
            .await
            .expect("Failed to create test state");
        let pool = state.db.clone();

        let repo = ProjectRepository::new(pool);
        let id = repo
            .create(
                &ProjectDraft {
                    title: Some("Unprotected".to_string()),
                    ..Default::default()
                }
                .into_project(),
            )
            .await
            .unwrap();

        let app = create_router(state);
        let server = TestServer::new(app).expect("Failed to create test server");

        let response = server.post(&format!("/admin/projects/delete/{}", id)).await;
        response.assert_status(StatusCode::SEE_OTHER);
        response.assert_header(header::LOCATION, "/admin");

        assert!(repo.find_by_id(id).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_contact_accepts_valid_submission() {
        let state = crate::test_helpers::create_test_app_state()
            .await
            .expect("Failed to create test state");

        let app = create_router(state);
        let server = TestServer::new(app).expect("Failed to create test server");

        let response = server
            .post("/contact")
            .json(&serde_json::json!({
                "name": "Hana",
                "email": "hana@example.com",
                "message": "Hello"
            }))
            .await;
        response.assert_status(StatusCode::OK);

        let json = response.json::<serde_json::Value>();
        assert_eq!(json["ok"], true);
    }

    #[tokio::test]
    async fn test_contact_rejects_honeypot() {
        let state = crate::test_helpers::create_test_app_state()
            .await
            .expect("Failed to create test state");

        let app = create_router(state);
        let server = TestServer::new(app).expect("Failed to create test server");

        let response = server
            .post("/contact")
            .json(&serde_json::json!({
                "name": "Bot",
                "email": "bot@example.com",
                "message": "spam",
                "website": "https://spam.example"
            }))
            .await;
        response.assert_status(StatusCode::BAD_REQUEST);

        let json = response.json::<serde_json::Value>();
        assert_eq!(json["error"], "invalid");
    }

    #[tokio::test]
    async fn test_static_serves_404_for_missing_files() {
        let state = crate::test_helpers::create_test_app_state()
            .await
            .expect("Failed to create test state");

        let app = create_router(state);
        let server = TestServer::new(app).expect("Failed to create test server");

        let response = server.get("/static/js/missing.js").await;
        response.assert_status(StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_logout_only_accepts_post() {
        let state = crate::test_helpers::create_test_app_state()
            .await
            .expect("Failed to create test state");

        let app = create_router(state);
        let server = TestServer::new(app).expect("Failed to create test server");

        let response = server.get("/logout").await;
        response.assert_status(StatusCode::METHOD_NOT_ALLOWED);
    }
}
