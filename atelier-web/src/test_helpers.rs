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
use async_trait::async_trait;
use atelier_core::models::ContactMessage;
use sqlx::SqlitePool;
use std::sync::{Arc, Mutex};
use tera::Tera;

use crate::notify::{LogNotifier, Notifier};
use crate::rate_limit::create_contact_rate_limiter;
use crate::templates::default_templates;
use crate::{AppState, Config};

pub fn test_config() -> Config {
    Config {
        database_url: "sqlite::memory:".to_string(),
        host: "localhost".to_string(),
        port: 3000,
        templates_dir: "templates".to_string(),
        static_dir: "public".to_string(),
        admin_password: "correct-horse".to_string(),
        session_secret: "test-secret".to_string(),
        notify_email: None,
        mail_endpoint: None,
        max_body_size: 1_048_576,
    }
}

pub async fn create_test_app_state() -> Result<AppState> {
    create_test_app_state_with_notifier(Arc::new(LogNotifier)).await
}

pub async fn create_test_app_state_with_notifier(notifier: Arc<dyn Notifier>) -> Result<AppState> {
    // In-memory database with the real schema bootstrap
    let pool = SqlitePool::connect(":memory:").await?;
    atelier_db::init::ensure_schema(&pool).await?;

    // Render the same templates the server writes to disk
    let mut tera = Tera::default();
    tera.add_raw_templates(default_templates())?;

    Ok(AppState::new(
        pool,
        Arc::new(tera),
        test_config(),
        create_contact_rate_limiter(),
        notifier,
    ))
}

/// Captures contact messages instead of delivering them. `failing()`
/// builds one whose sends always error.
pub struct RecordingNotifier {
    pub sent: Mutex<Vec<ContactMessage>>,
    fail: bool,
}

impl RecordingNotifier {
    pub fn new() -> Arc<Self> {
        Arc::new(Self {
            sent: Mutex::new(Vec::new()),
            fail: false,
        })
    }

    pub fn failing() -> Arc<Self> {
        Arc::new(Self {
            sent: Mutex::new(Vec::new()),
            fail: true,
        })
    }

    pub fn sent_count(&self) -> usize {
        self.sent.lock().unwrap().len()
    }
}

#[async_trait]
impl Notifier for RecordingNotifier {
    async fn send(&self, message: &ContactMessage) -> Result<()> {
        if self.fail {
            anyhow::bail!("mail endpoint unavailable");
        }
        self.sent.lock().unwrap().push(message.clone());
        Ok(())
    }
}
