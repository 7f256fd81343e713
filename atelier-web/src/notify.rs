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

use anyhow::{Context, Result};
use async_trait::async_trait;
use atelier_core::models::ContactMessage;
use std::sync::Arc;

use crate::config::Config;

/// Delivery channel for contact form submissions.
#[async_trait]
pub trait Notifier: Send + Sync {
    async fn send(&self, message: &ContactMessage) -> Result<()>;
}

/// Posts the message to an HTTP mail API as JSON.
pub struct HttpNotifier {
    client: reqwest::Client,
    endpoint: String,
    notify_email: String,
}

impl HttpNotifier {
    pub fn new(endpoint: String, notify_email: String) -> Self {
        Self {
            client: reqwest::Client::new(),
            endpoint,
            notify_email,
        }
    }
}

#[async_trait]
impl Notifier for HttpNotifier {
    async fn send(&self, message: &ContactMessage) -> Result<()> {
        let payload = serde_json::json!({
            "from": self.notify_email,
            "to": self.notify_email,
            "subject": message.subject(),
            "text": message.body(),
        });

        let response = self
            .client
            .post(&self.endpoint)
            .json(&payload)
            .send()
            .await
            .context("Failed to reach mail endpoint")?;

        if !response.status().is_success() {
            anyhow::bail!("Mail endpoint returned {}", response.status());
        }

        Ok(())
    }
}

/// Fallback when no mail endpoint is configured: submissions go to the
/// log instead of being dropped.
pub struct LogNotifier;

#[async_trait]
impl Notifier for LogNotifier {
    async fn send(&self, message: &ContactMessage) -> Result<()> {
        tracing::info!(
            name = %message.name,
            email = %message.email,
            message = %message.message,
            "Contact form submission"
        );
        Ok(())
    }
}

/// Pick the notifier the configuration asks for.
pub fn create_notifier(config: &Config) -> Arc<dyn Notifier> {
    match (&config.mail_endpoint, &config.notify_email) {
        (Some(endpoint), Some(email)) => {
            Arc::new(HttpNotifier::new(endpoint.clone(), email.clone()))
        }
        _ => {
            tracing::info!("MAIL_ENDPOINT not configured, contact submissions will be logged");
            Arc::new(LogNotifier)
        }
    }
}
