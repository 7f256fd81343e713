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

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Server-side session created on a successful admin login. The whole
/// session state is one boolean: whether the browser holding the cookie
/// is the admin.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AdminSession {
    pub id: String,
    pub is_admin: bool,
    pub expires_at: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
}

impl AdminSession {
    /// Create a new admin session with default expiration (24 hours)
    pub fn new() -> Self {
        Self::new_with_expiry(Duration::hours(24))
    }

    /// Create a new admin session with custom expiration
    pub fn new_with_expiry(expiry_duration: Duration) -> Self {
        let now = Utc::now();

        Self {
            id: Uuid::new_v4().to_string(),
            is_admin: true,
            expires_at: now + expiry_duration,
            created_at: now,
        }
    }

    /// Check if the session has expired
    pub fn is_expired(&self) -> bool {
        Utc::now() > self.expires_at
    }
}

impl Default for AdminSession {
    fn default() -> Self {
        Self::new()
    }
}
