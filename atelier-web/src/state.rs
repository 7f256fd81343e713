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

use crate::config::Config;
use crate::notify::Notifier;
use crate::rate_limit::SharedContactLimiter;
use sqlx::SqlitePool;
use std::sync::Arc;
use tera::Tera;

#[derive(Clone)]
pub struct AppState {
    pub db: SqlitePool,
    pub templates: Arc<Tera>,
    pub config: Config,
    pub contact_limiter: SharedContactLimiter,
    pub notifier: Arc<dyn Notifier>,
}

impl AppState {
    pub fn new(
        db: SqlitePool,
        templates: Arc<Tera>,
        config: Config,
        contact_limiter: SharedContactLimiter,
        notifier: Arc<dyn Notifier>,
    ) -> Self {
        Self {
            db,
            templates,
            config,
            contact_limiter,
            notifier,
        }
    }
}
