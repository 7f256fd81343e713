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

use serde::{Deserialize, Serialize};

/// A news entry. `date` is free text and doubles as the primary sort key
/// for listings (newest first); `link` points to an optional external page.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NewsItem {
    pub id: Option<i64>,
    pub title: String,
    pub body: String,
    pub date: String,
    pub link: String,
}

/// Incoming fields for a news create call, normalized the same way as
/// [`ProjectDraft`](crate::models::project::ProjectDraft).
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct NewsDraft {
    pub title: Option<String>,
    pub body: Option<String>,
    pub date: Option<String>,
    pub link: Option<String>,
}

impl NewsDraft {
    /// Normalize into a full record: missing fields become empty strings.
    pub fn into_news_item(self) -> NewsItem {
        NewsItem {
            id: None,
            title: self.title.unwrap_or_default(),
            body: self.body.unwrap_or_default(),
            date: self.date.unwrap_or_default(),
            link: self.link.unwrap_or_default(),
        }
    }
}
