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

/// A portfolio entry. All text fields are stored as plain strings; rows
/// created before a column existed read back as empty strings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Project {
    pub id: Option<i64>,
    pub title: String,
    pub tag: String,
    pub date: String,
    pub image_url: String,
    pub description: String,
    pub content: String,
    pub learning: String,
}

/// Incoming fields for a project create call (form or JSON). Every field
/// is optional on the wire; [`into_project`](Self::into_project) is the
/// single normalization point that fills gaps with empty strings.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ProjectDraft {
    pub title: Option<String>,
    pub tag: Option<String>,
    pub date: Option<String>,
    pub image_url: Option<String>,
    pub description: Option<String>,
    pub content: Option<String>,
    pub learning: Option<String>,
}

impl ProjectDraft {
    /// Normalize into a full record: missing fields become empty strings,
    /// never null.
    pub fn into_project(self) -> Project {
        Project {
            id: None,
            title: self.title.unwrap_or_default(),
            tag: self.tag.unwrap_or_default(),
            date: self.date.unwrap_or_default(),
            image_url: self.image_url.unwrap_or_default(),
            description: self.description.unwrap_or_default(),
            content: self.content.unwrap_or_default(),
            learning: self.learning.unwrap_or_default(),
        }
    }
}
