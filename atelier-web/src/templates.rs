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
use std::path::Path;
use std::sync::Arc;
use tera::Tera;

pub fn init_templates(templates_dir: &str) -> Result<Arc<Tera>> {
    // Create templates directory if it doesn't exist
    std::fs::create_dir_all(templates_dir).context("Failed to create templates directory")?;

    // Create default templates if they don't exist
    create_default_templates(templates_dir)?;

    let glob = format!("{}/**/*.html", templates_dir);
    let tera = Tera::new(&glob).context("Failed to load templates")?;

    Ok(Arc::new(tera))
}

/// Template names and their default contents, written to disk on first
/// startup. Tests load the same set with `Tera::add_raw_templates` so
/// they render exactly what the server would.
pub fn default_templates() -> Vec<(&'static str, &'static str)> {
    vec![
        ("base.html", BASE_TEMPLATE),
        ("index.html", INDEX_TEMPLATE),
        ("project_detail.html", PROJECT_DETAIL_TEMPLATE),
        ("purpose.html", PURPOSE_TEMPLATE),
        ("news/index.html", NEWS_INDEX_TEMPLATE),
        ("news/detail.html", NEWS_DETAIL_TEMPLATE),
        ("login.html", LOGIN_TEMPLATE),
        ("admin/dashboard.html", ADMIN_DASHBOARD_TEMPLATE),
        ("admin/news.html", ADMIN_NEWS_TEMPLATE),
    ]
}

fn create_default_templates(templates_dir: &str) -> Result<()> {
    let base_dir = Path::new(templates_dir);

    for (name, content) in default_templates() {
        let path = base_dir.join(name);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory for {}", name))?;
        }
        if !path.exists() {
            std::fs::write(&path, content)
                .with_context(|| format!("Failed to create template {}", name))?;
        }
    }

    Ok(())
}

const BASE_TEMPLATE: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>{% block title %}Atelier{% endblock %}</title>
    <style>
        body {
            font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif;
            line-height: 1.6;
            max-width: 800px;
            margin: 0 auto;
            padding: 20px;
            color: #333;
        }
        nav {
            border-bottom: 1px solid #eee;
            padding-bottom: 10px;
            margin-bottom: 20px;
        }
        nav a {
            margin-right: 15px;
            text-decoration: none;
            color: #0066cc;
        }
        nav a:hover {
            text-decoration: underline;
        }
        .auth-info {
            float: right;
            font-size: 0.9em;
        }
        .auth-info form {
            display: inline;
        }
        .auth-info button {
            border: none;
            background: none;
            color: #0066cc;
            cursor: pointer;
            font-size: 1em;
            padding: 0;
        }
        .card {
            border: 1px solid #eee;
            border-radius: 6px;
            padding: 15px;
            margin-bottom: 15px;
        }
        .meta {
            color: #666;
            font-size: 0.9em;
        }
        table {
            border-collapse: collapse;
            width: 100%;
        }
        th, td {
            border-bottom: 1px solid #eee;
            padding: 6px 8px;
            text-align: left;
        }
        label {
            display: block;
            margin-top: 10px;
        }
        input[type="text"], input[type="password"], textarea {
            width: 100%;
            max-width: 400px;
            padding: 5px;
        }
        footer {
            margin-top: 40px;
            padding-top: 20px;
            border-top: 1px solid #eee;
            font-size: 0.9em;
            color: #666;
        }
    </style>
    {% block head %}{% endblock %}
</head>
<body>
    <nav>
        <a href="/">Home</a>
        <a href="/news">News</a>
        <a href="/purpose">Purpose</a>
        {% if is_admin %}
        <span class="auth-info">
            <a href="/admin">Admin</a>
            <form method="post" action="/logout">
                <button type="submit">Logout</button>
            </form>
        </span>
        {% endif %}
    </nav>

    <main>
        {% block content %}{% endblock %}
    </main>

    <footer>
        <p>Powered by Atelier</p>
    </footer>
    <script src="/static/js/main.js"></script>
</body>
</html>"#;

const INDEX_TEMPLATE: &str = r#"{% extends "base.html" %}

{% block title %}Atelier - Works{% endblock %}

{% block content %}
<h1>Works</h1>

<div id="projectGrid">
    {% for project in projects %}
    <div class="card">
        <h2><a href="/projects/{{ project.id }}">{{ project.title }}</a></h2>
        <p class="meta">
            {% if project.tag %}{{ project.tag }}{% endif %}
            {% if project.date %} · {{ project.date }}{% endif %}
        </p>
        <p>{{ project.description }}</p>
        {% if is_admin %}
        <button class="project-delete" data-id="{{ project.id }}">Delete</button>
        {% endif %}
    </div>
    {% endfor %}
    {% if projects | length == 0 %}
    <p class="meta">Nothing here yet.</p>
    {% endif %}
</div>

{% if is_admin %}
<section>
    <h2>Quick add</h2>
    <form id="quickAddForm">
        <label>Title <input type="text" name="title"></label>
        <label>Tag <input type="text" name="tag"></label>
        <label>Date <input type="text" name="date"></label>
        <label>Image URL <input type="text" name="image_url"></label>
        <label>Description <input type="text" name="description"></label>
        <label>Content <textarea name="content" rows="3"></textarea></label>
        <label>Learning <textarea name="learning" rows="3"></textarea></label>
        <button type="submit">Add project</button>
        <span id="quickAddStatus"></span>
    </form>
</section>
{% endif %}

<section>
    <h2>Contact</h2>
    <form id="contactForm">
        <label>Name <input type="text" name="name"></label>
        <label>Email <input type="text" name="email"></label>
        <label>Message <textarea name="message" rows="4"></textarea></label>
        <label style="display:none" aria-hidden="true">Website
            <input type="text" name="website" tabindex="-1" autocomplete="off">
        </label>
        <button type="submit">Send</button>
        <span id="contactStatus"></span>
    </form>
</section>
{% endblock %}"#;

const PROJECT_DETAIL_TEMPLATE: &str = r#"{% extends "base.html" %}

{% block title %}{{ project.title }} - Atelier{% endblock %}

{% block content %}
<article>
    <h1>{{ project.title }}</h1>
    <p class="meta">
        {% if project.tag %}{{ project.tag }}{% endif %}
        {% if project.date %} · {{ project.date }}{% endif %}
    </p>

    {% if project.image_url %}
    <img src="{{ project.image_url }}" alt="{{ project.title }}" style="max-width: 100%;">
    {% endif %}

    {% if project.description %}
    <p>{{ project.description }}</p>
    {% endif %}

    {% if project.content %}
    <div>{{ project.content }}</div>
    {% endif %}

    {% if project.learning %}
    <h2>Learning</h2>
    <p>{{ project.learning }}</p>
    {% endif %}

    <p><a href="/">&larr; Back to works</a></p>
</article>
{% endblock %}"#;

const PURPOSE_TEMPLATE: &str = r#"{% extends "base.html" %}

{% block title %}Purpose - Atelier{% endblock %}

{% block content %}
<h1>Purpose</h1>
<p>This site is a small atelier: a place to collect works, the thinking
behind them, and what each one taught me.</p>
<p>Every project here started as a question about how design can hold
space for people. The works section shows the outcome; each detail page
keeps the process and the learning that came with it.</p>
<p><a href="/">&larr; Back to works</a></p>
{% endblock %}"#;

const NEWS_INDEX_TEMPLATE: &str = r#"{% extends "base.html" %}

{% block title %}News - Atelier{% endblock %}

{% block content %}
<h1>News</h1>

{% for item in news %}
<div class="card">
    <p class="meta">{{ item.date }}</p>
    <h2><a href="/news/{{ item.id }}">{{ item.title }}</a></h2>
    <p>{{ item.body }}</p>
    {% if item.link %}
    <p><a href="{{ item.link }}">{{ item.link }}</a></p>
    {% endif %}
</div>
{% endfor %}
{% if news | length == 0 %}
<p class="meta">No news yet.</p>
{% endif %}
{% endblock %}"#;

const NEWS_DETAIL_TEMPLATE: &str = r#"{% extends "base.html" %}

{% block title %}{{ item.title }} - Atelier{% endblock %}

{% block content %}
<article>
    <p class="meta">{{ item.date }}</p>
    <h1>{{ item.title }}</h1>
    <p>{{ item.body }}</p>
    {% if item.link %}
    <p><a href="{{ item.link }}">{{ item.link }}</a></p>
    {% endif %}
    <p><a href="/news">&larr; Back to news</a></p>
</article>
{% endblock %}"#;

const LOGIN_TEMPLATE: &str = r#"{% extends "base.html" %}

{% block title %}Login - Atelier{% endblock %}

{% block content %}
<h1>Login</h1>

{% if error %}
<p style="color: red;">{{ error }}</p>
{% endif %}

<form method="post" action="/login">
    <label for="password">Password:</label>
    <input type="password" id="password" name="password" required>
    <div style="margin-top: 15px;">
        <button type="submit" style="padding: 5px 20px;">Login</button>
    </div>
</form>
{% endblock %}"#;

const ADMIN_DASHBOARD_TEMPLATE: &str = r#"{% extends "base.html" %}

{% block title %}Admin - Atelier{% endblock %}

{% block content %}
<h1>Projects</h1>
<p><a href="/admin/news">News CMS</a></p>

<h2>Add project</h2>
<form method="post" action="/admin/projects/add">
    <label>Title <input type="text" name="title"></label>
    <label>Tag <input type="text" name="tag"></label>
    <label>Date <input type="text" name="date"></label>
    <label>Image URL <input type="text" name="image_url"></label>
    <label>Description <input type="text" name="description"></label>
    <label>Content <textarea name="content" rows="4"></textarea></label>
    <label>Learning <textarea name="learning" rows="4"></textarea></label>
    <div style="margin-top: 15px;">
        <button type="submit">Add</button>
    </div>
</form>

<h2>Existing</h2>
<table>
    <tr><th>ID</th><th>Title</th><th>Tag</th><th>Date</th><th></th></tr>
    {% for project in projects %}
    <tr>
        <td>{{ project.id }}</td>
        <td><a href="/projects/{{ project.id }}">{{ project.title }}</a></td>
        <td>{{ project.tag }}</td>
        <td>{{ project.date }}</td>
        <td>
            <form method="post" action="/admin/projects/delete/{{ project.id }}">
                <button type="submit">Delete</button>
            </form>
        </td>
    </tr>
    {% endfor %}
</table>
{% endblock %}"#;

const ADMIN_NEWS_TEMPLATE: &str = r#"{% extends "base.html" %}

{% block title %}News CMS - Atelier{% endblock %}

{% block content %}
<h1>News</h1>
<p><a href="/admin">Projects CMS</a></p>

<h2>Add news</h2>
<form method="post" action="/admin/news/add">
    <label>Title <input type="text" name="title"></label>
    <label>Date <input type="text" name="date"></label>
    <label>Body <textarea name="body" rows="4"></textarea></label>
    <label>Link <input type="text" name="link"></label>
    <div style="margin-top: 15px;">
        <button type="submit">Add</button>
    </div>
</form>

<h2>Existing</h2>
<table>
    <tr><th>ID</th><th>Date</th><th>Title</th><th></th></tr>
    {% for item in news %}
    <tr>
        <td>{{ item.id }}</td>
        <td>{{ item.date }}</td>
        <td><a href="/news/{{ item.id }}">{{ item.title }}</a></td>
        <td>
            <form method="post" action="/admin/news/delete/{{ item.id }}">
                <button type="submit">Delete</button>
            </form>
        </td>
    </tr>
    {% endfor %}
</table>
{% endblock %}"#;
