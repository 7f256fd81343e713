pub mod admin;
pub mod api;
pub mod auth;
pub mod contact;
pub mod news;
pub mod projects;

pub use admin::{add_news, add_project, dashboard, delete_news, delete_project_form, news_admin};
pub use auth::{login, login_form, logout};
pub use contact::submit_contact;
pub use news::{news_detail, news_index};
pub use projects::{home, project_detail, purpose};
