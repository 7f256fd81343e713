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
use atelier_core::models::Project;
use atelier_db::repositories::ProjectRepository;
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "atelier")]
#[command(about = "Atelier CLI tool for database management")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Initialize the database (create tables)
    Init,

    /// Reset the projects table and load the sample portfolio
    Seed,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if it exists
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let database_url =
        std::env::var("DATABASE_URL").unwrap_or_else(|_| "sqlite:atelier.db".to_string());

    match cli.command {
        Commands::Init => init_database(&database_url).await,
        Commands::Seed => seed_database(&database_url).await,
    }
}

async fn init_database(database_url: &str) -> Result<()> {
    println!("Initializing database at: {}", database_url);

    let _pool = atelier_db::init_database(database_url).await?;

    println!("Database initialized successfully!");
    Ok(())
}

async fn seed_database(database_url: &str) -> Result<()> {
    println!("Seeding database at: {}", database_url);

    let pool = atelier_db::init_database(database_url).await?;

    // Start over: the seed replaces whatever projects exist
    sqlx::query("DROP TABLE IF EXISTS projects")
        .execute(&pool)
        .await?;
    atelier_db::init::ensure_schema(&pool).await?;

    let projects = sample_projects();
    let repo = ProjectRepository::new(pool);
    for project in &projects {
        let id = repo.create(project).await?;
        println!("  [{}] {}", id, project.title);
    }

    println!("Seeded {} project(s).", projects.len());
    Ok(())
}

fn sample_project(
    title: &str,
    tag: &str,
    description: &str,
    content: &str,
    learning: &str,
) -> Project {
    Project {
        id: None,
        title: title.to_string(),
        tag: tag.to_string(),
        date: String::new(),
        image_url: String::new(),
        description: description.to_string(),
        content: content.to_string(),
        learning: learning.to_string(),
    }
}

/// The original portfolio entries shipped with the site.
fn sample_projects() -> Vec<Project> {
    vec![
        sample_project(
            "パフェに甘えて。",
            "Experience",
            "心の隙間を埋める体験設計",
            "「甘える」ことが苦手な自分への許しを、パフェという形に投影しました。",
            "誰かのために頑張りすぎる人が、一瞬だけ自分に戻れる時間の尊さを学びました。",
        ),
        sample_project(
            "自分を愛すアイス",
            "Product",
            "セルフラブを味覚で感じる",
            "溶けていくアイスと、ほぐれていく感情。自分を甘やかす許可証としてのプロダクト。",
            "「美味しい」という原始的な感覚が、どれほど心を救うかを実感しました。",
        ),
        sample_project(
            "大変よく頑張りましたカフェ",
            "Space",
            "全肯定される空間",
            "入り口で「頑張ったこと」を伝えると、それに見合った報酬が出るカフェ。",
            "承認欲求を「癒やし」に変換する空間デザインの可能性を追求しました。",
        ),
        sample_project(
            "絵本のおまじない",
            "Zine",
            "内省を物語にする",
            "読み終わる頃には、少しだけ自分のことが好きになっている、大人向けの絵本。",
            "言葉が持つ「ほぐす力」を、視覚表現と組み合わせて表現しました。",
        ),
    ]
}
