//! Create a new post

use anyhow::Result;
use std::fs;
use std::path::PathBuf;

use crate::Site;

/// Create a new post file in the blog directory, returning its path
pub fn create_post(site: &Site, title: &str, slug: Option<&str>) -> Result<PathBuf> {
    let today = chrono::Local::now().date_naive();

    let slug = match slug {
        Some(s) => s.trim_matches('/').to_string(),
        None => slug::slugify(title),
    };
    if slug.is_empty() {
        anyhow::bail!("Cannot derive a slug from title {:?}", title);
    }

    let file_path = site.blog_dir.join(format!("{}.md", slug));
    if file_path.exists() {
        anyhow::bail!("File already exists: {:?}", file_path);
    }
    if let Some(parent) = file_path.parent() {
        fs::create_dir_all(parent)?;
    }

    let front_matter = format!(
        "---\ntitle: {}\ndate: {}\ntags: []\ndraft: false\nsummary: \"\"\n---\n\n",
        serde_json::to_string(title)?,
        today.format("%Y-%m-%d")
    );
    fs::write(&file_path, front_matter)?;

    tracing::info!("Created: {:?}", file_path);
    Ok(file_path)
}
