//! Content loader - turns markdown files in the blog directory into posts

use anyhow::Result;
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

use super::{Content, FrontMatter, MarkdownRenderer, ReadingTime};
use crate::helpers::strip_html;
use crate::{Error, Site};

/// Loads posts from the blog directory
pub struct ContentLoader<'a> {
    site: &'a Site,
    renderer: MarkdownRenderer,
}

impl<'a> ContentLoader<'a> {
    /// Create a new content loader
    pub fn new(site: &'a Site) -> Self {
        Self {
            site,
            renderer: MarkdownRenderer::new(),
        }
    }

    /// Load all published posts, newest first.
    ///
    /// Files that fail to parse are logged and skipped. Two files resolving
    /// to the same slug is an error.
    pub fn load_posts(&self) -> Result<Vec<Content>> {
        let blog_dir = &self.site.blog_dir;
        if !blog_dir.exists() {
            tracing::warn!("Blog directory {:?} does not exist", blog_dir);
            return Ok(Vec::new());
        }

        let mut posts = Vec::new();
        let mut seen: HashMap<String, PathBuf> = HashMap::new();

        for entry in WalkDir::new(blog_dir)
            .follow_links(true)
            .sort_by_file_name()
            .into_iter()
            .filter_map(|e| e.ok())
        {
            let path = entry.path();
            if !path.is_file() || !is_markdown_file(path) {
                continue;
            }

            let post = match self.load_post(path) {
                Ok(post) => post,
                Err(e) => {
                    tracing::warn!("Skipping {:?}: {}", path, e);
                    continue;
                }
            };

            if post.draft {
                tracing::debug!("Skipping draft {:?}", path);
                continue;
            }

            if let Some(first) = seen.insert(post.slug.clone(), path.to_path_buf()) {
                return Err(Error::DuplicateSlug {
                    slug: post.slug,
                    first,
                    second: path.to_path_buf(),
                }
                .into());
            }

            posts.push(post);
        }

        // Newest first; ties broken by title for a stable order
        posts.sort_by(|a, b| b.date.cmp(&a.date).then_with(|| a.title.cmp(&b.title)));

        Ok(posts)
    }

    /// Load a single post from a file
    pub fn load_post(&self, path: &Path) -> Result<Content> {
        let source = fs::read_to_string(path)?;
        let (fm, body) = FrontMatter::parse(&source)?;

        let title = fm
            .title
            .clone()
            .filter(|t| !t.trim().is_empty())
            .ok_or_else(|| Error::MissingTitle {
                path: path.to_path_buf(),
            })?;
        let date = fm.parse_date()?.ok_or_else(|| Error::MissingDate {
            path: path.to_path_buf(),
        })?;

        let slug = slug_for(&self.site.blog_dir, path);
        let html = self.renderer.render(body);
        let reading_time =
            ReadingTime::estimate(&strip_html(&html), self.site.config.words_per_minute);

        let mut post = Content::new(&self.site.config.blog_dir, &slug, &title, date);
        post.tags = fm.tags.clone();
        post.reading_time = reading_time;
        post.summary = fm.summary.clone();
        post.lastmod = fm.parse_lastmod()?;
        post.images = fm.images.clone();
        post.authors = fm.authors.clone();
        post.draft = fm.draft;
        post.canonical_url = fm.canonical_url.clone();
        post.body = html;
        post.source = path.to_path_buf();

        Ok(post)
    }
}

/// Slug of a post file: its path under the blog directory without extension
fn slug_for(blog_dir: &Path, path: &Path) -> String {
    let relative = path.strip_prefix(blog_dir).unwrap_or(path);
    let without_ext = relative.with_extension("");
    without_ext
        .components()
        .filter_map(|c| c.as_os_str().to_str())
        .collect::<Vec<_>>()
        .join("/")
}

/// Check if a file is a markdown file
fn is_markdown_file(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|e| e == "md" || e == "mdx" || e == "markdown")
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use tempfile::TempDir;

    fn site_with_posts(posts: &[(&str, &str)]) -> (TempDir, Site) {
        let dir = TempDir::new().unwrap();
        let site = Site::new(dir.path()).unwrap();
        for (name, content) in posts {
            let file = site.blog_dir.join(name);
            fs::create_dir_all(file.parent().unwrap()).unwrap();
            fs::write(file, content).unwrap();
        }
        (dir, site)
    }

    #[test]
    fn test_load_posts_sorted_newest_first() {
        let (_dir, site) = site_with_posts(&[
            ("old.md", "---\ntitle: Old\ndate: 2022-05-01\n---\nOld body\n"),
            (
                "2023/new.md",
                "---\ntitle: New\ndate: 2023-01-01\ntags: [go, rust]\n---\nNew body\n",
            ),
        ]);

        let posts = ContentLoader::new(&site).load_posts().unwrap();
        assert_eq!(posts.len(), 2);

        assert_eq!(posts[0].title, "New");
        assert_eq!(posts[0].slug, "2023/new");
        assert_eq!(posts[0].path, "blog/2023/new");
        assert_eq!(posts[0].tags, vec!["go", "rust"]);
        assert_eq!(posts[0].date, NaiveDate::from_ymd_opt(2023, 1, 1).unwrap());
        assert!(posts[0].body.contains("<p>New body</p>"));

        assert_eq!(posts[1].slug, "old");
    }

    #[test]
    fn test_drafts_and_broken_posts_are_skipped() {
        let (_dir, site) = site_with_posts(&[
            ("draft.md", "---\ntitle: Draft\ndate: 2023-01-01\ndraft: true\n---\n"),
            ("untitled.md", "---\ndate: 2023-01-01\n---\nNo title\n"),
            ("undated.md", "---\ntitle: Undated\n---\n"),
            ("notes.txt", "not markdown"),
            ("ok.md", "---\ntitle: Ok\ndate: 2023-01-02\n---\nFine\n"),
        ]);

        let posts = ContentLoader::new(&site).load_posts().unwrap();
        let titles: Vec<_> = posts.iter().map(|p| p.title.as_str()).collect();
        assert_eq!(titles, vec!["Ok"]);
    }

    #[test]
    fn test_duplicate_slug_is_an_error() {
        let (_dir, site) = site_with_posts(&[
            ("same.md", "---\ntitle: One\ndate: 2023-01-01\n---\n"),
            ("same.mdx", "---\ntitle: Two\ndate: 2023-01-02\n---\n"),
        ]);

        let err = ContentLoader::new(&site).load_posts().unwrap_err();
        assert!(matches!(
            err.downcast_ref::<Error>(),
            Some(Error::DuplicateSlug { .. })
        ));
    }

    #[test]
    fn test_missing_blog_dir_yields_no_posts() {
        let dir = TempDir::new().unwrap();
        let site = Site::new(dir.path()).unwrap();
        assert!(ContentLoader::new(&site).load_posts().unwrap().is_empty());
    }

    #[test]
    fn test_reading_time_uses_rendered_text() {
        let body = vec!["word"; 250].join(" ");
        let post = format!("---\ntitle: Long\ndate: 2023-01-01\n---\n{}\n", body);
        let (_dir, site) = site_with_posts(&[("long.md", post.as_str())]);

        let posts = ContentLoader::new(&site).load_posts().unwrap();
        assert_eq!(posts[0].reading_time.words, 250);
        assert_eq!(posts[0].reading_time.text, "2 min read");
    }
}
