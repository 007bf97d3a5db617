//! Generator module - writes post pages and static assets to the public directory

use anyhow::{Context as _, Result};
use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

use crate::content::{neighbours, Content, NavPointer};
use crate::helpers::Components;
use crate::layout::{PostLayout, PostProps, COMMENTS_SEGMENT};
use crate::templates::TemplateRenderer;
use crate::{Error, Site};

/// Static site generator
pub struct Generator {
    site: Site,
    components: Components,
    renderer: TemplateRenderer,
}

impl Generator {
    /// Create a generator with the default components
    pub fn new(site: &Site) -> Result<Self> {
        Self::with_components(site, Components::default())
    }

    /// Create a generator with custom components
    pub fn with_components(site: &Site, components: Components) -> Result<Self> {
        Ok(Self {
            site: site.clone(),
            components,
            renderer: TemplateRenderer::new()?,
        })
    }

    /// Generate the entire site from posts sorted newest first.
    ///
    /// Returns the number of pages written.
    pub fn generate(&self, posts: &[Content]) -> Result<usize> {
        if self.site.config.comments_enabled() {
            check_comments_routes(posts)?;
        }

        fs::create_dir_all(&self.site.public_dir)?;

        self.copy_static_assets()?;

        let nav = neighbours(posts)?;
        let mut written = 0;

        for (post, nav) in posts.iter().zip(&nav) {
            written += self.generate_post(post, nav.prev.as_ref(), nav.next.as_ref())?;
        }

        Ok(written)
    }

    /// Write one post page, plus its comments-loaded variant when comments are on
    fn generate_post(
        &self,
        post: &Content,
        prev: Option<&NavPointer>,
        next: Option<&NavPointer>,
    ) -> Result<usize> {
        let props = PostProps {
            content: post,
            children: &post.body,
            prev,
            next,
        };
        let mut layout =
            PostLayout::new(&self.site.config, &self.components, &self.renderer, props);

        let page_dir = self.site.public_dir.join(&post.path);
        write_page(&page_dir, &layout.render()?)?;
        tracing::debug!("Generated post: {:?}", page_dir);

        if !self.site.config.comments_enabled() {
            return Ok(1);
        }

        layout.load_comments();
        let comments_dir = page_dir.join(COMMENTS_SEGMENT);
        write_page(&comments_dir, &layout.render()?)?;
        tracing::debug!("Generated comments page: {:?}", comments_dir);

        Ok(2)
    }

    /// Copy the static directory verbatim into the public directory
    fn copy_static_assets(&self) -> Result<()> {
        let static_dir = &self.site.static_dir;
        if !static_dir.exists() {
            return Ok(());
        }

        for entry in WalkDir::new(static_dir)
            .follow_links(true)
            .into_iter()
            .filter_map(|e| e.ok())
        {
            let path = entry.path();
            if !path.is_file() {
                continue;
            }

            let relative = path.strip_prefix(static_dir)?;
            let dest = self.site.public_dir.join(relative);
            if let Some(parent) = dest.parent() {
                fs::create_dir_all(parent)?;
            }
            fs::copy(path, &dest)
                .with_context(|| format!("Failed to copy {:?} to {:?}", path, dest))?;
        }

        Ok(())
    }
}

/// Fail if a post lives where another post's comments page would be written
fn check_comments_routes(posts: &[Content]) -> Result<(), Error> {
    let paths: HashSet<&str> = posts.iter().map(|p| p.path.as_str()).collect();

    for post in posts {
        let parent = post
            .path
            .strip_suffix(COMMENTS_SEGMENT)
            .and_then(|rest| rest.strip_suffix('/'));
        if let Some(parent) = parent.filter(|parent| paths.contains(parent)) {
            return Err(Error::CommentsRouteTaken {
                path: post.path.clone(),
                post: parent.to_string(),
                taken_by: post.source.clone(),
            });
        }
    }

    Ok(())
}

/// Write `index.html` into a directory, creating it first
fn write_page(dir: &Path, html: &str) -> Result<PathBuf> {
    fs::create_dir_all(dir).with_context(|| format!("Failed to create dir {:?}", dir))?;
    let output_path = dir.join("index.html");
    fs::write(&output_path, html).with_context(|| format!("Failed to write {:?}", output_path))?;
    Ok(output_path)
}
