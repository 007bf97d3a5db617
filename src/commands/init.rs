//! Initialize a new site

use anyhow::Result;
use std::fs;
use std::path::Path;

use crate::config::SiteConfig;
use crate::CONFIG_FILE;

const STYLE_CSS: &str = r#"body { max-width: 48rem; margin: 0 auto; padding: 0 1rem; font-family: system-ui, sans-serif; }
.sr-only { position: absolute; width: 1px; height: 1px; overflow: hidden; clip: rect(0, 0, 0, 0); }
.tags .tag { margin-right: .75rem; text-transform: uppercase; font-size: .875rem; }
.post-nav { display: flex; justify-content: space-between; }
.comments { padding: 1.5rem 0; text-align: center; }
.scroll-buttons { position: fixed; right: 2rem; bottom: 2rem; display: flex; flex-direction: column; gap: .75rem; }
"#;

const HELLO_POST: &str = r#"---
title: Hello World
date: 2023-01-01
tags: [welcome]
summary: The first post of a new blog.
---

Welcome to your new blog. Edit or delete this post, then run `postpage generate`.
"#;

/// Scaffold a site: config, a first post and a stylesheet
pub fn init_site(target: &Path) -> Result<()> {
    let config_path = target.join(CONFIG_FILE);
    if config_path.exists() {
        anyhow::bail!("{:?} already contains a site", target);
    }

    let config = SiteConfig::default();
    fs::create_dir_all(target)?;
    fs::write(&config_path, serde_yaml::to_string(&config)?)?;

    let blog_dir = target.join(&config.content_dir).join(&config.blog_dir);
    fs::create_dir_all(&blog_dir)?;
    fs::write(blog_dir.join("hello-world.md"), HELLO_POST)?;

    let css_dir = target.join(&config.static_dir).join("css");
    fs::create_dir_all(&css_dir)?;
    fs::write(css_dir.join("style.css"), STYLE_CSS)?;

    tracing::info!("Initialized site in {:?}", target);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::ContentLoader;
    use crate::Site;
    use tempfile::TempDir;

    #[test]
    fn test_init_site() {
        let dir = TempDir::new().unwrap();
        init_site(dir.path()).unwrap();

        let site = Site::new(dir.path()).unwrap();
        let posts = ContentLoader::new(&site).load_posts().unwrap();
        assert_eq!(posts.len(), 1);
        assert_eq!(posts[0].slug, "hello-world");
        assert!(site.static_dir.join("css/style.css").exists());

        assert!(init_site(dir.path()).is_err());
    }
}
