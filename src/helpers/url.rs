//! URL helper functions

use crate::config::SiteConfig;

/// Generate a root-relative URL
///
/// # Examples
/// ```ignore
/// url_for("blog/hello") // -> "/blog/hello"
/// ```
pub fn url_for(path: &str) -> String {
    format!("/{}", path.trim_start_matches('/'))
}

/// Generate a full URL including the site domain
///
/// # Examples
/// ```ignore
/// full_url_for(&config, "blog/hello") // -> "https://example.com/blog/hello"
/// ```
pub fn full_url_for(config: &SiteConfig, path: &str) -> String {
    if path.starts_with("http://") || path.starts_with("https://") {
        return path.to_string();
    }
    format!("{}{}", config.base_url(), url_for(path))
}

/// URL of a tag listing page
pub fn tag_url(config: &SiteConfig, tag: &str) -> String {
    url_for(&format!(
        "{}/{}",
        config.tag_dir.trim_matches('/'),
        slug::slugify(tag)
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_config() -> SiteConfig {
        SiteConfig {
            site_url: "https://example.com/".to_string(),
            ..SiteConfig::default()
        }
    }

    #[test]
    fn test_url_for() {
        assert_eq!(url_for("blog/a"), "/blog/a");
        assert_eq!(url_for("/blog/a"), "/blog/a");
    }

    #[test]
    fn test_full_url_for() {
        let config = test_config();
        assert_eq!(
            full_url_for(&config, "blog/a"),
            "https://example.com/blog/a"
        );
        assert_eq!(
            full_url_for(&config, "https://cdn.example.com/x.png"),
            "https://cdn.example.com/x.png"
        );
    }

    #[test]
    fn test_tag_url() {
        let config = test_config();
        assert_eq!(tag_url(&config, "Next JS"), "/tags/next-js");
    }
}
