//! Tag list for the post header

use super::{html_escape, link_to, tag_url, TagsRenderer};
use crate::config::SiteConfig;

/// Default tag list: one link per tag, in the given order
pub struct BlogTags;

impl TagsRenderer for BlogTags {
    fn render(&self, config: &SiteConfig, tags: &[String]) -> String {
        if tags.is_empty() {
            return String::new();
        }

        let links: String = tags
            .iter()
            .map(|tag| link_to(&tag_url(config, tag), &html_escape(tag), r#"class="tag""#))
            .collect();

        format!(r#"<div class="tags">{}</div>"#, links)
    }
}
