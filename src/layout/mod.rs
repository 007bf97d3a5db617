//! The post page layout
//!
//! [`PostLayout`] renders one post: SEO head tags, header (title, tags,
//! metadata line), body, the comments region and the prev/next row. The
//! comments widget is lazy: until [`PostLayout::load_comments`] is called
//! only an activation control is rendered, and the comments collaborator is
//! not invoked at all.

use anyhow::Result;
use tera::Context;

use crate::config::SiteConfig;
use crate::content::{Content, NavPointer};
use crate::helpers::{full_url_for, html_escape, url_for, Components};
use crate::templates::{CommentsData, NavLink, TemplateRenderer};

/// Path segment under a post serving its page with comments loaded
pub const COMMENTS_SEGMENT: &str = "comments";

/// Inputs of a post page
#[derive(Debug, Clone, Copy)]
pub struct PostProps<'a> {
    pub content: &'a Content,
    /// Rendered body, inserted verbatim
    pub children: &'a str,
    pub prev: Option<&'a NavPointer>,
    pub next: Option<&'a NavPointer>,
}

/// One post page instance and its comments toggle
pub struct PostLayout<'a> {
    config: &'a SiteConfig,
    components: &'a Components,
    templates: &'a TemplateRenderer,
    props: PostProps<'a>,
    comments_loaded: bool,
}

impl<'a> PostLayout<'a> {
    pub fn new(
        config: &'a SiteConfig,
        components: &'a Components,
        templates: &'a TemplateRenderer,
        props: PostProps<'a>,
    ) -> Self {
        Self {
            config,
            components,
            templates,
            props,
            comments_loaded: false,
        }
    }

    /// Activate the comments widget. Once loaded it stays loaded.
    pub fn load_comments(&mut self) {
        if !self.comments_loaded {
            tracing::debug!("Loading comments for {}", self.props.content.slug);
        }
        self.comments_loaded = true;
    }

    pub fn comments_loaded(&self) -> bool {
        self.comments_loaded
    }

    /// Render the complete page
    pub fn render(&self) -> Result<String> {
        let config = self.config;
        let content = self.props.content;
        let components = self.components;

        let canonical_url = full_url_for(config, &content.path);

        let mut context = Context::new();
        context.insert("config", config);
        context.insert(
            "seo",
            &components.seo.render(config, &canonical_url, content),
        );
        context.insert("scroll", &components.scroll.render(config));
        context.insert("title", &content.title);
        context.insert("tags", &components.tags.render(config, &content.tags));
        context.insert(
            "meta",
            &components
                .meta
                .render(config, &content.date, &content.slug, &content.reading_time),
        );
        context.insert("children", self.props.children);
        context.insert("comments", &self.comments_data());
        context.insert("prev", &self.props.prev.map(nav_link));
        context.insert("next", &self.props.next.map(nav_link));

        self.templates.render("post.html", &context)
    }

    fn comments_data(&self) -> CommentsData {
        let content = self.props.content;
        let comments = self.config.enabled_comments();

        let html = match comments {
            Some(comments) if self.comments_loaded => {
                self.components.comments.render(comments, &content.slug)
            }
            _ => String::new(),
        };

        CommentsData {
            enabled: comments.is_some(),
            loaded: self.comments_loaded,
            html,
            activate_url: html_escape(&comments_url(&content.path)),
        }
    }
}

/// URL of a post's page with comments loaded, anchored at the comments region
pub fn comments_url(path: &str) -> String {
    format!(
        "{}/{}/#comment",
        url_for(path.trim_end_matches('/')),
        COMMENTS_SEGMENT
    )
}

fn nav_link(nav: &NavPointer) -> NavLink {
    NavLink {
        href: html_escape(&url_for(nav.path())),
        title: nav.title().to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::CommentsConfig;
    use crate::content::ReadingTime;
    use crate::helpers::CommentsRenderer;
    use chrono::NaiveDate;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    /// Comments collaborator that records how often it was asked to render
    struct CountingComments(Arc<AtomicUsize>);

    impl CommentsRenderer for CountingComments {
        fn render(&self, _comments: &CommentsConfig, slug: &str) -> String {
            self.0.fetch_add(1, Ordering::SeqCst);
            format!(r#"<div class="thread" data-thread="{}"></div>"#, slug)
        }
    }

    fn components(calls: &Arc<AtomicUsize>) -> Components {
        Components {
            comments: Box::new(CountingComments(calls.clone())),
            ..Components::default()
        }
    }

    fn config(comments: bool) -> SiteConfig {
        SiteConfig {
            site_url: "https://example.com".to_string(),
            comments: comments.then(CommentsConfig::default),
            ..SiteConfig::default()
        }
    }

    fn scenario_content() -> Content {
        let mut content = Content::new(
            "blog",
            "a",
            "Hello",
            NaiveDate::from_ymd_opt(2023, 1, 1).unwrap(),
        );
        content.tags = vec!["x".to_string()];
        content.reading_time = ReadingTime::from_text("1 min");
        content
    }

    fn props<'a>(
        content: &'a Content,
        prev: Option<&'a NavPointer>,
        next: Option<&'a NavPointer>,
    ) -> PostProps<'a> {
        PostProps {
            content,
            children: "<p>Body text</p>",
            prev,
            next,
        }
    }

    #[test]
    fn test_scenario() {
        let calls = Arc::new(AtomicUsize::new(0));
        let components = components(&calls);
        let templates = TemplateRenderer::new().unwrap();
        let config = config(true);
        let content = scenario_content();

        let mut layout =
            PostLayout::new(&config, &components, &templates, props(&content, None, None));
        let html = layout.render().unwrap();

        assert!(html.contains(r#"<h1 class="page-title">Hello</h1>"#));
        assert_eq!(html.matches(r#"class="tag""#).count(), 1);
        assert!(html.contains(">x</a>"));
        assert!(html.contains("2023-01-01"));
        assert!(html.contains("Load Comments"));
        assert!(html.contains(r#"action="/blog/a/comments/#comment""#));
        assert!(html.contains("<p>Body text</p>"));
        assert!(!html.contains("Previous post:"));
        assert!(!html.contains("Next post:"));
        assert_eq!(calls.load(Ordering::SeqCst), 0);

        layout.load_comments();
        let html = layout.render().unwrap();
        assert!(!html.contains("Load Comments"));
        assert!(html.contains(r#"data-thread="a""#));
    }

    #[test]
    fn test_comments_toggle_is_monotonic() {
        let calls = Arc::new(AtomicUsize::new(0));
        let components = components(&calls);
        let templates = TemplateRenderer::new().unwrap();
        let config = config(true);
        let content = scenario_content();

        let mut layout =
            PostLayout::new(&config, &components, &templates, props(&content, None, None));
        assert!(!layout.comments_loaded());
        for _ in 0..3 {
            assert!(!layout.render().unwrap().contains("data-thread"));
        }
        assert_eq!(calls.load(Ordering::SeqCst), 0);

        layout.load_comments();
        let first = layout.render().unwrap();
        layout.load_comments();
        let second = layout.render().unwrap();

        assert!(layout.comments_loaded());
        assert!(first.contains("data-thread"));
        assert_eq!(first, second);
        assert_eq!(calls.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn test_comments_disabled() {
        let calls = Arc::new(AtomicUsize::new(0));
        let components = components(&calls);
        let templates = TemplateRenderer::new().unwrap();
        let config = config(false);
        let content = scenario_content();

        let mut layout =
            PostLayout::new(&config, &components, &templates, props(&content, None, None));
        for loaded in [false, true] {
            if loaded {
                layout.load_comments();
            }
            let html = layout.render().unwrap();
            assert!(!html.contains("Load Comments"));
            assert!(!html.contains("data-thread"));
            assert!(!html.contains(r#"id="comment""#));
        }
        assert_eq!(calls.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn test_comments_switched_off_in_config() {
        let calls = Arc::new(AtomicUsize::new(0));
        let components = components(&calls);
        let templates = TemplateRenderer::new().unwrap();
        let mut config = config(true);
        if let Some(comments) = config.comments.as_mut() {
            comments.enabled = false;
        }
        let content = scenario_content();

        let mut layout =
            PostLayout::new(&config, &components, &templates, props(&content, None, None));
        layout.load_comments();
        assert!(!layout.render().unwrap().contains("Load Comments"));
        assert_eq!(calls.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn test_prev_only() {
        let components = Components::default();
        let templates = TemplateRenderer::new().unwrap();
        let config = config(false);
        let content = scenario_content();
        let prev = NavPointer::new("a", "Post A").unwrap();

        let layout =
            PostLayout::new(&config, &components, &templates, props(&content, Some(&prev), None));
        let html = layout.render().unwrap();

        assert!(html.contains(
            r#"<a href="/a" aria-label="Previous post: Post A">&larr; Post A</a>"#
        ));
        assert!(!html.contains("Next post:"));
        assert!(!html.contains("post-nav-next"));
    }

    #[test]
    fn test_next_only() {
        let components = Components::default();
        let templates = TemplateRenderer::new().unwrap();
        let config = config(false);
        let content = scenario_content();
        let next = NavPointer::new("blog/b", "Post B").unwrap();

        let layout =
            PostLayout::new(&config, &components, &templates, props(&content, None, Some(&next)));
        let html = layout.render().unwrap();

        assert!(html.contains(
            r#"<a href="/blog/b" aria-label="Next post: Post B">Post B &rarr;</a>"#
        ));
        assert!(!html.contains("Previous post:"));
        assert!(!html.contains("post-nav-prev"));
    }

    #[test]
    fn test_tags_in_order() {
        let components = Components::default();
        let templates = TemplateRenderer::new().unwrap();
        let config = config(false);
        let mut content = scenario_content();
        content.tags = vec!["go".to_string(), "rust".to_string()];

        let layout =
            PostLayout::new(&config, &components, &templates, props(&content, None, None));
        let html = layout.render().unwrap();
        let go = html.find(">go</a>").unwrap();
        let rust = html.find(">rust</a>").unwrap();
        assert!(go < rust);

        content.tags.clear();
        let layout =
            PostLayout::new(&config, &components, &templates, props(&content, None, None));
        let html = layout.render().unwrap();
        assert!(!html.contains(r#"class="tag""#));
        assert!(!html.contains(r#"class="tags""#));
    }

    #[test]
    fn test_title_is_escaped_and_seo_is_emitted() {
        let components = Components::default();
        let templates = TemplateRenderer::new().unwrap();
        let config = config(false);
        let mut content = scenario_content();
        content.title = "Tom & <Jerry>".to_string();

        let layout =
            PostLayout::new(&config, &components, &templates, props(&content, None, None));
        let html = layout.render().unwrap();
        assert!(html.contains("Tom &amp; &lt;Jerry&gt;"));
        assert!(!html.contains("<Jerry>"));
        assert!(html.contains(r#"<link rel="canonical" href="https://example.com/blog/a">"#));
        assert!(html.contains("Scroll To Top"));
    }

    #[test]
    fn test_comments_url() {
        assert_eq!(comments_url("blog/a"), "/blog/a/comments/#comment");
        assert_eq!(comments_url("blog/2023/a/"), "/blog/2023/a/comments/#comment");
    }
}
