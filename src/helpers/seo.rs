//! SEO head tags for post pages

use serde_json::json;

use super::{date_iso, full_url_for, html_escape, strip_html, truncate, SeoRenderer};
use crate::config::SiteConfig;
use crate::content::Content;

/// Maximum length of a description derived from the post body
const DESCRIPTION_LENGTH: usize = 160;

/// Default SEO renderer: title, canonical link, Open Graph, Twitter card and JSON-LD
pub struct BlogSeo;

impl SeoRenderer for BlogSeo {
    fn render(&self, config: &SiteConfig, canonical_url: &str, content: &Content) -> String {
        let title = format!("{} | {}", content.title, config.title);
        let description = description(config, content);
        let canonical = content.canonical_url.as_deref().unwrap_or(canonical_url);
        let published = date_iso(&content.date);
        let modified = date_iso(content.lastmod.as_ref().unwrap_or(&content.date));

        let images: Vec<String> = if content.images.is_empty() {
            config
                .social_banner
                .iter()
                .map(|banner| full_url_for(config, banner))
                .collect()
        } else {
            content
                .images
                .iter()
                .map(|img| full_url_for(config, img))
                .collect()
        };

        let mut tags = vec![
            format!("<title>{}</title>", html_escape(&title)),
            format!(
                r#"<meta name="description" content="{}">"#,
                html_escape(&description)
            ),
            format!(r#"<link rel="canonical" href="{}">"#, html_escape(canonical)),
            r#"<meta property="og:type" content="article">"#.to_string(),
            format!(
                r#"<meta property="og:title" content="{}">"#,
                html_escape(&content.title)
            ),
            format!(
                r#"<meta property="og:description" content="{}">"#,
                html_escape(&description)
            ),
            format!(
                r#"<meta property="og:url" content="{}">"#,
                html_escape(canonical)
            ),
            format!(
                r#"<meta property="og:site_name" content="{}">"#,
                html_escape(&config.title)
            ),
            format!(
                r#"<meta property="article:published_time" content="{}">"#,
                published
            ),
            format!(
                r#"<meta property="article:modified_time" content="{}">"#,
                modified
            ),
            r#"<meta name="twitter:card" content="summary_large_image">"#.to_string(),
            format!(
                r#"<meta name="twitter:title" content="{}">"#,
                html_escape(&content.title)
            ),
            format!(
                r#"<meta name="twitter:description" content="{}">"#,
                html_escape(&description)
            ),
        ];

        for image in &images {
            tags.push(format!(
                r#"<meta property="og:image" content="{}">"#,
                html_escape(image)
            ));
        }
        if let Some(image) = images.first() {
            tags.push(format!(
                r#"<meta name="twitter:image" content="{}">"#,
                html_escape(image)
            ));
        }

        tags.push(structured_data(config, canonical, content, &description, &images));
        tags.join("\n")
    }
}

/// Summary from front-matter, else the start of the body, else the site description
fn description(config: &SiteConfig, content: &Content) -> String {
    if let Some(summary) = content.summary.as_deref().filter(|s| !s.trim().is_empty()) {
        return summary.to_string();
    }

    let text = strip_html(&content.body)
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ");
    if text.is_empty() {
        config.description.clone()
    } else {
        truncate(&text, DESCRIPTION_LENGTH)
    }
}

/// JSON-LD BlogPosting block
fn structured_data(
    config: &SiteConfig,
    canonical_url: &str,
    content: &Content,
    description: &str,
    images: &[String],
) -> String {
    let authors: Vec<_> = if content.authors.is_empty() {
        vec![json!({ "@type": "Person", "name": config.author })]
    } else {
        content
            .authors
            .iter()
            .map(|name| json!({ "@type": "Person", "name": name }))
            .collect()
    };

    let mut data = json!({
        "@context": "https://schema.org",
        "@type": "BlogPosting",
        "mainEntityOfPage": { "@type": "WebPage", "@id": canonical_url },
        "headline": content.title,
        "image": images,
        "datePublished": date_iso(&content.date),
        "dateModified": date_iso(content.lastmod.as_ref().unwrap_or(&content.date)),
        "author": authors,
        "description": description,
        "keywords": content.tags,
    });

    if let Some(logo) = &config.site_logo {
        data["publisher"] = json!({
            "@type": "Organization",
            "name": config.author,
            "logo": { "@type": "ImageObject", "url": full_url_for(config, logo) },
        });
    }

    // A literal `<` could close the script element early
    let serialized = data.to_string().replace('<', "\\u003c");
    format!(
        r#"<script type="application/ld+json">{}</script>"#,
        serialized
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn content() -> Content {
        let mut c = Content::new(
            "blog",
            "a",
            "Hello <World>",
            NaiveDate::from_ymd_opt(2023, 1, 1).unwrap(),
        );
        c.body = "<p>Some body text</p>".to_string();
        c.tags = vec!["x".to_string()];
        c
    }

    #[test]
    fn test_basic_tags() {
        let config = SiteConfig {
            title: "Site".to_string(),
            social_banner: Some("static/banner.png".to_string()),
            site_url: "https://example.com".to_string(),
            ..SiteConfig::default()
        };
        let html = BlogSeo.render(&config, "https://example.com/blog/a", &content());

        assert!(html.contains("<title>Hello &lt;World&gt; | Site</title>"));
        assert!(html.contains(r#"<link rel="canonical" href="https://example.com/blog/a">"#));
        assert!(html.contains(r#"<meta name="description" content="Some body text">"#));
        assert!(html.contains(r#"content="https://example.com/static/banner.png""#));
        assert!(
            html.contains(r#"<meta property="article:published_time" content="2023-01-01">"#)
        );
        assert!(html.contains(r#""@type":"BlogPosting""#));
        assert!(!html.contains("<World>"));
    }

    #[test]
    fn test_summary_and_canonical_override() {
        let mut c = content();
        c.summary = Some("Short summary".to_string());
        c.canonical_url = Some("https://elsewhere.dev/a".to_string());

        let html = BlogSeo.render(&SiteConfig::default(), "http://example.com/blog/a", &c);
        assert!(html.contains(r#"content="Short summary""#));
        assert!(html.contains(r#"<link rel="canonical" href="https://elsewhere.dev/a">"#));
        assert!(html.contains(r#"<meta property="og:url" content="https://elsewhere.dev/a">"#));
        assert!(html.contains(r#""@id":"https://elsewhere.dev/a""#));
        assert!(!html.contains("http://example.com/blog/a"));
    }
}
