//! HTML helper functions

use super::url::url_for;

/// Generate an anchor tag, with optional extra attributes already rendered
///
/// # Examples
/// ```ignore
/// link_to("blog/a", "Post A", r#"aria-label="Post A""#) // -> <a href="/blog/a" aria-label="Post A">Post A</a>
/// ```
pub fn link_to(path: &str, text: &str, attrs: &str) -> String {
    let href = if path.starts_with("http://") || path.starts_with("https://") {
        path.to_string()
    } else {
        url_for(path)
    };

    if attrs.is_empty() {
        format!(r#"<a href="{}">{}</a>"#, html_escape(&href), text)
    } else {
        format!(r#"<a href="{}" {}>{}</a>"#, html_escape(&href), attrs, text)
    }
}

/// Escape HTML special characters
pub fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

/// Strip HTML tags from a string
pub fn strip_html(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    let mut in_tag = false;

    for c in s.chars() {
        match c {
            '<' => in_tag = true,
            '>' => {
                in_tag = false;
                result.push(' ');
            }
            _ if !in_tag => result.push(c),
            _ => {}
        }
    }

    result
}

/// Truncate a string to a number of characters
pub fn truncate(s: &str, length: usize) -> String {
    if s.chars().count() <= length {
        s.to_string()
    } else {
        let truncated: String = s.chars().take(length.saturating_sub(3)).collect();
        format!("{}...", truncated.trim_end())
    }
}
