//! Content records and navigation pointers

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use super::ReadingTime;
use crate::Error;

/// A fully resolved blog post
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Content {
    /// Site-relative path without leading slash, e.g. `blog/hello`
    pub path: String,

    /// Path relative to the blog directory, e.g. `hello` or `2023/hello`
    pub slug: String,

    /// Publication date
    pub date: NaiveDate,

    /// Post title
    pub title: String,

    /// Tags in front-matter order
    pub tags: Vec<String>,

    /// Reading-time estimate
    pub reading_time: ReadingTime,

    /// Short description used for SEO tags
    pub summary: Option<String>,

    /// Last modification date
    pub lastmod: Option<NaiveDate>,

    /// Social images, site-relative or absolute
    pub images: Vec<String>,

    /// Author names
    pub authors: Vec<String>,

    /// Draft posts are skipped when generating
    pub draft: bool,

    /// Canonical URL overriding the site one
    pub canonical_url: Option<String>,

    /// Rendered HTML body
    pub body: String,

    /// Source file
    #[serde(skip)]
    pub source: PathBuf,
}

impl Content {
    /// Create a post with the required fields, deriving `path` from the blog directory
    pub fn new(blog_dir: &str, slug: &str, title: &str, date: NaiveDate) -> Self {
        let blog_dir = blog_dir.trim_matches('/');
        let slug = slug.trim_matches('/');
        let path = if blog_dir.is_empty() {
            slug.to_string()
        } else {
            format!("{}/{}", blog_dir, slug)
        };

        Self {
            path,
            slug: slug.to_string(),
            date,
            title: title.to_string(),
            tags: Vec::new(),
            reading_time: ReadingTime::from_text("1 min read"),
            summary: None,
            lastmod: None,
            images: Vec::new(),
            authors: Vec::new(),
            draft: false,
            canonical_url: None,
            body: String::new(),
            source: PathBuf::new(),
        }
    }

    /// Pointer to this post for the neighbours' navigation row
    pub fn nav_pointer(&self) -> Result<NavPointer, Error> {
        NavPointer::new(&self.path, &self.title)
    }
}

/// A reference to an adjacent post
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "NavPointerFields")]
pub struct NavPointer {
    path: String,
    title: String,
}

/// Unchecked wire form of [`NavPointer`]
#[derive(Deserialize)]
struct NavPointerFields {
    path: String,
    title: String,
}

impl TryFrom<NavPointerFields> for NavPointer {
    type Error = Error;

    fn try_from(fields: NavPointerFields) -> Result<Self, Error> {
        Self::new(&fields.path, &fields.title)
    }
}

impl NavPointer {
    /// Create a pointer; both path and title must be non-empty
    pub fn new(path: &str, title: &str) -> Result<Self, Error> {
        let path = path.trim_matches('/');
        if path.is_empty() {
            return Err(Error::EmptyNavPointer { field: "path" });
        }
        if title.trim().is_empty() {
            return Err(Error::EmptyNavPointer { field: "title" });
        }
        Ok(Self {
            path: path.to_string(),
            title: title.to_string(),
        })
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn title(&self) -> &str {
        &self.title
    }
}

/// Previous (older) and next (newer) neighbours of a post
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Neighbours {
    pub prev: Option<NavPointer>,
    pub next: Option<NavPointer>,
}

/// Compute navigation for each post of a list sorted newest first.
///
/// `prev` points to the older post, `next` to the newer one.
pub fn neighbours(posts: &[Content]) -> Result<Vec<Neighbours>, Error> {
    let mut result = Vec::with_capacity(posts.len());

    for i in 0..posts.len() {
        let prev = posts.get(i + 1).map(Content::nav_pointer).transpose()?;
        let next = match i {
            0 => None,
            _ => Some(posts[i - 1].nav_pointer()?),
        };
        result.push(Neighbours { prev, next });
    }

    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn post(slug: &str, title: &str, day: u32) -> Content {
        Content::new("blog", slug, title, NaiveDate::from_ymd_opt(2023, 1, day).unwrap())
    }

    #[test]
    fn test_path_from_slug() {
        let p = post("nested/hello", "Hello", 1);
        assert_eq!(p.path, "blog/nested/hello");
        assert_eq!(p.slug, "nested/hello");
    }

    #[test]
    fn test_nav_pointer_rejects_empty_fields() {
        assert!(matches!(
            NavPointer::new("", "Title"),
            Err(Error::EmptyNavPointer { field: "path" })
        ));
        assert!(matches!(
            NavPointer::new("blog/a", "  "),
            Err(Error::EmptyNavPointer { field: "title" })
        ));
        let nav = NavPointer::new("/blog/a/", "Post A").unwrap();
        assert_eq!(nav.path(), "blog/a");
        assert_eq!(nav.title(), "Post A");
    }

    #[test]
    fn test_nav_pointer_deserialize_is_checked() {
        let nav: NavPointer =
            serde_json::from_str(r#"{"path": "/blog/a/", "title": "Post A"}"#).unwrap();
        assert_eq!(nav.path(), "blog/a");

        assert!(serde_json::from_str::<NavPointer>(r#"{"path": "", "title": "A"}"#).is_err());
        assert!(serde_json::from_str::<NavPointer>(r#"{"path": "a", "title": " "}"#).is_err());
    }

    #[test]
    fn test_neighbours() {
        let posts = vec![post("c", "C", 3), post("b", "B", 2), post("a", "A", 1)];
        let nav = neighbours(&posts).unwrap();

        assert_eq!(nav[0].next, None);
        assert_eq!(nav[0].prev.as_ref().map(NavPointer::title), Some("B"));

        assert_eq!(nav[1].next.as_ref().map(NavPointer::title), Some("C"));
        assert_eq!(nav[1].prev.as_ref().map(NavPointer::title), Some("A"));

        assert_eq!(nav[2].next.as_ref().map(NavPointer::path), Some("blog/b"));
        assert_eq!(nav[2].prev, None);
    }

    #[test]
    fn test_single_post_has_no_neighbours() {
        let nav = neighbours(&[post("a", "A", 1)]).unwrap();
        assert_eq!(nav, vec![Neighbours::default()]);
    }
}
