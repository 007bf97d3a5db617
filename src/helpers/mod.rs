//! Page fragments and the collaborators the post layout composes
//!
//! Each collaborator is a narrow capability trait producing an HTML fragment.
//! [`Components`] bundles one implementation of each; the defaults render
//! the built-in theme, tests swap in their own.

mod comments;
mod date;
mod html;
mod meta;
mod scroll;
mod seo;
mod tags;
mod url;

pub use comments::*;
pub use date::*;
pub use html::*;
pub use meta::*;
pub use scroll::*;
pub use seo::*;
pub use tags::*;
pub use url::*;

use chrono::NaiveDate;

use crate::config::{CommentsConfig, SiteConfig};
use crate::content::{Content, ReadingTime};

/// Produces document head tags for a post
pub trait SeoRenderer: Send + Sync {
    fn render(&self, config: &SiteConfig, canonical_url: &str, content: &Content) -> String;
}

/// Produces the scroll-to-top / jump-to-comment affordance
pub trait ScrollRenderer: Send + Sync {
    fn render(&self, config: &SiteConfig) -> String;
}

/// Renders an ordered tag list, or nothing for an empty one
pub trait TagsRenderer: Send + Sync {
    fn render(&self, config: &SiteConfig, tags: &[String]) -> String;
}

/// Renders the date / reading-time line
pub trait MetaRenderer: Send + Sync {
    fn render(
        &self,
        config: &SiteConfig,
        date: &NaiveDate,
        slug: &str,
        reading_time: &ReadingTime,
    ) -> String;
}

/// Renders a comment thread keyed by post slug
pub trait CommentsRenderer: Send + Sync {
    fn render(&self, comments: &CommentsConfig, slug: &str) -> String;
}

/// The collaborators used to render a post page
pub struct Components {
    pub seo: Box<dyn SeoRenderer>,
    pub scroll: Box<dyn ScrollRenderer>,
    pub tags: Box<dyn TagsRenderer>,
    pub meta: Box<dyn MetaRenderer>,
    pub comments: Box<dyn CommentsRenderer>,
}

impl Default for Components {
    fn default() -> Self {
        Self {
            seo: Box::new(BlogSeo),
            scroll: Box::new(ScrollTopAndComment),
            tags: Box::new(BlogTags),
            meta: Box::new(BlogMeta),
            comments: Box::new(Comments),
        }
    }
}
