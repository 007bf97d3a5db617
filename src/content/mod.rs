//! Content module - turns markdown posts into typed content records

mod frontmatter;
pub mod loader;
mod markdown;
mod post;
mod reading_time;

pub use frontmatter::{parse_date_string, FrontMatter};
pub use loader::ContentLoader;
pub use markdown::MarkdownRenderer;
pub use post::{neighbours, Content, NavPointer, Neighbours};
pub use reading_time::{count_words, ReadingTime};
