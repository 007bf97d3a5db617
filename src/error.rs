//! Content validation errors

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while turning source files into content records
#[derive(Debug, Error)]
pub enum Error {
    #[error("{path:?}: front matter has no title")]
    MissingTitle { path: PathBuf },

    #[error("{path:?}: front matter has no date")]
    MissingDate { path: PathBuf },

    #[error("invalid date {value:?}: expected YYYY-MM-DD or an RFC 3339 timestamp")]
    InvalidDate { value: String },

    #[error("invalid front matter: {0}")]
    FrontMatter(#[from] serde_yaml::Error),

    #[error("navigation pointer needs a non-empty {field}")]
    EmptyNavPointer { field: &'static str },

    #[error("slug {slug:?} is used by both {first:?} and {second:?}")]
    DuplicateSlug {
        slug: String,
        first: PathBuf,
        second: PathBuf,
    },

    #[error("post {taken_by:?} occupies {path:?}, the comments page of {post:?}")]
    CommentsRouteTaken {
        path: String,
        post: String,
        taken_by: PathBuf,
    },
}
