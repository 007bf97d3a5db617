//! Built-in templates using the Tera template engine
//!
//! Templates are embedded in the binary. Names ending in `.html` are
//! autoescaped; pre-rendered fragments are passed through with `| safe`.

use anyhow::Result;
use serde::Serialize;
use tera::{Context, Tera};

/// Template renderer with the embedded theme
pub struct TemplateRenderer {
    tera: Tera,
}

impl TemplateRenderer {
    /// Create a new renderer with all templates loaded
    pub fn new() -> Result<Self> {
        let mut tera = Tera::default();

        tera.add_raw_templates(vec![
            ("layout.html", include_str!("simple/layout.html")),
            ("post.html", include_str!("simple/post.html")),
        ])?;

        Ok(Self { tera })
    }

    /// Render a template with given context
    pub fn render(&self, template_name: &str, context: &Context) -> Result<String> {
        Ok(self.tera.render(template_name, context)?)
    }
}

/// Comments region state handed to the post template
#[derive(Debug, Clone, Serialize)]
pub struct CommentsData {
    pub enabled: bool,
    pub loaded: bool,
    /// Thread embed, only rendered once loaded
    pub html: String,
    /// Where the activation control submits to
    pub activate_url: String,
}

/// A navigation link handed to the post template
#[derive(Debug, Clone, Serialize)]
pub struct NavLink {
    pub href: String,
    pub title: String,
}
