//! Floating scroll-to-top / jump-to-comment buttons

use super::ScrollRenderer;
use crate::config::SiteConfig;

/// Default scroll affordance. The comment button only appears when comments are on.
pub struct ScrollTopAndComment;

impl ScrollRenderer for ScrollTopAndComment {
    fn render(&self, config: &SiteConfig) -> String {
        let mut html = String::from(r#"<div class="scroll-buttons">"#);

        if config.comments_enabled() {
            html.push_str(
                r##"<a class="scroll-comment" href="#comment" aria-label="Scroll To Comment">&#8595;</a>"##,
            );
        }
        html.push_str(
            r##"<a class="scroll-top" href="#top" aria-label="Scroll To Top">&#8593;</a>"##,
        );
        html.push_str("</div>");

        html
    }
}
