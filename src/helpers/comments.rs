//! Comment thread embeds
//!
//! Each provider loads its own script and manages the thread remotely; this
//! module only emits the embed markup keyed by the post slug.

use super::{html_escape, CommentsRenderer};
use crate::config::{CommentsConfig, CommentsProvider, DisqusConfig, GiscusConfig, UtterancesConfig};

/// Default comments renderer, dispatching on the configured provider
pub struct Comments;

impl CommentsRenderer for Comments {
    fn render(&self, comments: &CommentsConfig, slug: &str) -> String {
        match comments.provider {
            CommentsProvider::Giscus => giscus(&comments.giscus, slug),
            CommentsProvider::Utterances => utterances(&comments.utterances, slug),
            CommentsProvider::Disqus => disqus(&comments.disqus, slug),
        }
    }
}

/// Giscus embed, one discussion per slug
pub fn giscus(config: &GiscusConfig, slug: &str) -> String {
    if config.repo.is_empty() {
        tracing::warn!("giscus comments enabled without a repo");
    }

    let flag = |on: bool| if on { "1" } else { "0" };
    format!(
        r#"<div class="giscus"></div>
<script src="https://giscus.app/client.js" data-repo="{}" data-repo-id="{}" data-category="{}" data-category-id="{}" data-mapping="specific" data-term="{}" data-reactions-enabled="{}" data-emit-metadata="{}" data-input-position="{}" data-theme="{}" data-lang="{}" crossorigin="anonymous" async></script>"#,
        html_escape(&config.repo),
        html_escape(&config.repository_id),
        html_escape(&config.category),
        html_escape(&config.category_id),
        html_escape(slug),
        flag(config.reactions),
        flag(config.metadata),
        html_escape(&config.input_position),
        html_escape(&config.theme),
        html_escape(&config.lang),
    )
}

/// Utterances embed, one issue per slug
pub fn utterances(config: &UtterancesConfig, slug: &str) -> String {
    if config.repo.is_empty() {
        tracing::warn!("utterances comments enabled without a repo");
    }

    let label = if config.label.is_empty() {
        String::new()
    } else {
        format!(r#" label="{}""#, html_escape(&config.label))
    };

    format!(
        r#"<div class="utterances-frame"><script src="https://utteranc.es/client.js" repo="{}" issue-term="{}"{} theme="{}" crossorigin="anonymous" async></script></div>"#,
        html_escape(&config.repo),
        html_escape(slug),
        label,
        html_escape(&config.theme),
    )
}

/// Disqus embed, thread identified by slug
pub fn disqus(config: &DisqusConfig, slug: &str) -> String {
    if config.shortname.is_empty() {
        tracing::warn!("disqus comments enabled without a shortname");
    }

    // Both values end up inside JS string literals
    let identifier = serde_json::to_string(slug).unwrap_or_default();
    let shortname = html_escape(&config.shortname);

    format!(
        r#"<div id="disqus_thread"></div>
<script>
var disqus_config = function () {{ this.page.identifier = {}; }};
(function () {{
  var s = document.createElement('script');
  s.src = 'https://{}.disqus.com/embed.js';
  s.setAttribute('data-timestamp', +new Date());
  (document.head || document.body).appendChild(s);
}})();
</script>"#,
        identifier.replace('<', "\\u003c"),
        shortname,
    )
}
