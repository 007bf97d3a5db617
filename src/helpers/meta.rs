//! Publication metadata line

use chrono::NaiveDate;

use super::{date_iso, format_date, html_escape, MetaRenderer};
use crate::config::SiteConfig;
use crate::content::ReadingTime;

/// Default metadata line: formatted date and reading time
pub struct BlogMeta;

impl MetaRenderer for BlogMeta {
    fn render(
        &self,
        config: &SiteConfig,
        date: &NaiveDate,
        slug: &str,
        reading_time: &ReadingTime,
    ) -> String {
        format!(
            r#"<dd class="meta" data-slug="{}"><time datetime="{}">{}</time><span class="separator"> · </span><span class="reading-time">{}</span></dd>"#,
            html_escape(slug),
            date_iso(date),
            html_escape(&format_date(date, &config.date_format)),
            html_escape(&reading_time.text)
        )
    }
}
