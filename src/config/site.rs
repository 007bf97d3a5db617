//! Site configuration (_config.yml)

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Main site configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    // Site
    pub title: String,
    pub author: String,
    pub description: String,
    pub language: String,
    pub locale: String,
    pub site_url: String,
    pub site_logo: Option<String>,
    pub social_banner: Option<String>,

    // Writing
    pub date_format: String,
    pub words_per_minute: u32,

    // Directory
    pub content_dir: String,
    pub blog_dir: String,
    pub tag_dir: String,
    pub public_dir: String,
    pub static_dir: String,

    // Comments
    pub comments: Option<CommentsConfig>,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            title: "My Blog".to_string(),
            author: "John Doe".to_string(),
            description: String::new(),
            language: "en-us".to_string(),
            locale: "en-US".to_string(),
            site_url: "http://example.com".to_string(),
            site_logo: None,
            social_banner: None,

            date_format: "MMMM D, YYYY".to_string(),
            words_per_minute: 200,

            content_dir: "data".to_string(),
            blog_dir: "blog".to_string(),
            tag_dir: "tags".to_string(),
            public_dir: "public".to_string(),
            static_dir: "static".to_string(),

            comments: None,
        }
    }
}

impl SiteConfig {
    /// Load configuration from a file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path.as_ref())?;
        let config: SiteConfig = serde_yaml::from_str(&content)?;
        Ok(config)
    }

    /// Site URL without a trailing slash
    pub fn base_url(&self) -> &str {
        self.site_url.trim_end_matches('/')
    }

    /// Comments configuration when comments are switched on site-wide
    pub fn enabled_comments(&self) -> Option<&CommentsConfig> {
        self.comments.as_ref().filter(|c| c.enabled)
    }

    /// Whether post pages get a comments region
    pub fn comments_enabled(&self) -> bool {
        self.enabled_comments().is_some()
    }
}

/// Comments provider selection plus per-provider settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CommentsConfig {
    pub enabled: bool,
    pub provider: CommentsProvider,
    pub giscus: GiscusConfig,
    pub utterances: UtterancesConfig,
    pub disqus: DisqusConfig,
}

impl Default for CommentsConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            provider: CommentsProvider::Giscus,
            giscus: GiscusConfig::default(),
            utterances: UtterancesConfig::default(),
            disqus: DisqusConfig::default(),
        }
    }
}

/// Supported comment providers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CommentsProvider {
    Giscus,
    Utterances,
    Disqus,
}

/// Giscus configuration, see https://giscus.app
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GiscusConfig {
    pub repo: String,
    pub repository_id: String,
    pub category: String,
    pub category_id: String,
    pub reactions: bool,
    pub metadata: bool,
    pub theme: String,
    pub input_position: String,
    pub lang: String,
}

impl Default for GiscusConfig {
    fn default() -> Self {
        Self {
            repo: String::new(),
            repository_id: String::new(),
            category: String::new(),
            category_id: String::new(),
            reactions: true,
            metadata: false,
            theme: "light".to_string(),
            input_position: "bottom".to_string(),
            lang: "en".to_string(),
        }
    }
}

/// Utterances configuration, see https://utteranc.es
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct UtterancesConfig {
    pub repo: String,
    pub label: String,
    pub theme: String,
}

impl Default for UtterancesConfig {
    fn default() -> Self {
        Self {
            repo: String::new(),
            label: String::new(),
            theme: "github-light".to_string(),
        }
    }
}

/// Disqus configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DisqusConfig {
    pub shortname: String,
}
