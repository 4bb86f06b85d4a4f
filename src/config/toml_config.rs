use crate::core::ConfigProvider;
use crate::utils::error::{FeedError, Result};
use crate::utils::validation::Validate;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

pub const DEFAULT_API_BASE: &str = "https://www.googleapis.com/blogger/v3";
pub const DEFAULT_PLACEHOLDER_THUMBNAIL: &str = "/placeholder-blog.jpg";
pub const DEFAULT_ROUTE: &str = "/api/blogs";
pub const DEFAULT_BIND: &str = "0.0.0.0:3000";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FeedConfig {
    pub blogger: BloggerConfig,
    pub feed: FeedSettings,
    pub server: ServerConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct BloggerConfig {
    pub api_key: Option<String>,
    pub blog_id: Option<String>,
    pub api_base: String,
    pub max_results: u32,
    pub order_by: String,
    pub timeout_seconds: u64,
}

impl Default for BloggerConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            blog_id: None,
            api_base: DEFAULT_API_BASE.to_string(),
            max_results: 100,
            order_by: "published".to_string(),
            timeout_seconds: 10,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FeedSettings {
    pub placeholder_thumbnail: String,
    pub route: String,
}

impl Default for FeedSettings {
    fn default() -> Self {
        Self {
            placeholder_thumbnail: DEFAULT_PLACEHOLDER_THUMBNAIL.to_string(),
            route: DEFAULT_ROUTE.to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub bind: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind: DEFAULT_BIND.to_string(),
        }
    }
}

impl FeedConfig {
    /// Loads a TOML file, substituting `${VAR}` references from the environment.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content);
        let mut config: FeedConfig = toml::from_str(&processed_content)?;
        config.blogger.api_key = non_empty(config.blogger.api_key);
        config.blogger.blog_id = non_empty(config.blogger.blog_id);
        Ok(config)
    }

    /// Defaults overlaid with the process environment.
    pub fn from_env() -> Result<Self> {
        let mut config = Self::default();
        config.blogger.api_key = non_empty(std::env::var("BLOGGER_API_KEY").ok());
        config.blogger.blog_id = non_empty(std::env::var("BLOGGER_BLOG_ID").ok());

        if let Ok(api_base) = std::env::var("BLOGGER_API_BASE") {
            config.blogger.api_base = api_base;
        }
        if let Ok(timeout) = std::env::var("BLOGGER_TIMEOUT_SECONDS") {
            config.blogger.timeout_seconds =
                timeout
                    .parse()
                    .map_err(|_| FeedError::InvalidConfigValueError {
                        field: "BLOGGER_TIMEOUT_SECONDS".to_string(),
                        value: timeout.clone(),
                        reason: "Expected a whole number of seconds".to_string(),
                    })?;
        }
        if let Ok(bind) = std::env::var("BLOG_FEED_BIND") {
            config.server.bind = bind;
        }

        Ok(config)
    }

    // Unset variables become empty strings so they read as "not configured".
    fn substitute_env_vars(content: &str) -> String {
        use regex::Regex;
        use std::sync::LazyLock;

        static ENV_REF: LazyLock<Regex> =
            LazyLock::new(|| Regex::new(r"\$\{([^}]+)\}").unwrap());

        ENV_REF
            .replace_all(content, |caps: &regex::Captures| {
                std::env::var(&caps[1]).unwrap_or_default()
            })
            .into_owned()
    }

    pub fn has_credentials(&self) -> bool {
        self.blogger.api_key.is_some() && self.blogger.blog_id.is_some()
    }

    pub fn validate_config(&self) -> Result<()> {
        use crate::utils::validation::*;

        validate_url("blogger.api_base", &self.blogger.api_base)?;
        validate_range("blogger.max_results", self.blogger.max_results, 1, 500)?;
        validate_non_empty_string("blogger.order_by", &self.blogger.order_by)?;
        validate_range("blogger.timeout_seconds", self.blogger.timeout_seconds, 1, 120)?;
        validate_non_empty_string(
            "feed.placeholder_thumbnail",
            &self.feed.placeholder_thumbnail,
        )?;
        validate_route("feed.route", &self.feed.route)?;
        validate_bind_addr("server.bind", &self.server.bind)?;

        Ok(())
    }
}

// Empty means unset; whitespace is passed through like any other value.
fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

impl ConfigProvider for FeedConfig {
    fn api_key(&self) -> Option<&str> {
        self.blogger.api_key.as_deref()
    }

    fn blog_id(&self) -> Option<&str> {
        self.blogger.blog_id.as_deref()
    }

    fn api_base(&self) -> &str {
        &self.blogger.api_base
    }

    fn max_results(&self) -> u32 {
        self.blogger.max_results
    }

    fn order_by(&self) -> &str {
        &self.blogger.order_by
    }

    fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.blogger.timeout_seconds)
    }

    fn placeholder_thumbnail(&self) -> &str {
        &self.feed.placeholder_thumbnail
    }
}

impl Validate for FeedConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}
