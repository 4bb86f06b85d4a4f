use crate::core::normalize::normalize_post;
use crate::core::{BlogPost, ConfigProvider, PostSource};
use crate::domain::model::BloggerPostList;
use crate::utils::error::{FeedError, Result};
use reqwest::Client;
use url::Url;

/// Live posts from the Blogger v3 API.
pub struct BloggerSource<C: ConfigProvider> {
    config: C,
    client: Client,
}

impl<C: ConfigProvider> BloggerSource<C> {
    pub fn new(config: C) -> Result<Self> {
        let client = Client::builder()
            .timeout(config.request_timeout())
            .build()?;
        Ok(Self { config, client })
    }

    fn credentials(&self) -> Result<(&str, &str)> {
        let api_key = self.config.api_key().filter(|k| !k.is_empty());
        let blog_id = self.config.blog_id().filter(|id| !id.is_empty());

        match (api_key, blog_id) {
            (Some(key), Some(id)) => Ok((key, id)),
            (key, id) => {
                let mut missing = Vec::new();
                if key.is_none() {
                    missing.push("BLOGGER_API_KEY");
                }
                if id.is_none() {
                    missing.push("BLOGGER_BLOG_ID");
                }
                Err(FeedError::ConfigurationMissing {
                    missing: missing.join(", "),
                })
            }
        }
    }

    /// `{api_base}/blogs/{blog_id}/posts?key=..&maxResults=..&orderBy=..`
    pub fn posts_url(&self, api_key: &str, blog_id: &str) -> Result<Url> {
        let mut url = Url::parse(self.config.api_base()).map_err(|e| FeedError::ConfigError {
            message: format!("Invalid Blogger API base '{}': {}", self.config.api_base(), e),
        })?;

        url.path_segments_mut()
            .map_err(|_| FeedError::ConfigError {
                message: format!(
                    "Blogger API base '{}' cannot carry a path",
                    self.config.api_base()
                ),
            })?
            .pop_if_empty()
            .extend(["blogs", blog_id, "posts"]);

        url.query_pairs_mut()
            .append_pair("key", api_key)
            .append_pair("maxResults", &self.config.max_results().to_string())
            .append_pair("orderBy", self.config.order_by());

        Ok(url)
    }
}

#[async_trait::async_trait]
impl<C: ConfigProvider> PostSource for BloggerSource<C> {
    async fn fetch_posts(&self) -> Result<Vec<BlogPost>> {
        let (api_key, blog_id) = self.credentials()?;
        let url = self.posts_url(api_key, blog_id)?;

        tracing::debug!(blog_id = %blog_id, "Requesting posts from Blogger API");
        let response = self.client.get(url).send().await?;

        let status = response.status();
        tracing::debug!("Blogger API response status: {}", status);
        if !status.is_success() {
            return Err(FeedError::UpstreamUnsuccessful { status });
        }

        let body = response.text().await?;
        let page: BloggerPostList = serde_json::from_str(&body)?;

        let placeholder = self.config.placeholder_thumbnail();
        page.items
            .unwrap_or_default()
            .into_iter()
            .map(|post| normalize_post(post, placeholder))
            .collect()
    }
}
