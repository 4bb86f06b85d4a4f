use crate::domain::model::BlogPost;
use crate::utils::error::Result;
use async_trait::async_trait;
use std::time::Duration;

pub trait ConfigProvider: Send + Sync {
    fn api_key(&self) -> Option<&str>;
    fn blog_id(&self) -> Option<&str>;
    fn api_base(&self) -> &str;
    fn max_results(&self) -> u32;
    fn order_by(&self) -> &str;
    fn request_timeout(&self) -> Duration;
    fn placeholder_thumbnail(&self) -> &str;
}

/// Supplier of live posts, already normalized.
#[async_trait]
pub trait PostSource: Send + Sync {
    async fn fetch_posts(&self) -> Result<Vec<BlogPost>>;
}
