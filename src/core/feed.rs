use crate::core::normalize::sort_newest_first;
use crate::core::PostSource;
use crate::domain::model::{FeedResponse, FeedSource};
use crate::utils::error::FeedError;

/// Answers feed requests from a live source, degrading to the seed dataset.
pub struct FeedService<P: PostSource> {
    source: P,
}

impl<P: PostSource> FeedService<P> {
    pub fn new(source: P) -> Self {
        Self { source }
    }

    /// Never fails: every error is reported through `FeedResponse::source`.
    pub async fn load(&self) -> FeedResponse {
        match self.source.fetch_posts().await {
            Ok(mut blogs) => {
                sort_newest_first(&mut blogs);
                tracing::debug!("Serving {} posts from Blogger", blogs.len());
                FeedResponse {
                    blogs,
                    source: FeedSource::Blogger,
                }
            }
            Err(e) => {
                match &e {
                    FeedError::ConfigurationMissing { missing } => {
                        tracing::info!(
                            missing = %missing,
                            "Blogger API credentials not configured. Using seed data."
                        );
                    }
                    FeedError::UpstreamUnsuccessful { status } => {
                        tracing::error!(status = %status, "Blogger API error, serving seed data");
                    }
                    other => {
                        tracing::error!(error = %other, "Error fetching blogs, serving seed data");
                    }
                }
                FeedResponse::seed(e.fallback_source())
            }
        }
    }
}
