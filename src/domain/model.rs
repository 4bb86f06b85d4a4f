use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A normalized blog post as served to clients.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BlogPost {
    pub id: String,
    pub title: String,
    pub content: String,
    pub thumbnail: String,
    pub published_date: String,
    #[serde(rename = "publishedDateISO")]
    pub published_date_iso: String,
    pub slug: String,
}

impl BlogPost {
    pub fn published_on(&self) -> Option<NaiveDate> {
        NaiveDate::parse_from_str(&self.published_date_iso, "%Y-%m-%d").ok()
    }
}

/// Which path produced a response body.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FeedSource {
    Seed,
    SeedFallback,
    SeedError,
    Blogger,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeedResponse {
    pub blogs: Vec<BlogPost>,
    pub source: FeedSource,
}

impl FeedResponse {
    pub fn seed(source: FeedSource) -> Self {
        Self {
            blogs: crate::domain::seed::seed_blogs(),
            source,
        }
    }
}

/// Page of posts as returned by the Blogger v3 `posts.list` call.
#[derive(Debug, Clone, Deserialize)]
pub struct BloggerPostList {
    /// Absent or `null` when the blog has no posts.
    #[serde(default)]
    pub items: Option<Vec<BloggerPost>>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct BloggerPost {
    pub id: String,
    pub title: String,
    pub content: String,
    pub published: String,
}
