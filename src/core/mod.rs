pub mod blogger;
pub mod feed;
pub mod normalize;

pub use crate::domain::model::{BlogPost, FeedResponse, FeedSource};
pub use crate::domain::ports::{ConfigProvider, PostSource};
pub use crate::utils::error::Result;
