pub mod config;
pub mod core;
pub mod domain;
pub mod utils;
pub mod web;

#[cfg(feature = "cli")]
pub use crate::config::CliConfig;

pub use crate::config::FeedConfig;
pub use crate::core::{blogger::BloggerSource, feed::FeedService};
pub use crate::domain::model::{BlogPost, FeedResponse, FeedSource};
pub use crate::utils::error::{FeedError, Result};
