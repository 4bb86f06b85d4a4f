use crate::domain::model::FeedSource;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum FeedError {
    #[error("Blogger API credentials not configured: missing {missing}")]
    ConfigurationMissing { missing: String },

    #[error("Blogger API responded with status {status}")]
    UpstreamUnsuccessful { status: reqwest::StatusCode },

    #[error("API request failed: {0}")]
    ApiError(#[from] reqwest::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Invalid post {id}: {message}")]
    InvalidPost { id: String, message: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value for {field}: '{value}' ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

impl FeedError {
    /// Provenance tag reported when this error forces the seed dataset.
    pub fn fallback_source(&self) -> FeedSource {
        match self {
            FeedError::ConfigurationMissing { .. } => FeedSource::Seed,
            FeedError::UpstreamUnsuccessful { .. } => FeedSource::SeedFallback,
            _ => FeedSource::SeedError,
        }
    }
}

pub type Result<T> = std::result::Result<T, FeedError>;
