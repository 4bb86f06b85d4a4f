pub mod toml_config;

pub use toml_config::FeedConfig;

#[cfg(feature = "cli")]
use clap::{Parser, Subcommand};

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Parser)]
#[command(name = "blog-feed")]
#[command(about = "Serves blog posts from the Blogger API as JSON, with a built-in fallback")]
pub struct CliConfig {
    /// Path to a TOML configuration file; the environment is used when omitted
    #[arg(short, long)]
    pub config: Option<String>,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit logs as JSON lines")]
    pub json_logs: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Run the HTTP endpoint
    Serve {
        /// Override the listen address from configuration
        #[arg(long)]
        bind: Option<String>,
    },
    /// Build the feed once and print the response body
    Fetch {
        #[arg(long)]
        pretty: bool,
    },
}

#[cfg(feature = "cli")]
impl CliConfig {
    pub fn load_feed_config(&self) -> crate::utils::error::Result<FeedConfig> {
        let mut config = match &self.config {
            Some(path) => FeedConfig::from_file(path)?,
            None => FeedConfig::from_env()?,
        };

        if let Command::Serve {
            bind: Some(bind), ..
        } = &self.command
        {
            config.server.bind = bind.clone();
        }

        Ok(config)
    }
}
