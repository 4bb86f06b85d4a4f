use anyhow::Context;
use blog_feed::config::Command;
use blog_feed::utils::{logger, validation::Validate};
use blog_feed::{web, BloggerSource, CliConfig, FeedService};
use clap::Parser;

#[tokio::main]
async fn main() {
    // .env is optional and only fills variables not already set
    let _ = dotenvy::dotenv();

    let config = CliConfig::parse();

    let format = if config.json_logs {
        logger::LogFormat::Json
    } else {
        logger::LogFormat::Compact
    };
    logger::init_logger(format, config.verbose);

    if let Err(e) = run(config).await {
        tracing::error!("Fatal error: {e:#}");
        eprintln!("❌ {e:#}");
        std::process::exit(1);
    }
}

async fn run(cli: CliConfig) -> anyhow::Result<()> {
    let feed_config = cli
        .load_feed_config()
        .context("Failed to load configuration")?;
    feed_config.validate().context("Invalid configuration")?;

    match cli.command {
        Command::Serve { .. } => {
            tracing::info!("Starting blog-feed server");
            web::serve(feed_config).await
        }
        Command::Fetch { pretty } => {
            let source =
                BloggerSource::new(feed_config).context("Failed to build Blogger HTTP client")?;
            let response = FeedService::new(source).load().await;
            tracing::info!(
                source = ?response.source,
                "Fetched {} posts",
                response.blogs.len()
            );

            let body = if pretty {
                serde_json::to_string_pretty(&response)?
            } else {
                serde_json::to_string(&response)?
            };
            println!("{}", body);
            Ok(())
        }
    }
}
