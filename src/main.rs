use crate::config::Config;
use crate::error::Result;
use crate::infrastructure::{keepalive, ChromiumDriver, DiscordClient};
use crate::scrapers::Selectors;
use crate::services::ranking_service::RankingService;
use crate::services::scheduler::{Scheduler, SystemClock};
use crate::services::scraping::ScrapingService;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

mod config;
mod domain;
mod error;
mod infrastructure;
mod scrapers;
mod services;

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::new()?;

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.args.log_level));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    info!("Ranking bot for {}", config.args.target_url);

    let port = config.args.port;
    tokio::spawn(async move {
        if let Err(e) = keepalive::serve(port).await {
            error!("Keep-alive server stopped: {}", e);
        }
    });

    let discord = DiscordClient::new(
        config.http_client.clone(),
        config.args.discord_token.clone(),
    );
    discord.login().await?;
    let channel = discord.fetch_channel(&config.args.channel_id).await?;

    let scraping = ScrapingService::new(
        ChromiumDriver::from_args(&config.args),
        config.scrape.clone(),
        Selectors::from_args(&config.args)?,
    );
    let service = RankingService::new(scraping, channel, config.timezone);

    let service = &service;
    Scheduler::new(SystemClock)
        .run(move || service.run_once())
        .await;

    Ok(())
}
