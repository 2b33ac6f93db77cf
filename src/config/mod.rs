use crate::config::cli::Args;
use crate::error::{BotError, Result};
use chrono_tz::Tz;
use clap::Parser;
use reqwest::Client;
use std::time::Duration;

pub(crate) mod cli;

/// Everything the navigator needs to reach the rendered ranking.
#[derive(Debug, Clone)]
pub struct ScrapeSettings {
    pub target_url: String,
    pub tab_label: String,
    pub container_selector: String,
    pub navigation_timeout: Duration,
    pub selector_timeout: Duration,
    pub render_delay: Duration,
}

impl From<&Args> for ScrapeSettings {
    fn from(args: &Args) -> Self {
        Self {
            target_url: args.target_url.clone(),
            tab_label: args.tab_label.clone(),
            container_selector: args.container_selector.clone(),
            navigation_timeout: Duration::from_secs(args.navigation_timeout),
            selector_timeout: Duration::from_secs(args.selector_timeout),
            render_delay: Duration::from_millis(args.render_delay_ms),
        }
    }
}

pub struct Config {
    pub args: Args,
    pub scrape: ScrapeSettings,
    pub timezone: Tz,
    pub http_client: Client,
}

impl Config {
    pub fn new() -> Result<Self> {
        // A missing .env is the normal case in production
        dotenv::dotenv().ok();
        Self::from_args(Args::parse())
    }

    pub fn from_args(args: Args) -> Result<Self> {
        let timezone: Tz = args
            .timezone
            .parse()
            .map_err(|_| BotError::TimeZone(args.timezone.clone()))?;

        let http_client = Client::builder()
            .timeout(Duration::from_secs(30))
            .user_agent(concat!("DiscordBot (rankbot, ", env!("CARGO_PKG_VERSION"), ")"))
            .build()?;

        Ok(Self {
            scrape: ScrapeSettings::from(&args),
            timezone,
            http_client,
            args,
        })
    }
}

#[cfg(test)]
pub(crate) fn test_settings() -> ScrapeSettings {
    ScrapeSettings {
        target_url: "https://game.example/ranking".to_string(),
        tab_label: "MD/ML".to_string(),
        container_selector: "#a1a1a1 .gridcontainer_live".to_string(),
        navigation_timeout: Duration::from_secs(30),
        selector_timeout: Duration::from_secs(15),
        render_delay: Duration::ZERO,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::config::cli::test_args;

    #[test]
    fn defaults_match_the_leaderboard_page() {
        let config = Config::from_args(test_args()).unwrap();

        assert_eq!(config.timezone, chrono_tz::Europe::Paris);
        assert_eq!(config.scrape.tab_label, "md/ml");
        assert_eq!(config.scrape.container_selector, "#a1a1a1 .gridcontainer_live");
        assert_eq!(config.scrape.navigation_timeout, Duration::from_secs(30));
        assert_eq!(config.scrape.selector_timeout, Duration::from_secs(15));
        assert_eq!(config.scrape.render_delay, Duration::from_millis(1000));
    }

    #[test]
    fn rejects_unknown_timezone() {
        let mut args = test_args();
        args.timezone = "Mars/Olympus".to_string();
        let result = Config::from_args(args);
        assert!(matches!(result, Err(BotError::TimeZone(_))));
    }
}
