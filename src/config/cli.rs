use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug, Clone)]
#[command(author, version, about)]
pub struct Args {
    /// Discord bot token
    #[arg(long, env = "DISCORD_TOKEN", hide_env_values = true)]
    pub discord_token: String,

    /// Id of the channel the ranking is posted to
    #[arg(long, env = "CHANNEL_ID")]
    pub channel_id: String,

    /// Leaderboard page to scrape
    #[arg(long, env = "TARGET_URL")]
    pub target_url: String,

    /// Port for the keep-alive HTTP server
    #[arg(long, env = "PORT", default_value_t = 3000)]
    pub port: u16,

    /// Visible text of the tab holding the ranking (case-insensitive)
    #[arg(long, env = "TAB_LABEL", default_value = "md/ml")]
    pub tab_label: String,

    /// Element holding the ranking once the tab is active
    #[arg(long, env = "CONTAINER_SELECTOR", default_value = "#a1a1a1 .gridcontainer_live")]
    pub container_selector: String,

    /// Elements scanned inside the container, in document order
    #[arg(long, env = "MARKER_SELECTOR", default_value = "span")]
    pub marker_selector: String,

    /// Class token flagging a gaining row
    #[arg(long, env = "TOP_CLASS", default_value = "top_color")]
    pub top_class: String,

    /// Class token flagging a losing row
    #[arg(long, env = "FLOP_CLASS", default_value = "flop_color")]
    pub flop_class: String,

    /// Full player name nested in the hover tooltip
    #[arg(long, env = "TOOLTIP_NAME_SELECTOR", default_value = ".tooltiptext .Style9")]
    pub tooltip_name_selector: String,

    /// Short player name shown inline
    #[arg(long, env = "NAME_SELECTOR", default_value = ".Style9")]
    pub name_selector: String,

    /// Alliance tag elements
    #[arg(long, env = "ALLIANCE_SELECTOR", default_value = ".Style8topflop")]
    pub alliance_selector: String,

    /// IANA zone used for the timestamp in the posted message
    #[arg(long, env = "DISPLAY_TIMEZONE", default_value = "Europe/Paris")]
    pub timezone: String,

    /// Page load timeout in seconds
    #[arg(long, env = "NAVIGATION_TIMEOUT", default_value_t = 30)]
    pub navigation_timeout: u64,

    /// Container wait timeout in seconds
    #[arg(long, env = "SELECTOR_TIMEOUT", default_value_t = 15)]
    pub selector_timeout: u64,

    /// Pause after the container appears, in milliseconds
    #[arg(long, env = "RENDER_DELAY_MS", default_value_t = 1000)]
    pub render_delay_ms: u64,

    /// Show the browser window instead of running headless
    #[arg(long, env = "HEADFUL")]
    pub headful: bool,

    /// Chrome/Chromium binary, detected automatically when unset
    #[arg(long, env = "CHROME_EXECUTABLE")]
    pub chrome_executable: Option<PathBuf>,

    /// Log level (error, warn, info, debug, trace)
    #[arg(long, env = "LOG_LEVEL", default_value = "info")]
    pub log_level: String,
}

#[cfg(test)]
pub(crate) fn test_args() -> Args {
    Args::parse_from([
        "rankbot",
        "--discord-token",
        "token",
        "--channel-id",
        "123",
        "--target-url",
        "https://game.example/ranking",
    ])
}
