mod browser;
mod discord;
pub(crate) mod keepalive;

pub use browser::{BrowserDriver, ChromiumDriver, PageSession};
pub use discord::{ChatChannel, DiscordClient};

#[cfg(test)]
pub(crate) use browser::fake::FakeBrowser;
#[cfg(test)]
pub(crate) use discord::fake::RecordingChannel;
