use crate::config::cli::Args;
use crate::error::{BotError, Result};
use chromiumoxide::browser::{Browser, BrowserConfig};
use chromiumoxide::page::Page;
use futures_util::StreamExt;
use std::path::PathBuf;
use std::time::Duration;
use tokio::task::JoinHandle;
use tokio::time::{sleep, timeout};
use tracing::{debug, info};

const SELECTOR_POLL_INTERVAL: Duration = Duration::from_millis(100);

/// Starts one browser per pipeline run.
pub trait BrowserDriver {
    type Session: PageSession;

    async fn launch(&self) -> Result<Self::Session>;
}

/// A single open page. `close` consumes the session and shuts the browser
/// process down with it.
pub trait PageSession {
    async fn goto(&mut self, url: &str, limit: Duration) -> Result<()>;
    async fn evaluate(&mut self, script: &str) -> Result<serde_json::Value>;
    async fn wait_for_selector(&mut self, selector: &str, limit: Duration) -> Result<()>;
    async fn content(&mut self) -> Result<String>;
    async fn close(self) -> Result<()>;
}

pub struct ChromiumDriver {
    headless: bool,
    executable: Option<PathBuf>,
}

impl ChromiumDriver {
    pub fn from_args(args: &Args) -> Self {
        Self {
            headless: !args.headful,
            executable: args.chrome_executable.clone(),
        }
    }

    fn browser_config(&self) -> Result<BrowserConfig> {
        let mut builder = BrowserConfig::builder()
            .window_size(1280, 1024)
            .arg("--no-first-run")
            .arg("--disable-dev-shm-usage")
            .arg("--disable-gpu");

        if !self.headless {
            builder = builder.with_head();
        }
        if let Some(path) = &self.executable {
            builder = builder.chrome_executable(path);
        }

        builder.build().map_err(BotError::Browser)
    }
}

impl BrowserDriver for ChromiumDriver {
    type Session = ChromiumSession;

    async fn launch(&self) -> Result<ChromiumSession> {
        let (mut browser, mut handler) = Browser::launch(self.browser_config()?).await?;

        let handler = tokio::spawn(async move {
            while let Some(event) = handler.next().await {
                if let Err(e) = event {
                    debug!("Browser handler error: {}", e);
                }
            }
        });

        let page = match browser.new_page("about:blank").await {
            Ok(page) => page,
            Err(e) => {
                let _ = browser.close().await;
                let _ = browser.wait().await;
                handler.abort();
                return Err(e.into());
            }
        };

        info!("Browser launched");
        Ok(ChromiumSession {
            browser,
            page,
            handler,
        })
    }
}

pub struct ChromiumSession {
    browser: Browser,
    page: Page,
    handler: JoinHandle<()>,
}

impl PageSession for ChromiumSession {
    async fn goto(&mut self, url: &str, limit: Duration) -> Result<()> {
        // goto resolves once the load event has fired
        timeout(limit, self.page.goto(url))
            .await
            .map_err(|_| BotError::Timeout {
                what: format!("navigation to {url}"),
                timeout: limit,
            })??;
        Ok(())
    }

    async fn evaluate(&mut self, script: &str) -> Result<serde_json::Value> {
        let result = self.page.evaluate(script).await?;
        Ok(result.into_value()?)
    }

    async fn wait_for_selector(&mut self, selector: &str, limit: Duration) -> Result<()> {
        let page = &self.page;
        let poll = async {
            while page.find_element(selector).await.is_err() {
                sleep(SELECTOR_POLL_INTERVAL).await;
            }
        };

        timeout(limit, poll).await.map_err(|_| BotError::Timeout {
            what: format!("selector {selector}"),
            timeout: limit,
        })
    }

    async fn content(&mut self) -> Result<String> {
        Ok(self.page.content().await?)
    }

    async fn close(self) -> Result<()> {
        let ChromiumSession {
            mut browser,
            page,
            handler,
        } = self;
        drop(page);

        let closed = browser.close().await;
        // Reap the child process whether or not the close command went through
        let _ = browser.wait().await;
        handler.abort();

        closed?;
        info!("Browser closed");
        Ok(())
    }
}
