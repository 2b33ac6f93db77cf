use crate::config::ScrapeSettings;
use crate::domain::RawRow;
use crate::error::Result;
use crate::infrastructure::{BrowserDriver, PageSession};
use crate::scrapers::military::MilitaryRankingScraper;
use crate::scrapers::{LeaderboardScraper, Selectors};
use crate::services::navigation::open_ranking_tab;
use scraper::Html;
use tracing::{info, warn};

pub struct ScrapingService<D: BrowserDriver> {
    driver: D,
    settings: ScrapeSettings,
    selectors: Selectors,
    scraper: Box<dyn LeaderboardScraper>,
}

impl<D: BrowserDriver> ScrapingService<D> {
    pub fn new(driver: D, settings: ScrapeSettings, selectors: Selectors) -> Self {
        info!("Created new Scraping service for {}", settings.target_url);
        Self {
            driver,
            settings,
            selectors,
            scraper: Box::new(MilitaryRankingScraper),
        }
    }

    /// Runs one browser session end to end. The browser is closed exactly
    /// once whatever happens after it was launched.
    pub async fn fetch_rows(&self) -> Result<Vec<RawRow>> {
        let mut session = self.driver.launch().await?;
        let rendered = self.render(&mut session).await;

        if let Err(e) = session.close().await {
            warn!("Failed to close browser: {}", e);
        }

        let document = Html::parse_document(&rendered?);
        let rows = self.scraper.extract_rows(&document, &self.selectors);
        info!("Extracted {} ranking rows", rows.len());

        Ok(rows)
    }

    async fn render(&self, session: &mut D::Session) -> Result<String> {
        open_ranking_tab(session, &self.settings).await?;
        session.content().await
    }
}
