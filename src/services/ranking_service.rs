use crate::domain::ClassifiedRanking;
use crate::error::BotError;
use crate::infrastructure::{BrowserDriver, ChatChannel};
use crate::services::message::{format_ranking, FAILURE_NOTICE, NO_DATA_NOTICE};
use crate::services::scraping::ScrapingService;
use chrono::{DateTime, Utc};
use chrono_tz::Tz;
use tracing::{error, info, warn};

/// What one pipeline run produced.
#[derive(Debug)]
pub enum RunOutcome {
    Ranking(ClassifiedRanking),
    Empty,
    Failed(BotError),
}

impl RunOutcome {
    pub fn message(&self, now: &DateTime<Tz>) -> String {
        match self {
            RunOutcome::Ranking(ranking) => format_ranking(ranking, now),
            RunOutcome::Empty => NO_DATA_NOTICE.to_string(),
            RunOutcome::Failed(_) => FAILURE_NOTICE.to_string(),
        }
    }
}

pub struct RankingService<D: BrowserDriver, C: ChatChannel> {
    scraping: ScrapingService<D>,
    channel: C,
    timezone: Tz,
}

impl<D: BrowserDriver, C: ChatChannel> RankingService<D, C> {
    pub fn new(scraping: ScrapingService<D>, channel: C, timezone: Tz) -> Self {
        Self {
            scraping,
            channel,
            timezone,
        }
    }

    pub async fn collect(&self) -> RunOutcome {
        match self.scraping.fetch_rows().await {
            Ok(rows) if rows.is_empty() => RunOutcome::Empty,
            Ok(rows) => RunOutcome::Ranking(ClassifiedRanking::classify(&rows)),
            Err(e) => RunOutcome::Failed(e),
        }
    }

    /// One scheduled run. Never fails: every outcome ends up as a post, and a
    /// post the channel rejects is followed by the error notice.
    pub async fn run_once(&self) {
        info!("Starting ranking run");
        let outcome = self.collect().await;

        match &outcome {
            RunOutcome::Ranking(ranking) if ranking.is_empty() => {
                warn!("Ranking rows found but none carries a signed delta")
            }
            RunOutcome::Ranking(ranking) => info!(
                "Ranking ready: {} top, {} flop",
                ranking.top.len(),
                ranking.flop.len()
            ),
            RunOutcome::Empty => warn!("No ranking rows found on the page"),
            RunOutcome::Failed(e) => error!("Ranking run failed: {}", e),
        }

        let now = Utc::now().with_timezone(&self.timezone);
        let Err(e) = self.channel.send(&outcome.message(&now)).await else {
            return;
        };
        error!("Failed to post to channel: {}", e);

        // The notice itself failing is only logged
        if !matches!(outcome, RunOutcome::Failed(_)) {
            if let Err(e) = self.channel.send(FAILURE_NOTICE).await {
                error!("Failed to post failure notice: {}", e);
            }
        }
    }
}
