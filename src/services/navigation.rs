use crate::config::ScrapeSettings;
use crate::error::Result;
use crate::infrastructure::PageSession;
use tokio::time::sleep;
use tracing::{info, warn};

/// Clicks the first link, button or span whose text contains the label.
fn tab_click_script(label: &str) -> Result<String> {
    let label = serde_json::to_string(&label.trim().to_lowercase())?;
    Ok(format!(
        r#"() => {{
            const label = {label};
            for (const el of document.querySelectorAll('a, button, span')) {{
                const text = (el.textContent || '').trim().toLowerCase();
                if (text.includes(label)) {{
                    el.click();
                    return true;
                }}
            }}
            return false;
        }}"#
    ))
}

/// Loads the leaderboard and brings the ranking tab up. A missing tab is
/// tolerated; the container wait that follows decides whether the run fails.
pub async fn open_ranking_tab<S: PageSession>(
    session: &mut S,
    settings: &ScrapeSettings,
) -> Result<()> {
    info!("Loading {}", settings.target_url);
    session
        .goto(&settings.target_url, settings.navigation_timeout)
        .await?;

    let clicked = session
        .evaluate(&tab_click_script(&settings.tab_label)?)
        .await?;
    if clicked.as_bool() == Some(true) {
        info!("Activated tab {:?}", settings.tab_label);
    } else {
        warn!(
            "No element labelled {:?}, continuing on the current tab",
            settings.tab_label
        );
    }

    session
        .wait_for_selector(&settings.container_selector, settings.selector_timeout)
        .await?;
    sleep(settings.render_delay).await;

    Ok(())
}
