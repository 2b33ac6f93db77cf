//! Military ranking ("MD/ML" tab) extraction.
//!
//! The ranking markup has no structural link between a score marker and the
//! player it belongs to: the name and the alliance tag are simply the next
//! matching elements in document order. Rows are rebuilt by a forward
//! nearest-neighbour scan over the flat list of markers, which means any
//! reordering of the page markup silently shifts names onto the wrong
//! scores. A marker with no name of its own before the next row borrows
//! that row's name.

use super::{select_within, trimmed_text, LeaderboardScraper, Selectors};
use crate::domain::{RawRow, UNKNOWN_PSEUDO};
use scraper::{ElementRef, Html};
use tracing::debug;

pub struct MilitaryRankingScraper;

impl LeaderboardScraper for MilitaryRankingScraper {
    fn extract_rows(&self, document: &Html, selectors: &Selectors) -> Vec<RawRow> {
        let Some(container) = document.select(&selectors.container).next() else {
            debug!("Ranking container not found in document");
            return Vec::new();
        };

        let elements: Vec<ElementRef> = select_within(container, &selectors.marker).collect();
        let mut rows = Vec::new();

        for (i, element) in elements.iter().enumerate() {
            if !selectors.is_score_marker(element) {
                continue;
            }

            let following = &elements[i + 1..];
            let row = RawRow::new(
                resolve_pseudo(following, selectors),
                resolve_alliance(following, selectors),
                trimmed_text(element),
            );
            debug!("Extracted row {:?}", row);
            rows.push(row);
        }

        rows
    }
}

/// First following element carrying a name wins. The tooltip holds the full
/// name, the inline one may be shortened.
fn resolve_pseudo(following: &[ElementRef], selectors: &Selectors) -> String {
    for candidate in following {
        let name = select_within(*candidate, &selectors.tooltip_name)
            .next()
            .or_else(|| select_within(*candidate, &selectors.name).next());

        if let Some(name) = name {
            let text = trimmed_text(&name);
            return if text.is_empty() {
                UNKNOWN_PSEUDO.to_string()
            } else {
                text
            };
        }
    }

    UNKNOWN_PSEUDO.to_string()
}

/// The first following element holding any alliance tag ends the scan, even
/// when all of its tags are blank. Within it the last non-blank tag wins.
fn resolve_alliance(following: &[ElementRef], selectors: &Selectors) -> String {
    for candidate in following {
        let tags: Vec<ElementRef> = select_within(*candidate, &selectors.alliance).collect();
        if tags.is_empty() {
            continue;
        }

        return tags
            .iter()
            .rev()
            .map(trimmed_text)
            .find(|text| !text.is_empty())
            .unwrap_or_default();
    }

    String::new()
}
