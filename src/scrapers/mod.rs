use crate::config::cli::Args;
use crate::domain::RawRow;
use crate::error::{BotError, Result};
use scraper::{ElementRef, Html, Selector};

pub(crate) mod military;

pub trait LeaderboardScraper {
    fn extract_rows(&self, document: &Html, selectors: &Selectors) -> Vec<RawRow>;
}

pub struct Selectors {
    pub container: Selector,
    pub marker: Selector,
    pub tooltip_name: Selector,
    pub name: Selector,
    pub alliance: Selector,
    pub top_class: String,
    pub flop_class: String,
}

impl Selectors {
    pub fn from_args(args: &Args) -> Result<Self> {
        Ok(Self {
            container: parse_selector(&args.container_selector)?,
            marker: parse_selector(&args.marker_selector)?,
            tooltip_name: parse_selector(&args.tooltip_name_selector)?,
            name: parse_selector(&args.name_selector)?,
            alliance: parse_selector(&args.alliance_selector)?,
            top_class: args.top_class.clone(),
            flop_class: args.flop_class.clone(),
        })
    }

    /// A score marker opens a ranking row. The class attribute is matched as
    /// a plain substring, so `top_color_bold` counts as a top marker too.
    pub fn is_score_marker(&self, element: &ElementRef) -> bool {
        element
            .value()
            .attr("class")
            .is_some_and(|class| class.contains(&self.top_class) || class.contains(&self.flop_class))
    }
}

fn parse_selector(selector: &str) -> Result<Selector> {
    Selector::parse(selector).map_err(|e| BotError::Selector(format!("{selector}: {e}")))
}

/// Descendants of `root` matching `selector`, in document order, `root`
/// itself excluded. Ancestors above `root` still take part in matching.
pub(crate) fn select_within<'a>(
    root: ElementRef<'a>,
    selector: &'a Selector,
) -> impl Iterator<Item = ElementRef<'a>> + 'a {
    root.descendants()
        .skip(1)
        .filter_map(ElementRef::wrap)
        .filter(move |element| selector.matches(element))
}

pub(crate) fn trimmed_text(element: &ElementRef) -> String {
    element.text().collect::<String>().trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::cli::test_args;

    #[test]
    fn invalid_selector_is_reported() {
        let mut args = test_args();
        args.alliance_selector = "..broken".to_string();

        match Selectors::from_args(&args) {
            Err(BotError::Selector(msg)) => assert!(msg.starts_with("..broken")),
            other => panic!("expected selector error, got {:?}", other.err()),
        }
    }

    #[test]
    fn select_within_skips_the_root() {
        let html = Html::parse_fragment(
            r#"<span class="x" id="root"><span class="x" id="child"></span></span>"#,
        );
        let selector = Selector::parse(".x").unwrap();
        let root = html.select(&selector).next().unwrap();

        let ids: Vec<_> = select_within(root, &selector)
            .filter_map(|el| el.value().attr("id"))
            .collect();
        assert_eq!(ids, ["child"]);
    }
}
