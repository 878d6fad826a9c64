//! Static HTML parsing, used when script rendering is disabled or fails.

use super::RenderedPage;
use once_cell::sync::Lazy;
use scraper::{Html, Selector};
use std::collections::BTreeSet;
use url::Url;

static BODY_SELECTOR: Lazy<Selector> =
    Lazy::new(|| Selector::parse("body").expect("Failed to parse body selector"));

static LINK_SELECTOR: Lazy<Selector> =
    Lazy::new(|| Selector::parse("a[href]").expect("Failed to parse link selector"));

/// Elements whose text never reaches the reader.
const HIDDEN_TAGS: [&str; 4] = ["script", "style", "noscript", "template"];

/// Parse downloaded HTML into page text and absolute outbound links.
pub fn parse(html: &str, page_url: &str) -> RenderedPage {
    let document = Html::parse_document(html);

    RenderedPage {
        url: page_url.to_string(),
        text: visible_text(&document),
        links: absolute_links(&document, page_url),
        rendered: false,
    }
}

fn visible_text(document: &Html) -> String {
    let root = document
        .select(&BODY_SELECTOR)
        .next()
        .unwrap_or_else(|| document.root_element());

    let mut parts: Vec<&str> = Vec::new();
    for node in root.descendants() {
        let Some(text) = node.value().as_text() else {
            continue;
        };

        let hidden = node.ancestors().any(|ancestor| {
            ancestor
                .value()
                .as_element()
                .is_some_and(|el| HIDDEN_TAGS.contains(&el.name()))
        });
        if hidden {
            continue;
        }

        let trimmed = text.trim();
        if !trimmed.is_empty() {
            parts.push(trimmed);
        }
    }

    parts.join("\n")
}

fn absolute_links(document: &Html, page_url: &str) -> BTreeSet<String> {
    let Ok(base) = Url::parse(page_url) else {
        return BTreeSet::new();
    };

    document
        .select(&LINK_SELECTOR)
        .filter_map(|anchor| anchor.value().attr("href"))
        .filter_map(|href| base.join(href.trim()).ok())
        .filter(|link| matches!(link.scheme(), "http" | "https"))
        .map(|link| link.to_string())
        .collect()
}
