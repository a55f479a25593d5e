//! Link extraction: wikilinks, markdown links, images.

use std::sync::LazyLock;

use regex::Regex;

use super::types::{Link, LinkKind};

static WIKILINK_RE: LazyLock<Regex> = LazyLock::new(|| {
    // Matches [[target]] or [[target|alias]]
    // Also handles [[target#section]] and [[target#section|alias]]
    Regex::new(r"\[\[([^\]|]+)(?:\|([^\]]+))?\]\]").unwrap()
});

static MARKDOWN_LINK_RE: LazyLock<Regex> = LazyLock::new(|| {
    // Matches [text](url) and ![alt](src), with an optional "title" after the url
    Regex::new(r#"(!?)\[([^\]]*)\]\(\s*([^)\s]+)(?:\s+"[^"]*")?\s*\)"#).unwrap()
});

/// Extract links from `body`, line by line.
pub fn extract(body: &str) -> Vec<Link> {
    let mut links = Vec::new();

    for (line_num, line) in body.lines().enumerate() {
        let line_number = line_num + 1;

        for cap in WIKILINK_RE.captures_iter(line) {
            let target = cap.get(1).map(|m| m.as_str()).unwrap_or("");
            let alias = cap.get(2).map(|m| m.as_str().to_string());

            links.push(Link {
                target: target.trim().to_string(),
                text: alias,
                kind: LinkKind::Wikilink,
                line: line_number,
            });
        }

        for cap in MARKDOWN_LINK_RE.captures_iter(line) {
            let kind =
                if cap[1].is_empty() { LinkKind::Markdown } else { LinkKind::Image };
            let text = cap.get(2).map(|m| m.as_str()).filter(|t| !t.is_empty());

            links.push(Link {
                target: cap[3].to_string(),
                text: text.map(str::to_string),
                kind,
                line: line_number,
            });
        }
    }

    links
}
