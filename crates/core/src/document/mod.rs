//! Structured parsing of rule and document text.
//!
//! This module provides functionality to:
//! - Split YAML front-matter from the body
//! - Segment the body into heading-delimited sections
//! - Extract content blocks (headings, code, quotes, lists, tables, rules)
//! - Collect wikilinks, markdown links and images
//!
//! Parsing is a pure function of its input; it never reads files.

pub mod blocks;
pub mod frontmatter;
pub mod links;
pub mod sections;
pub mod types;

use std::path::Path;

pub use sections::DEFAULT_SECTION_TITLE;
pub use types::{BlockKind, ContentBlock, Link, LinkKind, Metadata, ParsedDocument, Section};

/// Knobs for a parse call.
#[derive(Debug, Clone)]
pub struct ParseOptions {
    /// Title of the synthetic section used when the body has no headings.
    pub section_placeholder: String,
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self { section_placeholder: DEFAULT_SECTION_TITLE.to_string() }
    }
}

/// Parse `content` with default options.
///
/// `context` is the original file path, if known; it only feeds the fallback title.
pub fn parse(content: &str, context: Option<&str>) -> ParsedDocument {
    parse_with(content, context, &ParseOptions::default())
}

/// Parse `content` with explicit options.
pub fn parse_with(content: &str, context: Option<&str>, opts: &ParseOptions) -> ParsedDocument {
    let (metadata, body) = frontmatter::extract(content);

    let sections = sections::segment(body, &opts.section_placeholder);
    let blocks = blocks::extract(body);
    let links = links::extract(body);
    let title = derive_title(&metadata, body, context);

    tracing::trace!(
        title = %title,
        sections = sections.len(),
        blocks = blocks.len(),
        links = links.len(),
        "parsed document"
    );

    ParsedDocument { title, metadata, body: body.to_string(), sections, blocks, links }
}

/// Title: front-matter `title` > first heading > file stem of `context` > "Untitled".
fn derive_title(metadata: &Metadata, body: &str, context: Option<&str>) -> String {
    if let Some(title) = metadata.get("title").and_then(|v| v.as_str())
        && !title.trim().is_empty()
    {
        return title.trim().to_string();
    }

    if let Some(heading) = sections::first_heading(body).filter(|h| !h.is_empty()) {
        return heading;
    }

    context
        .map(str::trim)
        .filter(|c| !c.is_empty())
        .and_then(|c| Path::new(c).file_stem())
        .and_then(|s| s.to_str())
        .unwrap_or("Untitled")
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_frontmatter_keeps_body_verbatim() {
        let content = "  Plain text with trailing space  \n";
        let doc = parse(content, None);
        assert!(doc.metadata.is_empty());
        assert_eq!(doc.body, content);
    }

    #[test]
    fn frontmatter_block_is_removed_from_body() {
        let doc = parse("---\nkey: value\n---\n# Heading\ntext", None);
        assert_eq!(doc.metadata.get("key").and_then(|v| v.as_str()), Some("value"));
        assert!(!doc.body.contains("key: value"));
        assert!(doc.body.starts_with("# Heading"));
    }

    #[test]
    fn headingless_body_gets_placeholder_section() {
        let doc = parse("---\na: b\n---\n\nJust prose.\n", None);
        assert_eq!(doc.sections.len(), 1);
        assert_eq!(doc.sections[0].title, "content");
        assert_eq!(doc.sections[0].content, "Just prose.");
    }

    #[test]
    fn custom_placeholder_from_options() {
        let opts = ParseOptions { section_placeholder: "body".into() };
        let doc = parse_with("prose", None, &opts);
        assert_eq!(doc.sections[0].title, "body");
    }

    #[test]
    fn title_precedence() {
        let doc = parse("---\ntitle: From Meta\n---\n# From Heading", Some("rules/x.md"));
        assert_eq!(doc.title, "From Meta");

        let doc = parse("# From Heading\n", Some("rules/x.md"));
        assert_eq!(doc.title, "From Heading");

        let doc = parse("prose only", Some("rules/naming-rule.mdc"));
        assert_eq!(doc.title, "naming-rule");

        let doc = parse("prose only", None);
        assert_eq!(doc.title, "Untitled");
    }

    #[test]
    fn document_order_view_interleaves_categories() {
        let doc = parse("> quote first\n\n# Heading second\n\n```\ncode third\n```", None);

        let grouped: Vec<&str> = doc.blocks.iter().map(|b| b.kind.as_str()).collect();
        assert_eq!(grouped, ["heading", "code", "quote"]);

        let ordered: Vec<&str> =
            doc.blocks_in_document_order().iter().map(|b| b.kind.as_str()).collect();
        assert_eq!(ordered, ["quote", "heading", "code"]);
    }

    #[test]
    fn serializes_blocks_with_type_tag() {
        let doc = parse("```rust\nfn main() {}\n```", None);
        let json = serde_json::to_value(&doc.blocks[0]).unwrap();
        assert_eq!(json["type"], "code");
        assert_eq!(json["id"], "code_0");
        assert_eq!(json["language"], "rust");
        assert_eq!(json["content"], "fn main() {}\n");
    }
}
