//! Document structure types produced by the parser.

use serde::Serialize;
use serde_yaml::Value;
use std::collections::BTreeMap;

/// Front-matter fields keyed by name.
pub type Metadata = BTreeMap<String, Value>;

/// Result of parsing one piece of rule or document content.
///
/// Created once per parse call and never mutated by the parser afterwards.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ParsedDocument {
    /// Display title (front-matter `title`, first heading, file stem, or "Untitled").
    pub title: String,
    /// Decoded front-matter; empty when absent or malformed.
    pub metadata: Metadata,
    /// Text after the front-matter block.
    pub body: String,
    /// Sections in heading order.
    pub sections: Vec<Section>,
    /// Content blocks grouped by category.
    pub blocks: Vec<ContentBlock>,
    /// Links found in the body.
    pub links: Vec<Link>,
}

impl ParsedDocument {
    /// Blocks re-sorted by their position in `body`.
    ///
    /// `blocks` itself stays grouped by category; this view interleaves
    /// categories the way they appear in the text. The sort is stable, so
    /// blocks sharing an offset keep their category order.
    pub fn blocks_in_document_order(&self) -> Vec<&ContentBlock> {
        let mut ordered: Vec<&ContentBlock> = self.blocks.iter().collect();
        ordered.sort_by_key(|b| b.offset);
        ordered
    }
}

/// A heading-delimited span of the body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Section {
    pub title: String,
    /// Number of leading `#` characters.
    pub level: usize,
    pub content: String,
    /// Deeper headings inside this section, flattened (never nested further).
    pub subsections: Vec<Section>,
}

/// A classified span of the body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContentBlock {
    /// Unique within one parse result.
    pub id: String,
    /// Byte offset of the match in the body.
    pub offset: usize,
    #[serde(flatten)]
    pub kind: BlockKind,
}

impl ContentBlock {
    pub fn content(&self) -> &str {
        match &self.kind {
            BlockKind::Heading { content, .. }
            | BlockKind::Code { content, .. }
            | BlockKind::Quote { content }
            | BlockKind::List { content }
            | BlockKind::Table { content }
            | BlockKind::Hr { content } => content,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum BlockKind {
    Heading { level: usize, content: String },
    Code { language: String, content: String },
    Quote { content: String },
    List { content: String },
    Table { content: String },
    Hr { content: String },
}

impl BlockKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Heading { .. } => "heading",
            Self::Code { .. } => "code",
            Self::Quote { .. } => "quote",
            Self::List { .. } => "list",
            Self::Table { .. } => "table",
            Self::Hr { .. } => "hr",
        }
    }
}

/// A link found in the body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Link {
    /// Target as written in the link.
    pub target: String,
    /// Alias for wikilinks, text for markdown links, alt text for images.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    pub kind: LinkKind,
    /// 1-based line number in the body.
    pub line: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LinkKind {
    Wikilink,
    Markdown,
    Image,
}

impl LinkKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Wikilink => "wikilink",
            Self::Markdown => "markdown",
            Self::Image => "image",
        }
    }
}
