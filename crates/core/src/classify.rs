//! Content-type classification: rule, document, or generic.

use std::fmt;
use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;

use crate::document::blocks::has_fenced_code;
use crate::document::frontmatter::has_frontmatter;

/// Path fragments that mark a rule category directory.
pub const RULE_DIR_MARKERS: &[&str] = &[
    "core-rules",
    "dev-rules",
    "flow-rules",
    "role-rules",
    "tool-rules",
    "command-rules",
    "data-rules",
    "basic-rules",
];

/// Words that mark front-matter content as a rule (matched case-insensitively).
pub const RULE_KEYWORDS: &[&str] = &[
    "rule",
    "guideline",
    "convention",
    "standard",
    "must",
    "should",
    "规则",
    "约定",
    "规范",
    "必须",
    "禁止",
];

/// Minimum number of structural indicators for the `document` type.
const DOCUMENT_INDICATOR_THRESHOLD: usize = 2;

static HEADING_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^#{1,6}[ \t]+\S").unwrap());

static LIST_LINE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^[ \t]*(?:[-*+]|\d+\.)[ \t]+\S").unwrap());

static LINK_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"!?\[[^\]]*\]\([^)]*\)").unwrap());

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ContentType {
    Rule,
    Document,
    Generic,
}

impl ContentType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Rule => "rule",
            Self::Document => "document",
            Self::Generic => "generic",
        }
    }
}

impl fmt::Display for ContentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Classifier with the built-in vocabularies plus optional extensions.
#[derive(Debug, Clone)]
pub struct Classifier {
    rule_keywords: Vec<String>,
    rule_dir_markers: Vec<String>,
}

impl Default for Classifier {
    fn default() -> Self {
        Self {
            rule_keywords: RULE_KEYWORDS.iter().map(|s| s.to_string()).collect(),
            rule_dir_markers: RULE_DIR_MARKERS.iter().map(|s| s.to_string()).collect(),
        }
    }
}

impl Classifier {
    /// Built-in vocabularies extended with `keywords` and `dir_markers`.
    pub fn with_extensions(keywords: &[String], dir_markers: &[String]) -> Self {
        let mut classifier = Self::default();
        classifier.rule_keywords.extend(keywords.iter().map(|k| k.to_lowercase()));
        classifier
            .rule_dir_markers
            .extend(dir_markers.iter().map(|d| normalize_path(d)));
        classifier
    }

    /// Classify `content`, preferring the path in `context` when one is given.
    pub fn classify(&self, content: &str, context: Option<&str>) -> ContentType {
        match context.map(str::trim).filter(|c| !c.is_empty()) {
            Some(path) => self.classify_path(path),
            None => self.classify_content(content),
        }
    }

    fn classify_path(&self, path: &str) -> ContentType {
        let path = normalize_path(path);

        if path.contains("rules/")
            || path.ends_with("rule.mdc")
            || path.ends_with("rule.md")
            || self.rule_dir_markers.iter().any(|m| path.contains(m.as_str()))
        {
            return ContentType::Rule;
        }

        if path.contains("docs/")
            || path.contains("documents/")
            || path.contains("/doc/")
            || path.ends_with(".md")
            || path.ends_with(".mdx")
        {
            return ContentType::Document;
        }

        ContentType::Generic
    }

    fn classify_content(&self, content: &str) -> ContentType {
        if has_frontmatter(content) {
            let lower = content.to_lowercase();
            if self.rule_keywords.iter().any(|k| lower.contains(k.as_str())) {
                return ContentType::Rule;
            }
        }

        let indicators = [
            HEADING_RE.is_match(content),
            LIST_LINE_RE.is_match(content),
            has_fenced_code(content),
            LINK_RE.is_match(content),
        ];

        if indicators.iter().filter(|&&hit| hit).count() >= DOCUMENT_INDICATOR_THRESHOLD {
            ContentType::Document
        } else {
            ContentType::Generic
        }
    }
}

/// Classify with the built-in vocabularies.
pub fn classify(content: &str, context: Option<&str>) -> ContentType {
    Classifier::default().classify(content, context)
}

fn normalize_path(path: &str) -> String {
    path.replace('\\', "/").to_lowercase()
}
