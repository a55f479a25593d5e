//! Front-matter extraction.

use std::sync::LazyLock;

use regex::Regex;
use serde_yaml::Value;

use super::types::Metadata;

// Greedy: the block closes at the last `---` line that still leaves a valid match.
static FRONTMATTER_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?s)\A---[ \t]*\r?\n(?:(.*)\r?\n)?---[ \t]*(?:\r?\n|\z)").unwrap()
});

/// Split front-matter from content.
///
/// Front-matter must start at offset 0:
/// ```markdown
/// ---
/// key: value
/// ---
/// # Document content
/// ```
///
/// Returns the decoded metadata and the remaining body. Without a delimited
/// block the metadata is empty and the body is `content` unchanged. YAML that
/// fails to decode, or decodes to something other than a mapping, yields empty
/// metadata; the delimited block is stripped either way.
pub fn extract(content: &str) -> (Metadata, &str) {
    let Some(caps) = FRONTMATTER_RE.captures(content) else {
        return (Metadata::new(), content);
    };

    let whole = caps.get(0).map_or(0, |m| m.end());
    let yaml = caps.get(1).map_or("", |m| m.as_str());
    let body = content[whole..].trim();

    (decode(yaml), body)
}

/// Whether `content` opens with a delimited front-matter block.
pub fn has_frontmatter(content: &str) -> bool {
    FRONTMATTER_RE.is_match(content)
}

fn decode(yaml: &str) -> Metadata {
    if yaml.trim().is_empty() {
        return Metadata::new();
    }

    match serde_yaml::from_str::<Value>(yaml) {
        Ok(Value::Mapping(map)) => map
            .into_iter()
            .filter_map(|(k, v)| key_to_string(&k).map(|k| (k, v)))
            .collect(),
        Ok(other) => {
            tracing::debug!("front-matter is a {}, not a mapping, ignoring", kind_of(&other));
            Metadata::new()
        }
        Err(e) => {
            tracing::debug!("invalid YAML front-matter, ignoring: {}", e);
            Metadata::new()
        }
    }
}

fn key_to_string(key: &Value) -> Option<String> {
    match key {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Sequence(_) => "sequence",
        Value::Mapping(_) => "mapping",
        Value::Tagged(_) => "tagged",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extract_no_frontmatter() {
        let content = "# Hello\n\nSome content";
        let (meta, body) = extract(content);
        assert!(meta.is_empty());
        assert_eq!(body, content);
    }

    #[test]
    fn extract_simple_frontmatter() {
        let content = "---\nkey: value\n---\n# Content";
        let (meta, body) = extract(content);
        assert_eq!(meta.len(), 1);
        assert_eq!(meta.get("key").and_then(|v| v.as_str()), Some("value"));
        assert_eq!(body, "# Content");
    }

    #[test]
    fn extract_frontmatter_with_multiple_fields() {
        let content =
            "---\ntitle: Test\ndate: 2024-01-15\ntags:\n  - rust\n  - cli\n---\n\nBody\n";
        let (meta, body) = extract(content);
        assert_eq!(meta.get("title").and_then(|v| v.as_str()), Some("Test"));
        assert_eq!(meta.get("tags").and_then(|v| v.as_sequence()).map(Vec::len), Some(2));
        assert_eq!(body, "Body");
    }

    #[test]
    fn extract_empty_frontmatter() {
        let (meta, body) = extract("---\n---\n# Content");
        assert!(meta.is_empty());
        assert_eq!(body, "# Content");
    }

    #[test]
    fn malformed_yaml_is_stripped_with_empty_metadata() {
        let content = "---\nkey: [unclosed\n---\nBody text";
        let (meta, body) = extract(content);
        assert!(meta.is_empty());
        assert_eq!(body, "Body text");
    }

    #[test]
    fn scalar_yaml_gives_empty_metadata() {
        let (meta, body) = extract("---\njust a string\n---\nBody");
        assert!(meta.is_empty());
        assert_eq!(body, "Body");
    }

    #[test]
    fn delimiter_not_at_start_is_not_frontmatter() {
        let content = "\n---\nkey: value\n---\nBody";
        let (meta, body) = extract(content);
        assert!(meta.is_empty());
        assert_eq!(body, content);
    }

    #[test]
    fn unclosed_delimiter_is_not_frontmatter() {
        let content = "---\nkey: value\nno closing line";
        let (meta, body) = extract(content);
        assert!(meta.is_empty());
        assert_eq!(body, content);
    }

    #[test]
    fn closing_delimiter_must_be_whole_line() {
        let content = "---\nkey: value\n----\nBody";
        assert!(!has_frontmatter(content));
    }

    #[test]
    fn match_is_greedy_across_later_delimiters() {
        // The second `---` pair is swallowed into the YAML, which then fails
        // to decode as a mapping.
        let content = "---\na: 1\n---\nintro\n---\nrest";
        let (meta, body) = extract(content);
        assert!(meta.is_empty());
        assert_eq!(body, "rest");
    }

    #[test]
    fn numeric_keys_are_stringified() {
        let (meta, _) = extract("---\n1: one\ntrue: yes\n---\n");
        assert_eq!(meta.get("1").and_then(|v| v.as_str()), Some("one"));
        assert!(meta.contains_key("true"));
    }

    #[test]
    fn crlf_delimiters() {
        let (meta, body) = extract("---\r\nkey: value\r\n---\r\nBody\r\n");
        assert_eq!(meta.get("key").and_then(|v| v.as_str()), Some("value"));
        assert_eq!(body, "Body");
    }
}
