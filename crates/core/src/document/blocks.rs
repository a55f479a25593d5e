//! Content block extraction.
//!
//! Six independent scans run over the same text in a fixed order: headings,
//! fenced code, quotes, lists, tables, horizontal rules. A span may be
//! claimed by more than one scan. Output is grouped by scan, not interleaved
//! by position; each block records its byte offset so callers can re-sort.

use std::sync::LazyLock;

use regex::Regex;

use super::types::{BlockKind, ContentBlock};

static HEADING_LINE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(#{1,6})[ \t]+(.+)$").unwrap());

// Unterminated fences never match.
static CODE_FENCE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?s)```([\w+#.-]*)[^\n]*\n(.*?)```").unwrap()
});

static QUOTE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^>.*(?:\n>.*)*").unwrap());

// Bullet runs need at least two lines, numbered runs only one.
static LIST_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?m)^[*-][ \t]+.+(?:\n[*-][ \t]+.+)+|^\d+\.[ \t]+.+(?:\n\d+\.[ \t]+.+)*",
    )
    .unwrap()
});

static TABLE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?m)^\|.*\|[ \t]*\r?$(?:\n\|.*\|[ \t]*\r?$)+").unwrap()
});

static HR_LINE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*(?:---|\*\*\*|___)\s*$").unwrap());

/// Extract all content blocks from `body`.
pub fn extract(body: &str) -> Vec<ContentBlock> {
    let mut blocks = Vec::new();
    blocks.extend(headings(body));
    blocks.extend(code_blocks(body));
    blocks.extend(quotes(body));
    blocks.extend(lists(body));
    blocks.extend(tables(body));
    blocks.extend(horizontal_rules(body));
    blocks
}

/// Whether `text` holds at least one closed code fence.
pub(crate) fn has_fenced_code(text: &str) -> bool {
    CODE_FENCE_RE.is_match(text)
}

/// Lines of `text` with their zero-based index and byte offset, newline stripped.
fn lines_with_offsets(text: &str) -> impl Iterator<Item = (usize, usize, &str)> {
    text.split_inclusive('\n').scan(0usize, |offset, raw| {
        let start = *offset;
        *offset += raw.len();
        let line = raw.strip_suffix('\n').unwrap_or(raw);
        let line = line.strip_suffix('\r').unwrap_or(line);
        Some((start, line))
    })
    .enumerate()
    .map(|(index, (start, line))| (index, start, line))
}

fn headings(body: &str) -> Vec<ContentBlock> {
    lines_with_offsets(body)
        .filter_map(|(index, offset, line)| {
            let caps = HEADING_LINE_RE.captures(line)?;
            let level = caps[1].len();
            Some(ContentBlock {
                id: format!("h{level}_{index}"),
                offset,
                kind: BlockKind::Heading { level, content: caps[2].trim().to_string() },
            })
        })
        .collect()
}

fn code_blocks(body: &str) -> Vec<ContentBlock> {
    CODE_FENCE_RE
        .captures_iter(body)
        .enumerate()
        .map(|(n, caps)| {
            let language = match caps.get(1).map(|m| m.as_str()) {
                Some(lang) if !lang.is_empty() => lang.to_string(),
                _ => "text".to_string(),
            };
            ContentBlock {
                id: format!("code_{n}"),
                offset: caps.get(0).map_or(0, |m| m.start()),
                kind: BlockKind::Code {
                    language,
                    content: caps.get(2).map_or("", |m| m.as_str()).to_string(),
                },
            }
        })
        .collect()
}

fn quotes(body: &str) -> Vec<ContentBlock> {
    runs(&QUOTE_RE, body, "quote", |content| BlockKind::Quote { content })
}

fn lists(body: &str) -> Vec<ContentBlock> {
    runs(&LIST_RE, body, "list", |content| BlockKind::List { content })
}

fn tables(body: &str) -> Vec<ContentBlock> {
    runs(&TABLE_RE, body, "table", |content| BlockKind::Table { content })
}

/// One block per match of `re`, numbered by match index.
///
/// `.` stops before `\n` but not `\r`, so CRLF input leaves a trailing `\r`
/// on the last line of a run; it is dropped here.
fn runs(
    re: &Regex,
    body: &str,
    prefix: &str,
    make: impl Fn(String) -> BlockKind,
) -> Vec<ContentBlock> {
    re.find_iter(body)
        .enumerate()
        .map(|(n, m)| ContentBlock {
            id: format!("{prefix}_{n}"),
            offset: m.start(),
            kind: make(m.as_str().trim_end_matches('\r').to_string()),
        })
        .collect()
}

fn horizontal_rules(body: &str) -> Vec<ContentBlock> {
    lines_with_offsets(body)
        .filter(|(_, _, line)| HR_LINE_RE.is_match(line))
        .map(|(index, offset, line)| ContentBlock {
            id: format!("hr_{index}"),
            offset,
            kind: BlockKind::Hr { content: line.to_string() },
        })
        .collect()
}
