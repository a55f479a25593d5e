//! Section segmentation by ATX headings.

use std::sync::LazyLock;

use regex::Regex;

use super::types::Section;

/// Title of the synthetic section produced for text without headings.
pub const DEFAULT_SECTION_TITLE: &str = "content";

/// Headings of at least this level are subsection candidates.
const SUBSECTION_MIN_LEVEL: usize = 2;

static HEADING_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^(#+)[ \t]+(.+)$").unwrap());

/// A heading line located in the text.
#[derive(Debug, Clone)]
struct HeadingMark {
    /// Offset of the first `#`.
    start: usize,
    /// Offset just past the heading text (before the newline).
    line_end: usize,
    level: usize,
    title: String,
}

fn find_headings(text: &str) -> Vec<HeadingMark> {
    HEADING_RE
        .captures_iter(text)
        .filter_map(|caps| {
            let whole = caps.get(0)?;
            Some(HeadingMark {
                start: whole.start(),
                line_end: whole.end(),
                level: caps[1].len(),
                title: caps[2].trim().to_string(),
            })
        })
        .collect()
}

/// First heading title in `text`, if any.
pub fn first_heading(text: &str) -> Option<String> {
    HEADING_RE.captures(text).map(|caps| caps[2].trim().to_string())
}

/// Split `body` into sections.
///
/// Every heading, whatever its level, starts a section in the returned list,
/// and a section's content stops at the next heading of any level. Headings
/// deeper than a section that appear before the next heading of the same or
/// higher level are also listed, flattened, in that section's `subsections`.
///
/// Text without headings yields a single section named `placeholder` holding
/// the whole trimmed body.
pub fn segment(body: &str, placeholder: &str) -> Vec<Section> {
    let marks = find_headings(body);

    if marks.is_empty() {
        return vec![Section {
            title: placeholder.to_string(),
            level: 1,
            content: body.trim().to_string(),
            subsections: Vec::new(),
        }];
    }

    let flat: Vec<Section> = marks
        .iter()
        .enumerate()
        .map(|(i, mark)| {
            let end = marks.get(i + 1).map_or(body.len(), |next| next.start);
            Section {
                title: mark.title.clone(),
                level: mark.level,
                content: body[mark.line_end..end].trim().to_string(),
                subsections: Vec::new(),
            }
        })
        .collect();

    marks
        .iter()
        .enumerate()
        .map(|(i, mark)| {
            let extent_end = marks[i + 1..]
                .iter()
                .position(|next| next.level <= mark.level)
                .map_or(marks.len(), |p| i + 1 + p);

            let subsections = (i + 1..extent_end)
                .filter(|&j| marks[j].level >= SUBSECTION_MIN_LEVEL)
                .map(|j| flat[j].clone())
                .collect();

            Section { subsections, ..flat[i].clone() }
        })
        .collect()
}
