//! Shared output formatting.

use serde::Serialize;
use vibedoc_core::ContentType;
use vibedoc_core::document::{ContentBlock, ParsedDocument, Section};

/// One scanned file, for table and JSON output.
#[derive(Debug, Serialize)]
pub struct ScanRow {
    pub path: String,
    #[serde(rename = "type")]
    pub content_type: ContentType,
    pub title: String,
    pub sections: usize,
    pub blocks: usize,
    pub links: usize,
}

/// Print a parsed document as readable text.
pub fn print_document_text(doc: &ParsedDocument, content_type: ContentType, sorted: bool) {
    println!("title: {}", doc.title);
    println!("type: {}", content_type);

    if doc.metadata.is_empty() {
        println!("metadata: (none)");
    } else {
        println!("metadata:");
        let yaml = serde_yaml::to_string(&doc.metadata).unwrap_or_default();
        for line in yaml.lines() {
            println!("  {}", line);
        }
    }

    println!();
    println!("sections:");
    for section in &doc.sections {
        print_section(section, 1);
    }

    println!();
    let blocks: Vec<&ContentBlock> =
        if sorted { doc.blocks_in_document_order() } else { doc.blocks.iter().collect() };
    print_blocks_table(&blocks);

    if !doc.links.is_empty() {
        println!();
        println!("links:");
        for link in &doc.links {
            match &link.text {
                Some(text) => {
                    println!("  L{} {} {} ({})", link.line, link.kind.as_str(), link.target, text)
                }
                None => println!("  L{} {} {}", link.line, link.kind.as_str(), link.target),
            }
        }
    }
}

fn print_section(section: &Section, depth: usize) {
    let indent = "  ".repeat(depth);
    println!(
        "{}{} {} ({} lines)",
        indent,
        "#".repeat(section.level),
        section.title,
        section.content.lines().count()
    );
    for sub in &section.subsections {
        print_section(sub, depth + 1);
    }
}

fn print_blocks_table(blocks: &[&ContentBlock]) {
    if blocks.is_empty() {
        println!("(no blocks found)");
        return;
    }

    let id_width = blocks.iter().map(|b| b.id.len()).max().unwrap_or(2).clamp(2, 20);
    let type_width = 7;

    println!("{:<id_width$}  {:<type_width$}  CONTENT", "ID", "TYPE");
    println!("{:-<id_width$}  {:-<type_width$}  {:-<40}", "", "", "");

    for block in blocks {
        let preview = block.content().lines().next().unwrap_or("");
        println!(
            "{:<id_width$}  {:<type_width$}  {}",
            block.id,
            block.kind.as_str(),
            truncate(preview, 60),
        );
    }

    println!();
    println!("-- {} blocks --", blocks.len());
}

/// Print scan rows as a table.
pub fn print_scan_table(rows: &[ScanRow]) {
    if rows.is_empty() {
        println!("(no files found)");
        return;
    }

    let path_width = rows.iter().map(|r| r.path.chars().count()).max().unwrap_or(4).clamp(4, 50);
    let type_width = 8; // "document" is longest

    println!(
        "{:<path_width$}  {:<type_width$}  {:>8}  {:>6}  TITLE",
        "PATH", "TYPE", "SECTIONS", "BLOCKS"
    );
    println!(
        "{:-<path_width$}  {:-<type_width$}  {:->8}  {:->6}  {:-<20}",
        "", "", "", "", ""
    );

    for row in rows {
        println!(
            "{:<path_width$}  {:<type_width$}  {:>8}  {:>6}  {}",
            truncate(&row.path, path_width),
            row.content_type.as_str(),
            row.sections,
            row.blocks,
            truncate(&row.title, 40),
        );
    }

    println!();
    println!("-- {} files --", rows.len());
}

pub fn print_scan_json(rows: &[ScanRow]) {
    println!("{}", serde_json::to_string_pretty(rows).unwrap_or_default());
}

pub fn print_scan_quiet(rows: &[ScanRow]) {
    for row in rows {
        println!("{}", row.path);
    }
}

/// Truncate on a character boundary, adding an ellipsis when shortened.
pub fn truncate(s: &str, max_chars: usize) -> String {
    if s.chars().count() <= max_chars {
        s.to_string()
    } else if max_chars > 3 {
        let head: String = s.chars().take(max_chars - 3).collect();
        format!("{}...", head)
    } else {
        s.chars().take(max_chars).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn truncate_short_string_unchanged() {
        assert_eq!(truncate("short", 10), "short");
    }

    #[test]
    fn truncate_adds_ellipsis() {
        assert_eq!(truncate("a long title here", 10), "a long ...");
    }

    #[test]
    fn truncate_respects_char_boundaries() {
        assert_eq!(truncate("约定内容约定内容", 6), "约定内...");
    }
}
