//! Scan command implementation.

use std::fs;

use vibedoc_core::config::ResolvedConfig;
use vibedoc_core::parser;
use vibedoc_core::walker::DocumentWalker;

use super::output::{ScanRow, print_scan_json, print_scan_quiet, print_scan_table};
use crate::{OutputFormat, ScanArgs};

pub fn run(rc: &ResolvedConfig, args: ScanArgs) {
    let walker = match DocumentWalker::with_exclusions(&args.dir, rc.excluded_folders.clone())
    {
        Ok(w) => w,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };

    let files = match walker.walk() {
        Ok(files) => files,
        Err(e) => {
            eprintln!("Error scanning {}: {}", args.dir.display(), e);
            std::process::exit(1);
        }
    };

    let parser = match parser::from_config(&rc.parser) {
        Ok(p) => p,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };
    let classifier = rc.classifier.build();

    let mut rows = Vec::with_capacity(files.len());
    for file in &files {
        let content = match fs::read_to_string(&file.absolute_path) {
            Ok(c) => c,
            Err(e) => {
                tracing::warn!("skipping {}: {}", file.relative_path.display(), e);
                continue;
            }
        };

        // Path rules see the path relative to the scan root
        let path = file.relative_path.to_string_lossy().replace('\\', "/");
        let doc = parser.parse(&content, Some(path.as_str()));

        rows.push(ScanRow {
            content_type: classifier.classify(&content, Some(path.as_str())),
            title: doc.title.clone(),
            sections: doc.sections.len(),
            blocks: doc.blocks.len(),
            links: doc.links.len(),
            path,
        });
    }

    match resolve_format(args.output, args.json, args.quiet) {
        OutputFormat::Table => print_scan_table(&rows),
        OutputFormat::Json => print_scan_json(&rows),
        OutputFormat::Quiet => print_scan_quiet(&rows),
    }
}

fn resolve_format(output: OutputFormat, json: bool, quiet: bool) -> OutputFormat {
    if json {
        OutputFormat::Json
    } else if quiet {
        OutputFormat::Quiet
    } else {
        output
    }
}
