//! Parse command implementation.

use std::fs;

use vibedoc_core::config::ResolvedConfig;
use vibedoc_core::parser;

use super::output::print_document_text;
use crate::ParseArgs;

pub fn run(rc: &ResolvedConfig, args: ParseArgs) {
    let content = match fs::read_to_string(&args.file) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Error reading {}: {}", args.file.display(), e);
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

    let context = args.file.to_string_lossy().into_owned();
    let doc = parser.parse(&content, Some(context.as_str()));
    let content_type = rc.classifier.build().classify(&content, Some(context.as_str()));

    tracing::debug!(
        "parsed {} as {} with {} backend",
        args.file.display(),
        content_type,
        parser.name()
    );

    if args.json {
        let mut value = match serde_json::to_value(&doc) {
            Ok(v) => v,
            Err(e) => {
                eprintln!("Error serializing result: {}", e);
                std::process::exit(1);
            }
        };
        value["type"] = serde_json::Value::from(content_type.as_str());
        if args.sort_blocks {
            value["blocks"] = serde_json::to_value(doc.blocks_in_document_order())
                .unwrap_or_default();
        }
        println!("{}", serde_json::to_string_pretty(&value).unwrap_or_default());
    } else {
        print_document_text(&doc, content_type, args.sort_blocks);
    }
}
