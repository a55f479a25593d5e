//! Classify command implementation.

use std::fs;

use serde::Serialize;
use vibedoc_core::ContentType;
use vibedoc_core::config::ResolvedConfig;

use crate::ClassifyArgs;

#[derive(Debug, Serialize)]
struct ClassifyOutput {
    path: String,
    #[serde(rename = "type")]
    content_type: ContentType,
    by: &'static str,
}

pub fn run(rc: &ResolvedConfig, args: ClassifyArgs) {
    let content = match fs::read_to_string(&args.file) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Error reading {}: {}", args.file.display(), e);
            std::process::exit(1);
        }
    };

    let path = args.file.to_string_lossy().to_string();
    let context = if args.no_context { None } else { Some(path.as_str()) };

    let content_type = rc.classifier.build().classify(&content, context);

    if args.json {
        let out = ClassifyOutput {
            path,
            content_type,
            by: if args.no_context { "content" } else { "path" },
        };
        println!("{}", serde_json::to_string_pretty(&out).unwrap_or_default());
    } else {
        println!("{}", content_type);
    }
}
