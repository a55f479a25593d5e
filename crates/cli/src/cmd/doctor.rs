use std::path::Path;

use vibedoc_core::config::{ConfigError, ResolvedConfig, default_config_path};
use vibedoc_core::parser;

use crate::logging;

pub fn run(config: Option<&Path>, loaded: Result<ResolvedConfig, ConfigError>, verbose: bool) {
    let rc = match loaded {
        Ok(rc) => rc,
        Err(e) => {
            println!("FAIL vibedoc doctor");
            println!("{e}");
            if config.is_none() {
                println!("looked for: {}", default_config_path().display());
            }
            std::process::exit(1);
        }
    };
    logging::init(&rc, verbose);

    let backend = match parser::from_config(&rc.parser) {
        Ok(p) => p,
        Err(e) => {
            println!("FAIL vibedoc doctor");
            println!("{e}");
            std::process::exit(1);
        }
    };

    tracing::debug!("doctor resolved config: {:?}", rc);

    println!("OK   vibedoc doctor");
    println!("version: {}", vibedoc_core::version());
    println!(
        "path: {}",
        rc.source
            .as_ref()
            .map_or_else(|| "(defaults)".to_string(), |p| p.display().to_string())
    );
    println!("parser.backend: {}", backend.name());
    println!("parser.default_section_title: {}", rc.parser.default_section_title);
    println!(
        "classifier.extra_rule_keywords: {}",
        list_or_none(&rc.classifier.extra_rule_keywords)
    );
    println!(
        "classifier.extra_rule_dirs: {}",
        list_or_none(&rc.classifier.extra_rule_dirs)
    );
    println!("scan.excluded_folders: {}", rc.excluded_folders.len());
    println!("logging.level: {}", rc.logging.level);
    if let Some(ref file) = rc.logging.file {
        println!("logging.file: {}", file.display());
    }
}

fn list_or_none(items: &[String]) -> String {
    if items.is_empty() { "(none)".to_string() } else { items.join(", ") }
}
