use std::fs;
use std::path::PathBuf;
use tempfile::tempdir;
use vibedoc_core::config::{ConfigLoader, ParserBackend};

fn write_file(path: &PathBuf, content: &str) {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(path, content).unwrap();
}

#[test]
fn load_full_config_ok() {
    let tmp = tempdir().unwrap();
    let cfg_path = tmp.path().join("config.toml");
    let toml = r#"
version = 1

[parser]
backend = "pattern"
default_section_title = "overview"

[classifier]
extra_rule_keywords = ["policy"]
extra_rule_dirs = ["guards/"]

[scan]
excluded_folders = ["archive", "drafts/old"]

[logging]
level = "debug"
file_level = "trace"
file = "/tmp/vibedoc/vibedoc.log"
"#;
    write_file(&cfg_path, toml);

    let rc = ConfigLoader::load(Some(&cfg_path)).expect("should load");
    assert_eq!(rc.source.as_deref(), Some(cfg_path.as_path()));
    assert_eq!(rc.parser.backend, ParserBackend::Pattern);
    assert_eq!(rc.parser.default_section_title, "overview");
    assert_eq!(rc.classifier.extra_rule_keywords, ["policy"]);
    assert_eq!(rc.excluded_folders, [PathBuf::from("archive"), PathBuf::from("drafts/old")]);
    assert_eq!(rc.logging.level, "debug");
    assert_eq!(rc.logging.file_level.as_deref(), Some("trace"));
    assert_eq!(rc.logging.file, Some(PathBuf::from("/tmp/vibedoc/vibedoc.log")));
}

#[test]
fn minimal_config_uses_defaults() {
    let tmp = tempdir().unwrap();
    let cfg_path = tmp.path().join("config.toml");
    write_file(&cfg_path, "version = 1\n");

    let rc = ConfigLoader::load(Some(&cfg_path)).expect("should load");
    assert_eq!(rc.parser.backend, ParserBackend::Pattern);
    assert_eq!(rc.parser.default_section_title, "content");
    assert!(rc.classifier.extra_rule_keywords.is_empty());
    assert!(rc.excluded_folders.is_empty());
    assert_eq!(rc.logging.level, "info");
    assert!(rc.logging.file.is_none());
}

#[test]
fn llm_backend_parses_as_config_value() {
    let tmp = tempdir().unwrap();
    let cfg_path = tmp.path().join("config.toml");
    write_file(&cfg_path, "version = 1\n[parser]\nbackend = \"llm\"\n");

    let rc = ConfigLoader::load(Some(&cfg_path)).expect("should load");
    assert_eq!(rc.parser.backend, ParserBackend::Llm);
    assert!(vibedoc_core::parser::from_config(&rc.parser).is_err());
}

#[test]
fn classifier_config_extends_vocabulary() {
    let tmp = tempdir().unwrap();
    let cfg_path = tmp.path().join("config.toml");
    write_file(&cfg_path, "version = 1\n[classifier]\nextra_rule_keywords = [\"Policy\"]\n");

    let rc = ConfigLoader::load(Some(&cfg_path)).expect("should load");
    let classifier = rc.classifier.build();
    assert_eq!(
        classifier.classify("---\nowner: ops\n---\nPolicy applies.", None),
        vibedoc_core::ContentType::Rule
    );
}
