use std::path::PathBuf;

use serde::Deserialize;

use crate::classify::Classifier;
use crate::document::DEFAULT_SECTION_TITLE;

#[derive(Debug, Deserialize)]
pub struct ConfigFile {
    pub version: u32,
    #[serde(default)]
    pub parser: ParserConfig,
    #[serde(default)]
    pub classifier: ClassifierConfig,
    #[serde(default)]
    pub scan: ScanConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Which parser implementation to use.
#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum ParserBackend {
    /// Regex-driven structural parsing.
    #[default]
    Pattern,
    /// Model-assisted parsing through an LLM service.
    Llm,
}

impl ParserBackend {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pattern => "pattern",
            Self::Llm => "llm",
        }
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct ParserConfig {
    #[serde(default)]
    pub backend: ParserBackend,
    /// Title of the synthetic section for text without headings.
    #[serde(default = "default_section_title")]
    pub default_section_title: String,
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self { backend: ParserBackend::default(), default_section_title: default_section_title() }
    }
}

fn default_section_title() -> String {
    DEFAULT_SECTION_TITLE.to_string()
}

/// Additions to the classifier's built-in vocabularies.
#[derive(Debug, Deserialize, Default, Clone)]
pub struct ClassifierConfig {
    #[serde(default)]
    pub extra_rule_keywords: Vec<String>,
    #[serde(default)]
    pub extra_rule_dirs: Vec<String>,
}

impl ClassifierConfig {
    pub fn build(&self) -> Classifier {
        Classifier::with_extensions(&self.extra_rule_keywords, &self.extra_rule_dirs)
    }
}

#[derive(Debug, Deserialize, Default, Clone)]
pub struct ScanConfig {
    /// Folders to skip during directory scans (relative to the scan root).
    #[serde(default)]
    pub excluded_folders: Vec<String>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default)]
    pub file_level: Option<String>,
    #[serde(default)]
    pub file: Option<PathBuf>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self { level: default_log_level(), file_level: None, file: None }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

#[derive(Debug, Clone, Default)]
pub struct ResolvedConfig {
    /// File the configuration was read from; `None` when built-in defaults are used.
    pub source: Option<PathBuf>,
    pub parser: ParserConfig,
    pub classifier: ClassifierConfig,
    pub excluded_folders: Vec<PathBuf>,
    pub logging: LoggingConfig,
}
