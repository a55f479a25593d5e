//! Parser capability interface and backend selection.

use thiserror::Error;

use crate::config::types::{ParserBackend, ParserConfig};
use crate::document::{self, ParseOptions, ParsedDocument};

#[derive(Debug, Error)]
pub enum ParserError {
    #[error("parser backend '{0}' is not available in this build")]
    Unsupported(&'static str),
}

/// Something that turns rule or document text into a [`ParsedDocument`].
pub trait DocumentParser {
    /// Backend name as written in configuration.
    fn name(&self) -> &'static str;

    fn parse(&self, content: &str, context: Option<&str>) -> ParsedDocument;
}

/// Regex-driven parser; needs no external services.
#[derive(Debug, Clone, Default)]
pub struct PatternParser {
    options: ParseOptions,
}

impl PatternParser {
    pub fn new(options: ParseOptions) -> Self {
        Self { options }
    }
}

impl DocumentParser for PatternParser {
    fn name(&self) -> &'static str {
        ParserBackend::Pattern.as_str()
    }

    fn parse(&self, content: &str, context: Option<&str>) -> ParsedDocument {
        document::parse_with(content, context, &self.options)
    }
}

/// Build the parser selected by `cfg`.
pub fn from_config(cfg: &ParserConfig) -> Result<Box<dyn DocumentParser>, ParserError> {
    match cfg.backend {
        ParserBackend::Pattern => {
            let options =
                ParseOptions { section_placeholder: cfg.default_section_title.clone() };
            Ok(Box::new(PatternParser::new(options)))
        }
        ParserBackend::Llm => Err(ParserError::Unsupported(ParserBackend::Llm.as_str())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pattern_backend_is_built() {
        let parser = from_config(&ParserConfig::default()).unwrap();
        assert_eq!(parser.name(), "pattern");

        let doc = parser.parse("# Title\nbody", None);
        assert_eq!(doc.sections[0].title, "Title");
    }

    #[test]
    fn placeholder_comes_from_config() {
        let cfg = ParserConfig {
            default_section_title: "overview".into(),
            ..ParserConfig::default()
        };
        let parser = from_config(&cfg).unwrap();
        assert_eq!(parser.parse("no headings", None).sections[0].title, "overview");
    }

    #[test]
    fn llm_backend_is_rejected() {
        let cfg = ParserConfig { backend: ParserBackend::Llm, ..ParserConfig::default() };
        let err = from_config(&cfg).err().unwrap();
        assert!(matches!(err, ParserError::Unsupported("llm")));
    }
}
