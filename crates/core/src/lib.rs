//! Core library for vibedoc.
//!
//! Parses rule and document markdown into front-matter metadata, sections,
//! content blocks and links, and classifies content as rule, document or
//! generic text.

pub mod classify;
pub mod config;
pub mod document;
pub mod parser;
pub mod walker;

pub use classify::{Classifier, ContentType, classify};
pub use document::{ParsedDocument, parse};
pub use parser::{DocumentParser, PatternParser};

pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
