//! Configuration file schema and loading.

pub mod loader;
pub mod types;

pub use loader::{ConfigError, ConfigLoader, default_config_path};
pub use types::{
    ClassifierConfig, ConfigFile, LoggingConfig, ParserBackend, ParserConfig, ResolvedConfig,
    ScanConfig,
};
