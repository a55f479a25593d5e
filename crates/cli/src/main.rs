mod cmd;
mod logging;

use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;
use vibedoc_core::config::{ConfigError, ConfigLoader, ResolvedConfig};

#[derive(Debug, Parser)]
#[command(
    name = "vibedoc",
    version,
    about = "Parse and classify rule and document markdown"
)]
struct Cli {
    /// Path to config.toml (defaults to ~/.config/vibedoc/config.toml)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Log at debug level regardless of configuration
    #[arg(long, short, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Validate configuration and print resolved settings
    Doctor,

    /// Parse a file into metadata, sections, blocks and links
    Parse(ParseArgs),

    /// Classify a file as rule, document or generic
    Classify(ClassifyArgs),

    /// Parse and classify every markdown file under a directory
    Scan(ScanArgs),
}

#[derive(Debug, Clone, Copy, Default, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Table,
    Json,
    Quiet,
}

#[derive(Debug, Args)]
pub struct ParseArgs {
    /// File to parse
    pub file: PathBuf,

    /// Print the full parse result as JSON
    #[arg(long)]
    pub json: bool,

    /// List blocks in document order instead of grouped by category
    #[arg(long)]
    pub sort_blocks: bool,
}

#[derive(Debug, Args)]
pub struct ClassifyArgs {
    /// File to classify
    pub file: PathBuf,

    /// Ignore the file path and classify by content only
    #[arg(long)]
    pub no_context: bool,

    /// Print the result as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Args)]
pub struct ScanArgs {
    /// Directory to scan
    pub dir: PathBuf,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Table)]
    pub output: OutputFormat,

    /// Shorthand for --output json
    #[arg(long, conflicts_with = "quiet")]
    pub json: bool,

    /// Shorthand for --output quiet (paths only)
    #[arg(long, short)]
    pub quiet: bool,
}

fn main() {
    let cli = Cli::parse();

    let loaded = ConfigLoader::load(cli.config.as_deref());

    match cli.command {
        Commands::Doctor => cmd::doctor::run(cli.config.as_deref(), loaded, cli.verbose),
        Commands::Parse(args) => cmd::parse::run(&ready(loaded, cli.verbose), args),
        Commands::Classify(args) => cmd::classify::run(&ready(loaded, cli.verbose), args),
        Commands::Scan(args) => cmd::scan::run(&ready(loaded, cli.verbose), args),
    }
}

/// Unwrap the loaded config or exit, then start logging.
fn ready(loaded: Result<ResolvedConfig, ConfigError>, verbose: bool) -> ResolvedConfig {
    let rc = match loaded {
        Ok(rc) => rc,
        Err(e) => {
            eprintln!("Error loading config: {e}");
            std::process::exit(1);
        }
    };
    logging::init(&rc, verbose);
    rc
}
