use std::fs::{self, File};
use std::path::Path;
use std::sync::Mutex;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::filter::{EnvFilter, LevelFilter};
use tracing_subscriber::fmt;
use tracing_subscriber::prelude::*;
use vibedoc_core::config::ResolvedConfig;

// Dropping the guard stops the file writer, so it lives until exit.
static FILE_WRITER_GUARD: Mutex<Option<WorkerGuard>> = Mutex::new(None);

/// Install the global subscriber: stderr always, plus a file when configured.
pub fn init(cfg: &ResolvedConfig, verbose: bool) {
    let stderr_level = if verbose {
        LevelFilter::DEBUG
    } else {
        parse_level(&cfg.logging.level).unwrap_or(LevelFilter::INFO)
    };

    let stderr_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_filter(filter_at(stderr_level));

    let file_layer = cfg.logging.file.as_deref().map(|path| {
        let level = cfg.logging.file_level.as_deref().unwrap_or(&cfg.logging.level);
        let (writer, guard) = tracing_appender::non_blocking(open_log_file(path));
        if let Ok(mut slot) = FILE_WRITER_GUARD.lock() {
            *slot = Some(guard);
        }

        fmt::layer()
            .with_writer(writer)
            .with_ansi(false)
            .with_file(true)
            .with_line_number(true)
            .with_filter(filter_at(parse_level(level).unwrap_or(LevelFilter::DEBUG)))
    });

    tracing_subscriber::registry().with(stderr_layer).with(file_layer).init();
}

/// `RUST_LOG` directives win over the configured default.
fn filter_at(level: LevelFilter) -> EnvFilter {
    EnvFilter::builder().with_default_directive(level.into()).from_env_lossy()
}

fn open_log_file(path: &Path) -> File {
    if let Some(dir) = path.parent().filter(|p| !p.as_os_str().is_empty())
        && let Err(e) = fs::create_dir_all(dir)
    {
        eprintln!("Failed to create log directory {}: {}", dir.display(), e);
        std::process::exit(1);
    }

    File::create(path).unwrap_or_else(|e| {
        eprintln!("Failed to create log file {}: {}", path.display(), e);
        std::process::exit(1);
    })
}

fn parse_level(s: &str) -> Option<LevelFilter> {
    match s.to_ascii_lowercase().as_str() {
        "off" => Some(LevelFilter::OFF),
        "error" => Some(LevelFilter::ERROR),
        "warn" => Some(LevelFilter::WARN),
        "info" => Some(LevelFilter::INFO),
        "debug" => Some(LevelFilter::DEBUG),
        "trace" => Some(LevelFilter::TRACE),
        _ => None,
    }
}
