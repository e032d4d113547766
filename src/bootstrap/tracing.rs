//! Tracing configuration for the pasteboard CLI
//!
//! Installs the global `tracing` subscriber that the `pb-app` and
//! `pb-platform` events flow into.
//!
//! ## Architecture / 架构
//!
//! - **Stdout layer**: always on
//! - **File layer**: daily rolling file when a log directory is configured
//! - **Environment-aware**: debug level in development builds, info otherwise

use std::{fs, io, path::Path, path::PathBuf, sync::OnceLock};

use pb_core::config::PasteboardConfig;
use tracing_appender::non_blocking::{NonBlocking, WorkerGuard};
use tracing_subscriber::{fmt, fmt::writer::BoxMakeWriter, prelude::*, registry, EnvFilter};

static LOG_GUARD: OnceLock<WorkerGuard> = OnceLock::new();

const LOG_FILE_PREFIX: &str = "pasteboard.log";
const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S%.3f";

/// Logging knobs taken from the `[logging]` config section.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoggingSettings {
    /// Base level directive; `None` picks the build default
    pub level: Option<String>,
    /// Directory for the rolling log file; `None` logs to stdout only
    pub directory: Option<PathBuf>,
}

impl LoggingSettings {
    /// Empty config values mean "not set".
    pub fn from_config(config: &PasteboardConfig) -> Self {
        Self {
            level: Some(config.log_level.trim())
                .filter(|level| !level.is_empty())
                .map(str::to_string),
            directory: Some(config.log_directory.clone())
                .filter(|dir| !dir.as_os_str().is_empty()),
        }
    }
}

/// Check if running in development environment
fn is_development() -> bool {
    cfg!(debug_assertions)
}

/// Build the default filter directives for tracing
///
/// ## Behavior / 行为
/// - **Base level**: the configured level, else debug (dev) / info (prod)
/// - **Host crates**: clipboard backends are noisy at debug, keep them at warn
fn build_filter_directives(is_dev: bool, level: Option<&str>) -> Vec<String> {
    let base = level.unwrap_or(if is_dev { "debug" } else { "info" });
    vec![
        base.to_string(),
        "clipboard_rs=warn".to_string(),
        "arboard=warn".to_string(),
        if is_dev {
            "pb_platform=debug"
        } else {
            "pb_platform=info"
        }
        .to_string(),
    ]
}

/// Initialize the tracing subscriber
///
/// ## Behavior / 行为
///
/// - **Environment filter**: `RUST_LOG` wins over the configured directives
/// - **Stdout**: always
/// - **File**: daily rolling file in `settings.directory`; on failure logging
///   falls back to stdout only
///
/// ## Errors / 错误
///
/// Returns `Err` if a global subscriber is already registered.
pub fn init_tracing_subscriber(settings: &LoggingSettings) -> anyhow::Result<()> {
    let filter_directives = build_filter_directives(is_development(), settings.level.as_deref());
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(filter_directives.join(",")));

    let stdout_writer = BoxMakeWriter::new(io::stdout);
    let file_writer = match settings.directory.as_deref().map(build_file_writer) {
        Some(Ok(writer)) => Some(writer),
        Some(Err(err)) => {
            eprintln!("Failed to initialize file logging, falling back to stdout: {err}");
            None
        }
        None => None,
    };

    let stdout_layer = fmt::layer()
        .with_timer(fmt::time::ChronoUtc::new(TIMESTAMP_FORMAT.to_string()))
        .with_level(true)
        .with_target(true)
        .with_ansi(cfg!(not(test)))
        .with_writer(stdout_writer);

    let file_layer = file_writer.map(|writer| {
        fmt::layer()
            .with_timer(fmt::time::ChronoUtc::new(TIMESTAMP_FORMAT.to_string()))
            .with_level(true)
            .with_file(true)
            .with_line_number(true)
            .with_target(true)
            .with_ansi(false)
            .with_writer(writer)
    });

    registry()
        .with(env_filter)
        .with(stdout_layer)
        .with(file_layer)
        .try_init()?;

    Ok(())
}

fn build_file_writer(directory: &Path) -> anyhow::Result<NonBlocking> {
    fs::create_dir_all(directory)?;

    let file_appender = tracing_appender::rolling::daily(directory, LOG_FILE_PREFIX);
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    LOG_GUARD
        .set(guard)
        .map_err(|_| anyhow::anyhow!("Tracing log guard already initialized"))?;

    Ok(non_blocking)
}
