//! Core logging bootstrap and safety policy.
//!
//! # Responsibility
//! - Initialize process logging exactly once.
//! - Emit stable, metadata-only diagnostic events from core.
//!
//! # Invariants
//! - Logging init is idempotent for the same configuration.
//! - Logging initialization must not panic.
//! - Re-initialization with a different configuration is rejected.

use flexi_logger::{Cleanup, Criterion, FileSpec, Logger, LoggerHandle, Naming, WriteMode};
use log::info;
use once_cell::sync::OnceCell;
use std::path::{Path, PathBuf};

const LOG_FILE_BASENAME: &str = "blogd";
const MAX_LOG_FILE_SIZE_BYTES: u64 = 10 * 1024 * 1024;
const MAX_LOG_FILES: usize = 5;

static LOGGING_STATE: OnceCell<LoggingState> = OnceCell::new();

struct LoggingState {
    level: &'static str,
    log_dir: Option<PathBuf>,
    _logger: LoggerHandle,
}

/// Initializes process logging with a level and an optional log directory.
///
/// With `Some(log_dir)`, logs go to size-rotated files under that directory;
/// with `None`, logs go to stderr (the server's default for local runs).
///
/// # Invariants
/// - Calling this function repeatedly with the same configuration is
///   idempotent.
/// - Calling it again with a different level or directory is rejected.
///
/// # Errors
/// - Returns an error when `level` is unsupported.
/// - Returns an error when `log_dir` is empty, non-absolute, or cannot be
///   created.
/// - Returns an error when logger backend setup fails.
pub fn init_logging(level: &str, log_dir: Option<&str>) -> Result<(), String> {
    let normalized_level = normalize_level(level)?;
    let normalized_dir = log_dir.map(normalize_log_dir).transpose()?;

    if let Some(state) = LOGGING_STATE.get() {
        return check_existing(state, normalized_level, normalized_dir.as_deref());
    }

    let init_dir = normalized_dir.clone();
    let state = LOGGING_STATE.get_or_try_init(|| -> Result<LoggingState, String> {
        let builder = Logger::try_with_str(normalized_level)
            .map_err(|err| format!("invalid log level `{normalized_level}`: {err}"))?;

        let builder = match &init_dir {
            Some(dir) => {
                std::fs::create_dir_all(dir).map_err(|err| {
                    format!("failed to create log directory `{}`: {err}", dir.display())
                })?;
                builder
                    .log_to_file(
                        FileSpec::default()
                            .directory(dir.as_path())
                            .basename(LOG_FILE_BASENAME),
                    )
                    .rotate(
                        Criterion::Size(MAX_LOG_FILE_SIZE_BYTES),
                        Naming::Numbers,
                        Cleanup::KeepLogFiles(MAX_LOG_FILES),
                    )
                    .write_mode(WriteMode::BufferAndFlush)
                    .append()
                    .format_for_files(flexi_logger::detailed_format)
            }
            None => builder.log_to_stderr(),
        };

        let logger = builder
            .start()
            .map_err(|err| format!("failed to start logger: {err}"))?;

        info!(
            "event=core_init module=core status=ok level={} sink={} version={}",
            normalized_level,
            init_dir
                .as_ref()
                .map_or("stderr".to_string(), |dir| dir.display().to_string()),
            env!("CARGO_PKG_VERSION")
        );

        Ok(LoggingState {
            level: normalized_level,
            log_dir: init_dir,
            _logger: logger,
        })
    })?;

    // A racing initializer may have won with a different configuration.
    check_existing(state, normalized_level, normalized_dir.as_deref())
}

fn check_existing(
    state: &LoggingState,
    level: &'static str,
    log_dir: Option<&Path>,
) -> Result<(), String> {
    if state.log_dir.as_deref() != log_dir {
        return Err(format!(
            "logging already initialized with sink `{}`; refusing to switch to `{}`",
            describe_sink(state.log_dir.as_deref()),
            describe_sink(log_dir)
        ));
    }
    if state.level != level {
        return Err(format!(
            "logging already initialized with level `{}`; refusing to switch to `{level}`",
            state.level
        ));
    }
    Ok(())
}

fn describe_sink(dir: Option<&Path>) -> String {
    dir.map_or("stderr".to_string(), |dir| dir.display().to_string())
}

/// Returns active logging status metadata.
///
/// Returns `None` when logging has not been initialized, otherwise the
/// active level and file sink (`None` for stderr).
pub fn logging_status() -> Option<(&'static str, Option<PathBuf>)> {
    LOGGING_STATE
        .get()
        .map(|state| (state.level, state.log_dir.clone()))
}

/// Returns the default log level for the current build mode.
///
/// - `debug` builds -> `debug`
/// - `release` builds -> `info`
pub fn default_log_level() -> &'static str {
    if cfg!(debug_assertions) {
        "debug"
    } else {
        "info"
    }
}

fn normalize_level(level: &str) -> Result<&'static str, String> {
    match level.trim().to_ascii_lowercase().as_str() {
        "trace" => Ok("trace"),
        "debug" => Ok("debug"),
        "info" => Ok("info"),
        "warn" | "warning" => Ok("warn"),
        "error" => Ok("error"),
        other => Err(format!(
            "unsupported log level `{other}`; expected trace|debug|info|warn|error"
        )),
    }
}

fn normalize_log_dir(log_dir: &str) -> Result<PathBuf, String> {
    let trimmed = log_dir.trim();
    if trimmed.is_empty() {
        return Err("log_dir cannot be empty".to_string());
    }
    let path = Path::new(trimmed);
    if !path.is_absolute() {
        return Err(format!("log_dir must be an absolute path, got `{trimmed}`"));
    }
    Ok(path.to_path_buf())
}
