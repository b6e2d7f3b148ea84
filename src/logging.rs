//! Logging System
//!
//! Structured logging built on `tracing`. Level, format, and destination
//! come from configuration with `KORA_LOG*` environment overrides.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use tracing_subscriber::fmt::time::ChronoUtc;
use tracing_subscriber::fmt::writer::BoxMakeWriter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter, Registry};

/// Logging configuration section.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Whether logging is enabled.
    pub enabled: bool,
    /// Log level: trace, debug, info, warn, error, off.
    pub level: String,
    /// Output format: text or json.
    pub format: String,
    /// Output destination: stdout, stderr, or file.
    pub output: String,
    /// Log file path when output is file; None means the platform default.
    pub file: Option<PathBuf>,
    /// Colored output (text format on stdout/stderr only).
    pub color: bool,
    /// Module-specific level overrides.
    pub modules: HashMap<String, String>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        LoggingConfig {
            enabled: true,
            level: "info".to_string(),
            format: "text".to_string(),
            output: "stderr".to_string(),
            file: None,
            color: true,
            modules: HashMap::new(),
        }
    }
}

/// Resolve the log file path: `KORA_LOG_FILE`, then config, then the
/// platform state directory.
pub fn resolve_log_file_path(config_file: Option<PathBuf>) -> Result<PathBuf> {
    if let Ok(env_path) = std::env::var("KORA_LOG_FILE") {
        if !env_path.is_empty() {
            return Ok(PathBuf::from(env_path));
        }
    }
    if let Some(path) = config_file {
        if !path.as_os_str().is_empty() {
            return Ok(path);
        }
    }
    let dirs = directories::ProjectDirs::from("", "kora", "kora")
        .ok_or_else(|| Error::Config("platform state directory unavailable".to_string()))?;
    let base = dirs
        .state_dir()
        .map(Path::to_path_buf)
        .unwrap_or_else(|| dirs.data_dir().to_path_buf());
    Ok(base.join("kora.log"))
}

/// Initialize the global subscriber from configuration.
///
/// Environment overrides win: `KORA_LOG` (filter), `KORA_LOG_FORMAT`,
/// `KORA_LOG_OUTPUT`, `KORA_LOG_FILE`.
pub fn init_logging(config: &LoggingConfig) -> Result<()> {
    if !config.enabled {
        Registry::default().with(EnvFilter::new("off")).init();
        return Ok(());
    }

    let filter = build_env_filter(config)?;
    let format = env_or(&config.format, "KORA_LOG_FORMAT");
    let output = env_or(&config.output, "KORA_LOG_OUTPUT");
    let (writer, is_file) = make_writer(&output, config.file.clone())?;

    let base = Registry::default().with(filter);
    match format.as_str() {
        "json" => base
            .with(
                fmt::layer()
                    .json()
                    .with_target(true)
                    .with_timer(ChronoUtc::rfc_3339())
                    .with_writer(writer),
            )
            .init(),
        "text" => base
            .with(
                fmt::layer()
                    .with_target(true)
                    .with_timer(ChronoUtc::rfc_3339())
                    .with_ansi(config.color && !is_file)
                    .with_writer(writer),
            )
            .init(),
        other => {
            return Err(Error::Config(format!(
                "invalid log format: {other} (must be 'text' or 'json')"
            )))
        }
    }
    Ok(())
}

fn env_or(config_value: &str, var: &str) -> String {
    std::env::var(var).unwrap_or_else(|_| config_value.to_string())
}

fn build_env_filter(config: &LoggingConfig) -> Result<EnvFilter> {
    if let Ok(filter) = EnvFilter::try_from_env("KORA_LOG") {
        return Ok(filter);
    }

    let mut filter = EnvFilter::new(&config.level);
    for (module, level) in &config.modules {
        let directive = format!("{module}={level}");
        filter = filter.add_directive(
            directive
                .parse()
                .map_err(|e| Error::Config(format!("invalid log directive '{directive}': {e}")))?,
        );
    }
    Ok(filter)
}

fn make_writer(output: &str, file: Option<PathBuf>) -> Result<(BoxMakeWriter, bool)> {
    match output {
        "stdout" => Ok((BoxMakeWriter::new(std::io::stdout), false)),
        "stderr" => Ok((BoxMakeWriter::new(std::io::stderr), false)),
        "file" => {
            let path = resolve_log_file_path(file)?;
            if let Some(parent) = path.parent() {
                std::fs::create_dir_all(parent)
                    .map_err(|e| Error::Config(format!("cannot create log directory: {e}")))?;
            }
            let handle = std::fs::OpenOptions::new()
                .create(true)
                .append(true)
                .open(&path)
                .map_err(|e| Error::Config(format!("cannot open log file {path:?}: {e}")))?;
            Ok((BoxMakeWriter::new(handle), true))
        }
        other => Err(Error::Config(format!(
            "invalid log output: {other} (must be 'stdout', 'stderr', or 'file')"
        ))),
    }
}
