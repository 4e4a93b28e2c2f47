//! `tracing` subscriber setup for hosts embedding the plugin.

use std::path::PathBuf;
use tracing::info;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use emptyarray_core::{defaults, Error, Result};

/// Output format of log lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    #[default]
    Text,
    Json,
}

/// Logging options. Passed in by the host; nothing is read from the
/// environment.
#[derive(Debug, Clone)]
pub struct LogConfig {
    /// `EnvFilter` directive, e.g. `emptyarray_sync=debug`.
    pub filter: String,
    pub format: LogFormat,
    /// Force ANSI colors on or off. Auto-detected on the console when unset,
    /// always off for files.
    pub ansi: Option<bool>,
    /// Write to this file (rotated daily) instead of stdout.
    pub file: Option<PathBuf>,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            filter: defaults::LOG_FILTER.to_string(),
            format: LogFormat::default(),
            ansi: None,
            file: None,
        }
    }
}

/// Install the global subscriber.
///
/// Returns the file writer's guard when file logging is enabled; keep it
/// alive for as long as logs should be flushed. Fails if a global
/// subscriber is already installed.
pub fn init_logging(config: &LogConfig) -> Result<Option<WorkerGuard>> {
    let env_filter = EnvFilter::try_new(&config.filter)
        .map_err(|e| Error::Config(format!("Invalid log filter {:?}: {}", config.filter, e)))?;

    let registry = tracing_subscriber::registry().with(env_filter);

    let guard = if let Some(ref path) = config.file {
        let file_dir = path
            .parent()
            .filter(|p| !p.as_os_str().is_empty())
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from("."));
        let file_name = path
            .file_name()
            .and_then(|f| f.to_str())
            .unwrap_or(defaults::LOG_FILE_NAME)
            .to_string();
        let file_appender = tracing_appender::rolling::daily(file_dir, file_name);
        let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

        let result = match config.format {
            LogFormat::Json => registry
                .with(
                    tracing_subscriber::fmt::layer()
                        .json()
                        .with_writer(non_blocking),
                )
                .try_init(),
            LogFormat::Text => registry
                .with(
                    tracing_subscriber::fmt::layer()
                        .with_writer(non_blocking)
                        .with_ansi(config.ansi.unwrap_or(false)),
                )
                .try_init(),
        };
        result.map_err(|e| Error::Config(format!("Failed to install logger: {}", e)))?;
        Some(guard)
    } else {
        let result = match config.format {
            LogFormat::Json => registry
                .with(tracing_subscriber::fmt::layer().json())
                .try_init(),
            LogFormat::Text => {
                let mut layer = tracing_subscriber::fmt::layer();
                if let Some(ansi) = config.ansi {
                    layer = layer.with_ansi(ansi);
                }
                registry.with(layer).try_init()
            }
        };
        result.map_err(|e| Error::Config(format!("Failed to install logger: {}", e)))?;
        None
    };

    info!(
        log_format = ?config.format,
        log_file = %config
            .file
            .as_ref()
            .map(|p| p.display().to_string())
            .unwrap_or_else(|| "(stdout)".to_string()),
        "Logging initialized"
    );

    Ok(guard)
}
