//! Logging setup for the bridge host
//!
//! Structured tracing with configurable verbosity:
//! - Console output for development
//! - Daily-rolling log files for production, written off-thread

use std::path::PathBuf;

use thiserror::Error;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Logging system errors
#[derive(Debug, Error)]
pub enum LoggingError {
    #[error("Failed to initialize logging: {0}")]
    Initialization(String),

    #[error("Failed to create log directory: {0}")]
    DirectoryCreation(String),
}

/// Verbosity levels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogLevel {
    Trace,
    Debug,
    Info,
    Warn,
    Error,
}

impl LogLevel {
    fn as_str(&self) -> &'static str {
        match self {
            LogLevel::Trace => "trace",
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warn => "warn",
            LogLevel::Error => "error",
        }
    }
}

/// Where log lines go
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogOutput {
    Console,
    File { directory: PathBuf },
}

/// Logging configuration
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    pub level: LogLevel,
    pub output: LogOutput,
}

impl LoggingConfig {
    /// Console output at debug verbosity.
    pub fn development() -> Self {
        Self {
            level: LogLevel::Debug,
            output: LogOutput::Console,
        }
    }

    /// Rolling file output at info verbosity under the platform data
    /// directory.
    pub fn production() -> Self {
        let directory = dirs::data_local_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("map-bridge")
            .join("logs");
        Self {
            level: LogLevel::Info,
            output: LogOutput::File { directory },
        }
    }
}

/// Initialize the global subscriber.
///
/// `RUST_LOG` overrides the configured level when set. For file output the
/// returned guard must stay alive for the lifetime of the host so buffered
/// lines are flushed.
pub fn init(config: LoggingConfig) -> Result<Option<WorkerGuard>, LoggingError> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.level.as_str()));

    match config.output {
        LogOutput::Console => {
            tracing_subscriber::registry()
                .with(filter)
                .with(fmt::layer())
                .try_init()
                .map_err(|e| LoggingError::Initialization(e.to_string()))?;
            Ok(None)
        }
        LogOutput::File { directory } => {
            std::fs::create_dir_all(&directory).map_err(|e| {
                LoggingError::DirectoryCreation(format!("{}: {}", directory.display(), e))
            })?;
            let (writer, guard) =
                tracing_appender::non_blocking(rolling::daily(&directory, "map-bridge.log"));
            tracing_subscriber::registry()
                .with(filter)
                .with(fmt::layer().with_writer(writer).with_ansi(false))
                .try_init()
                .map_err(|e| LoggingError::Initialization(e.to_string()))?;
            Ok(Some(guard))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_development_profile() {
        let config = LoggingConfig::development();
        assert_eq!(config.level, LogLevel::Debug);
        assert_eq!(config.output, LogOutput::Console);
    }

    #[test]
    fn test_production_profile_uses_file_output() {
        let config = LoggingConfig::production();
        assert_eq!(config.level, LogLevel::Info);
        assert!(matches!(config.output, LogOutput::File { .. }));
    }

    #[test]
    fn test_level_strings() {
        assert_eq!(LogLevel::Trace.as_str(), "trace");
        assert_eq!(LogLevel::Error.as_str(), "error");
    }
}
