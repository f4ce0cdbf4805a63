//! Telemetry: file-backed `tracing` setup.
//!
//! The terminal belongs to the UI, so logs never go to stdout. Events are
//! written through a non-blocking file appender; the returned guard flushes
//! pending lines when dropped.

use std::path::PathBuf;

use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::{InitError, RollingFileAppender, Rotation};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter};

use crate::config::LoggingConfig;

/// Environment variable holding an `EnvFilter` directive.
pub const LOG_ENV: &str = "MENUBOARD_LOG";

/// Keeps the background log writer alive.
#[must_use = "dropping the guard stops log output"]
pub struct TelemetryGuard {
    _guard: Option<WorkerGuard>,
}

impl TelemetryGuard {
    /// A guard for when logging is disabled.
    pub const fn disabled() -> Self {
        Self { _guard: None }
    }
}

/// Install the global subscriber.
///
/// `verbosity` is the count of `-v` flags; it overrides the configured filter
/// but not `MENUBOARD_LOG`.
pub fn init(config: &LoggingConfig, verbosity: u8) -> Result<TelemetryGuard, InitError> {
    if !config.enabled {
        return Ok(TelemetryGuard::disabled());
    }

    let dir = config.dir.clone().unwrap_or_else(|| PathBuf::from("."));
    let appender = RollingFileAppender::builder()
        .rotation(Rotation::NEVER)
        .filename_prefix(&config.file_name)
        .build(&dir)?;
    let (writer, guard) = tracing_appender::non_blocking(appender);

    let filter = EnvFilter::try_from_env(LOG_ENV)
        .unwrap_or_else(|_| EnvFilter::new(default_directive(config, verbosity)));

    let layer = fmt::layer()
        .with_writer(writer)
        .with_ansi(false)
        .with_target(true);

    // A subscriber may already be installed (tests, embedding); keep it.
    let _ = tracing_subscriber::registry().with(filter).with(layer).try_init();

    tracing::info!(dir = %dir.display(), file = %config.file_name, "logging started");
    Ok(TelemetryGuard {
        _guard: Some(guard),
    })
}

fn default_directive(config: &LoggingConfig, verbosity: u8) -> String {
    match verbosity {
        0 => config.filter.clone().unwrap_or_else(|| "info".to_string()),
        1 => "debug".to_string(),
        _ => "trace".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_directive() {
        let mut config = LoggingConfig::default();
        assert_eq!(default_directive(&config, 0), "info");

        config.filter = Some("menuboard=warn".into());
        assert_eq!(default_directive(&config, 0), "menuboard=warn");
        assert_eq!(default_directive(&config, 1), "debug");
        assert_eq!(default_directive(&config, 4), "trace");
    }

    #[test]
    fn test_disabled_skips_setup() {
        let config = LoggingConfig {
            enabled: false,
            dir: Some(PathBuf::from("/nonexistent/never-created")),
            ..LoggingConfig::default()
        };
        assert!(init(&config, 0).is_ok());
        assert!(!PathBuf::from("/nonexistent/never-created").exists());
    }
}
