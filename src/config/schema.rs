use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

/// Top-level configuration. Every table and key is optional.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// `[data]` table.
    pub data: DataConfig,
    /// `[ui]` table.
    pub ui: UiConfig,
    /// `[logging]` table.
    pub logging: LoggingConfig,
}

/// Where the dataset comes from.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DataConfig {
    /// Dataset file. The embedded dataset is used when unset.
    pub path: Option<PathBuf>,
}

/// Terminal and display settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    /// Prefix joined onto each dish's image path.
    pub image_base_url: String,
    /// Draw on the alternate screen, restoring the shell on exit.
    pub alternate_screen: bool,
    /// How long the input thread waits before rechecking for shutdown.
    pub input_poll_ms: u64,
}

impl UiConfig {
    /// `input_poll_ms` as a [`Duration`].
    pub const fn input_poll_timeout(&self) -> Duration {
        Duration::from_millis(self.input_poll_ms)
    }
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            image_base_url: "http://localhost:3001/".to_string(),
            alternate_screen: true,
            input_poll_ms: 10,
        }
    }
}

/// File logging settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Write a log file at all.
    pub enabled: bool,
    /// `EnvFilter` directive, e.g. `"info"` or `"menuboard=debug"`.
    pub filter: Option<String>,
    /// Directory for the log file. Defaults to the working directory.
    pub dir: Option<PathBuf>,
    /// Log file name inside `dir`.
    pub file_name: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            filter: None,
            dir: None,
            file_name: "menuboard.log".to_string(),
        }
    }
}
