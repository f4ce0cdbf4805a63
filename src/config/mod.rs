//! Configuration: TOML file, environment overrides, defaults.
//!
//! Precedence, lowest first: built-in defaults, the config file, environment
//! variables, then command-line flags (applied by the binary).

mod load;
mod schema;

pub use load::{apply_env_overrides, default_config_path, load, load_from, ConfigError};
pub use schema::{Config, DataConfig, LoggingConfig, UiConfig};
