use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;

use super::Config;

const DEFAULT_FILE: &str = "menuboard.toml";

/// Errors raised while loading a config file.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The file could not be read.
    #[error("failed to read {}: {source}", path.display())]
    Read {
        /// File that was read.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },
    /// The file is not valid TOML for [`Config`].
    #[error("failed to parse {}: {source}", path.display())]
    Parse {
        /// File that was parsed.
        path: PathBuf,
        /// Underlying TOML error.
        #[source]
        source: toml::de::Error,
    },
}

/// `menuboard.toml` in the working directory.
pub fn default_config_path() -> PathBuf {
    PathBuf::from(DEFAULT_FILE)
}

/// Load configuration.
///
/// An explicit path must exist. Without one, `./menuboard.toml` is used when
/// present and defaults otherwise.
pub fn load(explicit: Option<&Path>) -> Result<Config, ConfigError> {
    let mut config = match explicit {
        Some(path) => load_from(path)?,
        None => {
            let path = default_config_path();
            if path.exists() {
                load_from(&path)?
            } else {
                Config::default()
            }
        }
    };
    apply_env_overrides(&mut config, |key| std::env::var(key).ok());
    Ok(config)
}

/// Read and parse one config file, without environment overrides.
pub fn load_from(path: &Path) -> Result<Config, ConfigError> {
    let contents = fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    toml::from_str(&contents).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

/// Apply `MENUBOARD_*` overrides. `lookup` resolves variable names so tests
/// need not touch the process environment.
pub fn apply_env_overrides(config: &mut Config, lookup: impl Fn(&str) -> Option<String>) {
    if let Some(path) = lookup("MENUBOARD_DATA").filter(|v| !v.is_empty()) {
        config.data.path = Some(PathBuf::from(path));
    }
    if let Some(url) = lookup("MENUBOARD_IMAGE_BASE_URL") {
        config.ui.image_base_url = url;
    }
    if let Some(dir) = lookup("MENUBOARD_LOG_DIR").filter(|v| !v.is_empty()) {
        config.logging.dir = Some(PathBuf::from(dir));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_partial_file_keeps_defaults() {
        let config: Config = toml::from_str(
            r#"
            [ui]
            image_base_url = "https://cdn.example/"
            "#,
        )
        .unwrap();
        assert_eq!(config.ui.image_base_url, "https://cdn.example/");
        assert!(config.ui.alternate_screen);
        assert_eq!(config.ui.input_poll_ms, 10);
        assert!(config.logging.enabled);
        assert!(config.data.path.is_none());
    }

    #[test]
    fn test_env_overrides() {
        let env: HashMap<&str, &str> = [
            ("MENUBOARD_DATA", "/srv/menu.json"),
            ("MENUBOARD_IMAGE_BASE_URL", "http://img/"),
        ]
        .into_iter()
        .collect();

        let mut config = Config::default();
        apply_env_overrides(&mut config, |k| env.get(k).map(ToString::to_string));

        assert_eq!(config.data.path, Some(PathBuf::from("/srv/menu.json")));
        assert_eq!(config.ui.image_base_url, "http://img/");
        assert!(config.logging.dir.is_none());
    }

    #[test]
    fn test_missing_explicit_file_errors() {
        let err = load(Some(Path::new("/nonexistent/menuboard.toml"))).unwrap_err();
        assert!(matches!(err, ConfigError::Read { .. }));
    }

    #[test]
    fn test_parse_error_names_file() {
        let dir = std::env::temp_dir().join(format!("menuboard-cfg-{}", std::process::id()));
        fs::create_dir_all(&dir).unwrap();
        let path = dir.join("broken.toml");
        fs::write(&path, "[ui\nimage_base_url = 3").unwrap();

        let err = load_from(&path).unwrap_err();
        assert!(err.to_string().contains("broken.toml"));
        let _ = fs::remove_dir_all(&dir);
    }
}
