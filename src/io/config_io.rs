use std::fs;
use std::path::{Path, PathBuf};

use tracing::warn;

use crate::model::config::AppConfig;

/// Error type for config loading
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("could not read {path}: {source}")]
    ReadError {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("could not parse {path}: {source}")]
    ParseError {
        path: PathBuf,
        source: toml::de::Error,
    },
}

/// Candidate config paths, nearest first: ./nippo.toml, then
/// $HOME/.config/nippo/config.toml.
fn candidate_paths() -> Vec<PathBuf> {
    let mut paths = vec![PathBuf::from("nippo.toml")];
    if let Some(home) = std::env::var_os("HOME") {
        paths.push(
            PathBuf::from(home)
                .join(".config")
                .join("nippo")
                .join("config.toml"),
        );
    }
    paths
}

/// Parse a config file.
pub fn read_config(path: &Path) -> Result<AppConfig, ConfigError> {
    let text = fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
        path: path.to_path_buf(),
        source: e,
    })?;
    toml::from_str(&text).map_err(|e| ConfigError::ParseError {
        path: path.to_path_buf(),
        source: e,
    })
}

/// Load the first config file found, or defaults when none exists. A config
/// that exists but fails to parse is skipped with a warning rather than
/// aborting the app.
pub fn load_config() -> AppConfig {
    for path in candidate_paths() {
        if !path.is_file() {
            continue;
        }
        match read_config(&path) {
            Ok(config) => return config,
            Err(e) => warn!(error = %e, "ignoring unreadable config"),
        }
    }
    AppConfig::default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_config_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nippo.toml");
        fs::write(
            &path,
            r##"[ui.colors]
highlight = "#FB4196"

[[catalog]]
name = "在庫整理"
category = "業務管理"
"##,
        )
        .unwrap();
        let config = read_config(&path).unwrap();
        assert_eq!(config.ui.colors["highlight"], "#FB4196");
        assert_eq!(config.catalog.len(), 1);
    }

    #[test]
    fn test_read_config_bad_toml() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nippo.toml");
        fs::write(&path, "not toml [").unwrap();
        assert!(matches!(
            read_config(&path),
            Err(ConfigError::ParseError { .. })
        ));
    }
}
