use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::model::config::AppConfig;

/// Config file name, looked up in the working directory.
pub const CONFIG_FILE: &str = "taskdeck.toml";

/// Error type for config loading.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("could not read {path}: {source}")]
    Read {
        path: PathBuf,
        source: io::Error,
    },
    #[error("could not parse taskdeck.toml: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Load taskdeck.toml from the given directory. A missing file yields the
/// defaults.
pub fn load_config(dir: &Path) -> Result<AppConfig, ConfigError> {
    let path = dir.join(CONFIG_FILE);
    if !path.exists() {
        return Ok(AppConfig::default());
    }
    let text = fs::read_to_string(&path).map_err(|e| ConfigError::Read {
        path: path.clone(),
        source: e,
    })?;
    Ok(toml::from_str(&text)?)
}

/// Load the config, reporting a malformed file to stderr and falling back
/// to the defaults. Configuration problems never abort the session.
pub fn load_or_default(dir: &Path) -> AppConfig {
    match load_config(dir) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("warning: {}", e);
            AppConfig::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_missing_config_is_default() {
        let tmp = TempDir::new().unwrap();
        let config = load_config(tmp.path()).unwrap();
        assert_eq!(config.data.file, "tasks.json");
        assert!(config.ui.colors.is_empty());
    }

    #[test]
    fn test_load_config() {
        let tmp = TempDir::new().unwrap();
        fs::write(
            tmp.path().join(CONFIG_FILE),
            r##"
[data]
file = "todo.json"

[ui.colors]
background = "#000000"
"##,
        )
        .unwrap();

        let config = load_config(tmp.path()).unwrap();
        assert_eq!(config.data.file, "todo.json");
        assert_eq!(
            config.ui.colors.get("background").map(String::as_str),
            Some("#000000")
        );
    }

    #[test]
    fn test_malformed_config_is_an_error() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join(CONFIG_FILE), "[data\nfile=").unwrap();
        assert!(load_config(tmp.path()).is_err());
    }
}
