use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Configuration from taskdeck.toml. Every section is optional; defaults
/// apply when the file is absent.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub data: DataConfig,
    #[serde(default)]
    pub ui: UiConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DataConfig {
    /// Data file path, relative to the working directory.
    #[serde(default = "default_data_file")]
    pub file: String,
}

impl Default for DataConfig {
    fn default() -> Self {
        DataConfig {
            file: default_data_file(),
        }
    }
}

fn default_data_file() -> String {
    "tasks.json".to_string()
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UiConfig {
    /// Hex color overrides from [ui.colors], e.g. `background = "#101418"`.
    #[serde(default)]
    pub colors: HashMap<String, String>,
}
