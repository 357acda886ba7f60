use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Configuration from nippo.toml (all sections optional).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub ui: UiConfig,
    /// Extra catalog entries appended after the built-ins
    #[serde(default)]
    pub catalog: Vec<CatalogExtraConfig>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UiConfig {
    /// Theme color overrides, hex strings keyed by slot name (e.g. background = "#0C001B")
    #[serde(default)]
    pub colors: HashMap<String, String>,
    /// Per-category accent colors, hex strings keyed by category name
    #[serde(default)]
    pub category_colors: HashMap<String, String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogExtraConfig {
    pub name: String,
    pub category: String,
}
