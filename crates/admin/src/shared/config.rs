use contracts::shared::bulk::BulkMode;
use serde::Deserialize;
use std::path::Path;

use super::error::AdminError;

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct AdminConfig {
    #[serde(default)]
    pub list: ListConfig,
    #[serde(default)]
    pub export: ExportConfig,
    #[serde(default)]
    pub bulk: BulkConfig,
    #[serde(default)]
    pub sidebar: SidebarConfig,
    #[serde(default)]
    pub booking: BookingConfig,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct ListConfig {
    /// Minimum trimmed query length before free-text search kicks in
    #[serde(default)]
    pub min_search_len: usize,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct ExportConfig {
    /// Prepend a UTF-8 BOM so spreadsheet apps detect the encoding
    #[serde(default)]
    pub include_bom: bool,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct BulkConfig {
    #[serde(default)]
    pub mode: BulkMode,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct SidebarConfig {
    #[serde(default = "default_sidebar_key")]
    pub storage_key: String,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct BookingConfig {
    /// Child price as a share of the adult price when no child tariff exists
    #[serde(default = "default_child_ratio")]
    pub child_price_ratio: f64,
    #[serde(default = "default_adults")]
    pub default_adults: u32,
    #[serde(default)]
    pub default_children: u32,
}

fn default_sidebar_key() -> String {
    "admin:sidebar-collapsed".to_string()
}

fn default_child_ratio() -> f64 {
    0.8
}

fn default_adults() -> u32 {
    2
}

impl Default for ListConfig {
    fn default() -> Self {
        Self { min_search_len: 0 }
    }
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self { include_bom: false }
    }
}

impl Default for BulkConfig {
    fn default() -> Self {
        Self {
            mode: BulkMode::BestEffort,
        }
    }
}

impl Default for SidebarConfig {
    fn default() -> Self {
        Self {
            storage_key: default_sidebar_key(),
        }
    }
}

impl Default for BookingConfig {
    fn default() -> Self {
        Self {
            child_price_ratio: default_child_ratio(),
            default_adults: default_adults(),
            default_children: 0,
        }
    }
}

impl Default for AdminConfig {
    fn default() -> Self {
        Self {
            list: ListConfig::default(),
            export: ExportConfig::default(),
            bulk: BulkConfig::default(),
            sidebar: SidebarConfig::default(),
            booking: BookingConfig::default(),
        }
    }
}

/// Default configuration embedded in the binary
const DEFAULT_CONFIG: &str = r#"
[list]
min_search_len = 0

[export]
include_bom = false

[bulk]
mode = "best_effort"

[sidebar]
storage_key = "admin:sidebar-collapsed"

[booking]
child_price_ratio = 0.8
default_adults = 2
default_children = 0
"#;

impl AdminConfig {
    pub fn from_toml_str(contents: &str) -> Result<Self, AdminError> {
        Ok(toml::from_str(contents)?)
    }

    pub fn embedded() -> Result<Self, AdminError> {
        Self::from_toml_str(DEFAULT_CONFIG)
    }
}

/// Load configuration from a `admin.toml` file
///
/// Search order:
/// 1. The explicit path, if given
/// 2. `admin.toml` next to the executable
/// 3. Falls back to embedded default config
pub fn load_config(path: Option<&Path>) -> anyhow::Result<AdminConfig> {
    if let Some(path) = path {
        tracing::info!("Loading admin config from: {}", path.display());
        let contents = std::fs::read_to_string(path)?;
        return Ok(AdminConfig::from_toml_str(&contents)?);
    }

    if let Ok(exe_path) = std::env::current_exe() {
        if let Some(exe_dir) = exe_path.parent() {
            let config_path = exe_dir.join("admin.toml");

            if config_path.exists() {
                tracing::info!("Loading admin config from: {}", config_path.display());
                let contents = std::fs::read_to_string(&config_path)?;
                return Ok(AdminConfig::from_toml_str(&contents)?);
            } else {
                tracing::debug!("admin.toml not found at: {}", config_path.display());
            }
        }
    }

    tracing::info!("Using default embedded admin configuration");
    Ok(AdminConfig::embedded()?)
}
