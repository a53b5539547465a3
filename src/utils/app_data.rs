use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const APP_NAME: &str = "shipsearch";
const CONFIG_FILE: &str = "config.json";

/// Application configuration stored in the app data directory
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppConfig {
    /// Catalog used when no `--catalog` is given
    #[serde(default)]
    pub catalog_path: Option<PathBuf>,

    /// Colored terminal output
    #[serde(default = "default_color")]
    pub color: bool,

    /// Maximum number of ships printed per search
    /// If 0, prints every match
    #[serde(default)]
    pub limit: usize,
}

fn default_color() -> bool {
    true
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            catalog_path: None,
            color: default_color(),
            limit: 0,
        }
    }
}

impl AppConfig {
    /// Load config from the app data directory, or return default if not found
    pub fn load() -> Result<Self> {
        Self::load_from(&get_config_path()?)
    }

    /// Load config from an explicit file, or return default if it does not exist
    pub fn load_from(config_path: &Path) -> Result<Self> {
        if config_path.exists() {
            let content = fs::read_to_string(config_path)
                .context("Failed to read config file")?;
            let config: AppConfig = serde_json::from_str(&content)
                .context("Failed to parse config file")?;
            Ok(config)
        } else {
            Ok(Self::default())
        }
    }

    /// Save config to the app data directory
    pub fn save(&self) -> Result<()> {
        self.save_to(&get_config_path()?)
    }

    pub fn save_to(&self, config_path: &Path) -> Result<()> {
        let content = serde_json::to_string_pretty(self)
            .context("Failed to serialize config")?;
        fs::write(config_path, content)
            .context("Failed to write config file")?;
        Ok(())
    }

    /// Pick the catalog: an explicit path wins over the configured one
    pub fn resolve_catalog(&self, explicit: Option<PathBuf>) -> Result<PathBuf> {
        explicit
            .or_else(|| self.catalog_path.clone())
            .context("No catalog given: pass --catalog or set catalog_path in config.json")
    }

    /// Get the effective print limit (an explicit value overrides the config; 0 = no limit)
    pub fn effective_limit(&self, explicit: Option<usize>) -> Option<usize> {
        match explicit.unwrap_or(self.limit) {
            0 => None,
            n => Some(n),
        }
    }
}

/// Get the path to the config file
pub fn get_config_path() -> Result<PathBuf> {
    let app_dir = get_app_data_dir()?;
    Ok(app_dir.join(CONFIG_FILE))
}

/// Get the application data directory
pub fn get_app_data_dir() -> Result<PathBuf> {
    let base = if cfg!(target_os = "macos") {
        dirs::home_dir()
            .map(|h| h.join("Library").join("Application Support"))
    } else if cfg!(target_os = "windows") {
        dirs::data_local_dir()
    } else {
        // Linux/Unix: use XDG_DATA_HOME or ~/.local/share
        dirs::data_dir()
    };

    let base = base.context("Could not determine app data directory")?;
    let app_dir = base.join(APP_NAME);

    fs::create_dir_all(&app_dir)?;
    Ok(app_dir)
}
