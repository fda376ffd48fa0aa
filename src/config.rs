use serde::Deserialize;
use std::fs;
use std::path::PathBuf;

use tracing::{debug, warn};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub(crate) enum ConfigColorMode {
    Auto,
    Always,
    Never,
}

/// Settings read from `config.toml`. Sort and filter state is deliberately absent:
/// every run starts from the dataset's load order.
#[derive(Debug, Default, Deserialize)]
pub(crate) struct Config {
    #[serde(default)]
    pub(crate) data: Option<PathBuf>,
    #[serde(default)]
    pub(crate) icon_base: Option<String>,
    #[serde(default)]
    pub(crate) color: Option<ConfigColorMode>,
    #[serde(default)]
    pub(crate) no_color: bool,
    #[serde(default)]
    pub(crate) show_icons: bool,
    #[serde(default)]
    pub(crate) locale: Option<String>,
    #[serde(default)]
    pub(crate) scraped_on: Option<String>,
    #[serde(default)]
    pub(crate) region_note: Option<String>,
}

impl Config {
    pub(crate) fn load() -> Self {
        // Try config locations in order of priority
        for path in Self::get_config_paths() {
            if !path.exists() {
                continue;
            }
            let content = match fs::read_to_string(&path) {
                Ok(content) => content,
                Err(e) => {
                    warn!("Failed to read {}: {}", path.display(), e);
                    continue;
                }
            };
            match Self::parse(&content) {
                Ok(config) => {
                    debug!("Loaded config from {}", path.display());
                    return config;
                }
                Err(e) => warn!("Failed to parse {}: {}", path.display(), e),
            }
        }

        Self::default()
    }

    fn parse(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    fn get_config_paths() -> Vec<PathBuf> {
        let mut paths = Vec::new();

        // 1. XDG config: ~/.config/pricetab/config.toml (Linux/cross-platform)
        if let Some(home) = dirs::home_dir() {
            paths.push(home.join(".config").join("pricetab").join("config.toml"));
        }

        // 2. Platform config dir, e.g. ~/Library/Application Support/pricetab/config.toml
        if let Some(config_dir) = dirs::config_dir() {
            let platform_path = config_dir.join("pricetab").join("config.toml");
            if !paths.contains(&platform_path) {
                paths.push(platform_path);
            }
        }

        // 3. Home directory: ~/.pricetab.toml
        if let Some(home) = dirs::home_dir() {
            paths.push(home.join(".pricetab.toml"));
        }

        paths
    }
}
