use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

use crate::custom_options::{NoCustomOptions, PrefixedTransformOptions};
use crate::request_url::{OptionDefaults, UrlOptionParser};

/// Which custom transform options parser the configured parser uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CustomOptionsMode {
    /// `transform.<name>=<value>` query parameters.
    #[default]
    Prefixed,
    None,
}

/// Global configuration loaded from `~/.config/bundle-url/config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BundleUrlConfig {
    /// Platform names that may be inferred from the pathname (`index.ios.bundle`).
    pub platforms: Vec<String>,
    /// Optional boolean option defaults; missing keys use the built-in defaults.
    #[serde(default)]
    pub defaults: Option<OptionDefaults>,
    /// Custom transform options parser: "prefixed" (default) or "none".
    #[serde(default)]
    pub custom_options: Option<CustomOptionsMode>,
}

impl Default for BundleUrlConfig {
    fn default() -> Self {
        Self {
            platforms: ["ios", "android", "windows", "web"]
                .into_iter()
                .map(String::from)
                .collect(),
            defaults: None,
            custom_options: None,
        }
    }
}

impl BundleUrlConfig {
    pub fn platform_set(&self) -> HashSet<String> {
        self.platforms.iter().cloned().collect()
    }

    /// Builds the parser described by this config.
    pub fn parser(&self) -> UrlOptionParser {
        let parser = UrlOptionParser::new().with_defaults(self.defaults.unwrap_or_default());
        match self.custom_options.unwrap_or_default() {
            CustomOptionsMode::Prefixed => {
                parser.with_custom_options(PrefixedTransformOptions::default())
            }
            CustomOptionsMode::None => parser.with_custom_options(NoCustomOptions),
        }
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("bundle-url")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<BundleUrlConfig> {
    let path = config_path()?;
    if !path.exists() {
        let default_cfg = BundleUrlConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, toml)?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    load_from_path(&path)
}

pub fn load_from_path(path: &Path) -> Result<BundleUrlConfig> {
    let data = fs::read_to_string(path)?;
    let cfg: BundleUrlConfig = toml::from_str(&data)?;
    Ok(cfg)
}
