use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;
use tracing::debug;

/// Top-level `selene.toml`.
#[derive(Debug, Default, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct SeleneConfig {
    #[serde(default)]
    pub store: StoreConfig,

    #[serde(default)]
    pub locale: LocaleConfig,
}

#[derive(Debug, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct StoreConfig {
    /// JSON file holding preferences and entitlement.
    #[serde(default = "default_store_path")]
    pub path: PathBuf,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            path: default_store_path(),
        }
    }
}

fn default_store_path() -> PathBuf {
    PathBuf::from("selene-store.json")
}

#[derive(Debug, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct LocaleConfig {
    /// Device locale tag used for first-run language detection.
    #[serde(default = "default_device_locale")]
    pub device: String,
}

impl Default for LocaleConfig {
    fn default() -> Self {
        Self {
            device: default_device_locale(),
        }
    }
}

fn default_device_locale() -> String {
    std::env::var("LANG").unwrap_or_else(|_| "en-US".to_string())
}

impl SeleneConfig {
    /// Read `path`, or defaults when it does not exist.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }
        let toml_str = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config file: {}", path.display()))?;
        toml::from_str(&toml_str)
            .with_context(|| format!("failed to parse TOML config: {}", path.display()))
    }
}
