use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

use crate::exclude::ExcludeRule;

/// Report path used when neither `-o` nor `default_output` is given.
pub const DEFAULT_OUTPUT: &str = "output.txt";

/// Global configuration loaded from `~/.config/harsift/config.toml`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct HarsiftConfig {
    /// Report path used when `-o` is not passed. Relative paths resolve
    /// against the working directory.
    #[serde(default)]
    pub default_output: Option<PathBuf>,
    /// Persistent `NAME=VALUE` suppression rules, applied before any `-e`
    /// rules from the command line.
    #[serde(default)]
    pub exclude: Vec<ExcludeRule>,
}

impl HarsiftConfig {
    /// Report path after applying the `-o` flag and the config fallback.
    pub fn resolve_output(&self, flag: Option<PathBuf>) -> PathBuf {
        flag.or_else(|| self.default_output.clone())
            .unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT))
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("harsift")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<HarsiftConfig> {
    let path = config_path()?;
    if !path.exists() {
        let default_cfg = HarsiftConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, toml)?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    let data = fs::read_to_string(&path)?;
    let cfg: HarsiftConfig = toml::from_str(&data)?;
    Ok(cfg)
}
