use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

/// Transport parameters (optional [fetch] section in config.toml).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FetchConfig {
    /// Maximum attempts per request (including the first).
    pub max_attempts: u32,
    /// Fixed delay between attempts, in seconds.
    pub delay_secs: u64,
    /// Wall-clock limit for one whole transfer attempt, in seconds.
    pub timeout_secs: u64,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            max_attempts: 3,
            delay_secs: 5,
            timeout_secs: 60,
        }
    }
}

/// Global configuration loaded from `~/.config/stagefetch/config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StageFetchConfig {
    /// Mirror releases root; the listing lives at
    /// `<mirror_base_url>/<arch>/autobuilds/latest-stage3.txt`.
    pub mirror_base_url: String,
    /// Destination directory for downloaded artifacts (default: the
    /// invocation's working directory).
    #[serde(default)]
    pub download_dir: Option<PathBuf>,
    /// Optional transport overrides; built-in defaults otherwise.
    #[serde(default)]
    pub fetch: Option<FetchConfig>,
}

impl Default for StageFetchConfig {
    fn default() -> Self {
        Self {
            mirror_base_url: "https://distfiles.gentoo.org/releases".to_string(),
            download_dir: None,
            fetch: None,
        }
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("stagefetch")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<StageFetchConfig> {
    let path = config_path()?;
    if !path.exists() {
        let default_cfg = StageFetchConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, toml)?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    let data = fs::read_to_string(&path)?;
    let cfg: StageFetchConfig = toml::from_str(&data)?;
    url::Url::parse(&cfg.mirror_base_url)
        .with_context(|| format!("invalid mirror_base_url {:?} in config", cfg.mirror_base_url))?;
    Ok(cfg)
}
