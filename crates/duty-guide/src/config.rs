use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};

use duty_guide_core::model::DutyType;
use duty_guide_core::search::DEFAULT_THRESHOLD;

#[derive(Debug, Deserialize, Clone, Default)]
pub struct Config {
    #[serde(default)]
    pub cache: CacheConfig,
    #[serde(default)]
    pub sources: SourcesConfig,
    #[serde(default)]
    pub search: SearchConfig,
    #[serde(default)]
    pub export: ExportConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct CacheConfig {
    /// File holding the cached collection. Overwritten in full on every
    /// mutation.
    #[serde(default = "default_cache_path")]
    pub path: PathBuf,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            path: default_cache_path(),
        }
    }
}

fn default_cache_path() -> PathBuf {
    PathBuf::from("./data/duties.cache.json")
}

/// One source per type partition. Each value is a local file path or an
/// `http(s)://` URL; an unset partition is simply skipped at load time.
#[derive(Debug, Deserialize, Clone, Default)]
pub struct SourcesConfig {
    #[serde(default)]
    pub dungeons: Option<String>,
    #[serde(default)]
    pub trials: Option<String>,
    #[serde(default)]
    pub raids: Option<String>,
}

impl SourcesConfig {
    pub fn for_type(&self, duty_type: DutyType) -> Option<&str> {
        match duty_type {
            DutyType::Dungeon => self.dungeons.as_deref(),
            DutyType::Trial => self.trials.as_deref(),
            DutyType::Raid => self.raids.as_deref(),
        }
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct SearchConfig {
    /// Minimum normalized similarity for a fuzzy match, in `[0.0, 1.0]`.
    #[serde(default = "default_threshold")]
    pub threshold: f64,
    /// Default result cap for `duty search`.
    #[serde(default = "default_search_limit")]
    pub limit: usize,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            threshold: default_threshold(),
            limit: default_search_limit(),
        }
    }
}

fn default_threshold() -> f64 {
    DEFAULT_THRESHOLD
}
fn default_search_limit() -> usize {
    12
}

#[derive(Debug, Deserialize, Clone)]
pub struct ExportConfig {
    /// Directory receiving the partitioned export artifacts.
    #[serde(default = "default_export_dir")]
    pub dir: PathBuf,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            dir: default_export_dir(),
        }
    }
}

fn default_export_dir() -> PathBuf {
    PathBuf::from("./export")
}

pub fn load_config(path: &Path) -> Result<Config> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {}", path.display()))?;

    let config: Config = toml::from_str(&content).with_context(|| "Failed to parse config file")?;

    if !(0.0..=1.0).contains(&config.search.threshold) {
        anyhow::bail!("search.threshold must be in [0.0, 1.0]");
    }

    if config.search.limit < 1 {
        anyhow::bail!("search.limit must be >= 1");
    }

    Ok(config)
}
