//! File-backed [`CatalogStore`].
//!
//! The durable local cache is a single pretty-printed JSON file holding
//! the full collection in the same schema as the partitioned sources.
//! Every save overwrites the whole file; a missing file means the cache
//! was never written.

use std::io::ErrorKind;
use std::path::PathBuf;

use anyhow::{Context, Result};
use async_trait::async_trait;

use duty_guide_core::model::Duty;
use duty_guide_core::store::CatalogStore;

use crate::config::Config;

pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(config.cache.path.clone())
    }
}

#[async_trait]
impl CatalogStore for FileStore {
    async fn save(&self, duties: &[Duty]) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            tokio::fs::create_dir_all(parent)
                .await
                .with_context(|| format!("creating {}", parent.display()))?;
        }
        let json = serde_json::to_string_pretty(duties)?;
        tokio::fs::write(&self.path, json)
            .await
            .with_context(|| format!("writing cache {}", self.path.display()))?;
        Ok(())
    }

    async fn load(&self) -> Result<Option<Vec<Duty>>> {
        let content = match tokio::fs::read_to_string(&self.path).await {
            Ok(content) => content,
            Err(err) if err.kind() == ErrorKind::NotFound => return Ok(None),
            Err(err) => {
                return Err(err)
                    .with_context(|| format!("reading cache {}", self.path.display()))
            }
        };
        let duties: Vec<Duty> = serde_json::from_str(&content)
            .with_context(|| format!("parsing cache {}", self.path.display()))?;
        Ok(Some(duties))
    }

    async fn clear(&self) -> Result<()> {
        match tokio::fs::remove_file(&self.path).await {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(()),
            Err(err) => {
                Err(err).with_context(|| format!("removing cache {}", self.path.display()))
            }
        }
    }
}
