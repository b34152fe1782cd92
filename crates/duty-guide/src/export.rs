//! Partitioned export of the collection.
//!
//! Groups the cached collection by `type` and writes one pretty-printed
//! JSON artifact per partition, named after the partition
//! (`dungeons.json`, `trials.json`, `raids.json`) — the same format the
//! loader consumes, so an export can be dropped back in as sources.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use duty_guide_core::model::{Duty, DutyType};
use duty_guide_core::store::CatalogStore;

use crate::config::Config;
use crate::loader;

/// Write one artifact per type partition into `dir`. Returns the paths
/// written. Empty partitions are written as empty arrays so the artifact
/// set is always complete.
pub async fn export_partitioned(duties: &[Duty], dir: &Path) -> Result<Vec<PathBuf>> {
    tokio::fs::create_dir_all(dir)
        .await
        .with_context(|| format!("creating {}", dir.display()))?;

    let mut written = Vec::new();
    for duty_type in DutyType::ALL {
        let partition: Vec<&Duty> = duties
            .iter()
            .filter(|d| d.duty_type == duty_type)
            .collect();
        let json = serde_json::to_string_pretty(&partition)?;
        let path = dir.join(format!("{}.json", duty_type.partition_name()));
        tokio::fs::write(&path, json)
            .await
            .with_context(|| format!("writing {}", path.display()))?;
        written.push(path);
    }
    Ok(written)
}

/// CLI entry point — exports the current collection (cache-first) and
/// reports what was written.
pub async fn run_export<S: CatalogStore>(
    config: &Config,
    store: &S,
    out: Option<&Path>,
) -> Result<()> {
    let duties = loader::load_catalog(config, store).await?;
    let dir = out.unwrap_or(&config.export.dir);
    let written = export_partitioned(&duties, dir).await?;
    eprintln!(
        "Exported {} duties into {} artifacts under {}",
        duties.len(),
        written.len(),
        dir.display()
    );
    Ok(())
}
