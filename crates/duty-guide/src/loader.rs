//! Partitioned source loading.
//!
//! Each type partition has one source (a local JSON file or an HTTP URL)
//! holding an array of duty records. A partition that cannot be retrieved
//! or does not parse as an array is logged and treated as empty rather
//! than aborting the load; there is no retry until the next triggering
//! command.

use anyhow::{bail, Context, Result};

use duty_guide_core::indexer::sort_by_id;
use duty_guide_core::model::{Duty, DutyType};
use duty_guide_core::store::CatalogStore;

use crate::config::Config;

/// Retrieve and parse one partition source.
pub async fn fetch_partition(source: &str) -> Result<Vec<Duty>> {
    let body = if source.starts_with("http://") || source.starts_with("https://") {
        reqwest::get(source)
            .await
            .with_context(|| format!("fetching {}", source))?
            .error_for_status()
            .with_context(|| format!("fetching {}", source))?
            .text()
            .await
            .with_context(|| format!("reading body of {}", source))?
    } else {
        tokio::fs::read_to_string(source)
            .await
            .with_context(|| format!("reading {}", source))?
    };

    let value: serde_json::Value =
        serde_json::from_str(&body).with_context(|| format!("parsing {}", source))?;
    if !value.is_array() {
        bail!("source {} is not a JSON array", source);
    }
    let duties: Vec<Duty> =
        serde_json::from_value(value).with_context(|| format!("decoding records from {}", source))?;
    Ok(duties)
}

/// Fetch every configured partition and concatenate the results, sorted
/// by ascending id. Failed partitions are skipped with a warning.
pub async fn load_from_sources(config: &Config) -> Result<Vec<Duty>> {
    let mut duties = Vec::new();
    for duty_type in DutyType::ALL {
        let Some(source) = config.sources.for_type(duty_type) else {
            continue;
        };
        match fetch_partition(source).await {
            Ok(mut partition) => duties.append(&mut partition),
            Err(err) => eprintln!(
                "warning: {} source unavailable, treating partition as empty: {:#}",
                duty_type.partition_name(),
                err
            ),
        }
    }
    sort_by_id(&mut duties);
    Ok(duties)
}

/// Cache-first load: prefer the previously saved collection so
/// in-progress edits survive across invocations; otherwise load the
/// partitioned sources and prime the cache with the result.
pub async fn load_catalog<S: CatalogStore>(config: &Config, store: &S) -> Result<Vec<Duty>> {
    if let Some(mut duties) = store.load().await? {
        sort_by_id(&mut duties);
        return Ok(duties);
    }
    let duties = load_from_sources(config).await?;
    store.save(&duties).await?;
    Ok(duties)
}

/// Discard whatever the cache holds by reloading the original sources
/// and overwriting the cache with that result.
pub async fn reset_from_sources<S: CatalogStore>(config: &Config, store: &S) -> Result<Vec<Duty>> {
    let duties = load_from_sources(config).await?;
    store.save(&duties).await?;
    Ok(duties)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SourcesConfig;
    use duty_guide_core::store::memory::InMemoryStore;
    use std::fs;

    fn source_file(dir: &tempfile::TempDir, name: &str, content: &str) -> String {
        let path = dir.path().join(name);
        fs::write(&path, content).unwrap();
        path.to_string_lossy().to_string()
    }

    fn config_with_sources(sources: SourcesConfig) -> Config {
        Config {
            sources,
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn test_fetch_partition_parses_records() {
        let tmp = tempfile::TempDir::new().unwrap();
        let source = source_file(
            &tmp,
            "dungeons.json",
            r#"[{"id": 1, "slug": "sastasha", "title": "Sastasha", "type": "Dungeon"}]"#,
        );
        let duties = fetch_partition(&source).await.unwrap();
        assert_eq!(duties.len(), 1);
        assert_eq!(duties[0].slug, "sastasha");
    }

    #[tokio::test]
    async fn test_fetch_partition_rejects_non_array() {
        let tmp = tempfile::TempDir::new().unwrap();
        let source = source_file(&tmp, "bad.json", r#"{"not": "an array"}"#);
        assert!(fetch_partition(&source).await.is_err());
    }

    #[tokio::test]
    async fn test_failed_partition_is_treated_as_empty() {
        let tmp = tempfile::TempDir::new().unwrap();
        let dungeons = source_file(
            &tmp,
            "dungeons.json",
            r#"[{"id": 1, "slug": "sastasha", "title": "Sastasha", "type": "Dungeon"}]"#,
        );
        let config = config_with_sources(SourcesConfig {
            dungeons: Some(dungeons),
            trials: Some(tmp.path().join("missing.json").to_string_lossy().to_string()),
            raids: None,
        });
        let duties = load_from_sources(&config).await.unwrap();
        assert_eq!(duties.len(), 1);
    }

    #[tokio::test]
    async fn test_load_concatenates_and_sorts_by_id() {
        let tmp = tempfile::TempDir::new().unwrap();
        let dungeons = source_file(
            &tmp,
            "dungeons.json",
            r#"[{"id": 2, "slug": "b", "title": "B", "type": "Dungeon"},
                {"id": 1, "slug": "a", "title": "A", "type": "Dungeon"}]"#,
        );
        let trials = source_file(
            &tmp,
            "trials.json",
            r#"[{"id": 1, "slug": "t", "title": "T", "type": "Trial"}]"#,
        );
        let config = config_with_sources(SourcesConfig {
            dungeons: Some(dungeons),
            trials: Some(trials),
            raids: None,
        });
        let duties = load_from_sources(&config).await.unwrap();
        let ids: Vec<u32> = duties.iter().map(|d| d.id).collect();
        assert_eq!(ids, vec![1, 1, 2]);
    }

    #[tokio::test]
    async fn test_load_catalog_prefers_cache() {
        let tmp = tempfile::TempDir::new().unwrap();
        let dungeons = source_file(
            &tmp,
            "dungeons.json",
            r#"[{"id": 1, "slug": "sastasha", "title": "Sastasha", "type": "Dungeon"}]"#,
        );
        let config = config_with_sources(SourcesConfig {
            dungeons: Some(dungeons),
            trials: None,
            raids: None,
        });

        let store = InMemoryStore::new();
        let cached = vec![Duty {
            id: 1,
            slug: "edited".to_string(),
            title: "Edited".to_string(),
            ..Default::default()
        }];
        store.save(&cached).await.unwrap();

        let duties = load_catalog(&config, &store).await.unwrap();
        assert_eq!(duties[0].slug, "edited");
    }

    #[tokio::test]
    async fn test_load_catalog_primes_cache_when_absent() {
        let tmp = tempfile::TempDir::new().unwrap();
        let dungeons = source_file(
            &tmp,
            "dungeons.json",
            r#"[{"id": 1, "slug": "sastasha", "title": "Sastasha", "type": "Dungeon"}]"#,
        );
        let config = config_with_sources(SourcesConfig {
            dungeons: Some(dungeons),
            trials: None,
            raids: None,
        });

        let store = InMemoryStore::new();
        let duties = load_catalog(&config, &store).await.unwrap();
        assert_eq!(duties.len(), 1);
        assert_eq!(store.load().await.unwrap(), Some(duties));
    }

    #[tokio::test]
    async fn test_reset_overwrites_cache_with_source_data() {
        let tmp = tempfile::TempDir::new().unwrap();
        let dungeons = source_file(
            &tmp,
            "dungeons.json",
            r#"[{"id": 1, "slug": "sastasha", "title": "Sastasha", "type": "Dungeon"}]"#,
        );
        let config = config_with_sources(SourcesConfig {
            dungeons: Some(dungeons),
            trials: None,
            raids: None,
        });

        let store = InMemoryStore::new();
        store
            .save(&[Duty {
                slug: "edited".to_string(),
                ..Default::default()
            }])
            .await
            .unwrap();

        let duties = reset_from_sources(&config, &store).await.unwrap();
        assert_eq!(duties[0].slug, "sastasha");
        assert_eq!(store.load().await.unwrap(), Some(duties));
    }
}
