//! In-memory [`CatalogStore`] implementation for tests.
//!
//! Holds the collection behind `std::sync::RwLock`; futures resolve
//! immediately.

use std::sync::RwLock;

use anyhow::Result;
use async_trait::async_trait;

use crate::model::Duty;

use super::CatalogStore;

/// In-memory store. `None` models an absent cache.
pub struct InMemoryStore {
    duties: RwLock<Option<Vec<Duty>>>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self {
            duties: RwLock::new(None),
        }
    }
}

impl Default for InMemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl CatalogStore for InMemoryStore {
    async fn save(&self, duties: &[Duty]) -> Result<()> {
        let mut guard = self.duties.write().unwrap();
        *guard = Some(duties.to_vec());
        Ok(())
    }

    async fn load(&self) -> Result<Option<Vec<Duty>>> {
        let guard = self.duties.read().unwrap();
        Ok(guard.clone())
    }

    async fn clear(&self) -> Result<()> {
        let mut guard = self.duties.write().unwrap();
        *guard = None;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::DutyType;

    fn sample() -> Vec<Duty> {
        vec![Duty {
            id: 1,
            slug: "sastasha".to_string(),
            title: "Sastasha".to_string(),
            duty_type: DutyType::Dungeon,
            ..Default::default()
        }]
    }

    #[tokio::test]
    async fn test_load_before_save_is_absent() {
        let store = InMemoryStore::new();
        assert!(store.load().await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_save_then_load_round_trips() {
        let store = InMemoryStore::new();
        let duties = sample();
        store.save(&duties).await.unwrap();
        assert_eq!(store.load().await.unwrap(), Some(duties));
    }

    #[tokio::test]
    async fn test_save_overwrites_prior_value() {
        let store = InMemoryStore::new();
        store.save(&sample()).await.unwrap();
        store.save(&[]).await.unwrap();
        assert_eq!(store.load().await.unwrap(), Some(Vec::new()));
    }

    #[tokio::test]
    async fn test_clear_drops_the_cache() {
        let store = InMemoryStore::new();
        store.save(&sample()).await.unwrap();
        store.clear().await.unwrap();
        assert!(store.load().await.unwrap().is_none());
    }
}
