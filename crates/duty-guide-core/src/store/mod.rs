//! Catalog persistence abstraction.
//!
//! The [`CatalogStore`] trait is the explicit load/save contract between
//! the editor pipeline and whatever durable cache backs it (a JSON file
//! in the CLI, memory in tests). Every write overwrites the full
//! collection; there is no partial-failure mode exposed to callers.
//!
//! Implementations must be `Send + Sync` to work with async runtimes.

pub mod memory;

use anyhow::Result;
use async_trait::async_trait;

use crate::model::Duty;

/// Abstract durable cache for the duty collection.
///
/// An absent cache is not an error: [`load`](CatalogStore::load) returns
/// `None` when nothing has been saved yet, and callers fall through to
/// the partitioned sources.
#[async_trait]
pub trait CatalogStore: Send + Sync {
    /// Persist the full collection, overwriting any prior value.
    async fn save(&self, duties: &[Duty]) -> Result<()>;

    /// Load the previously saved collection, or `None` if never written.
    async fn load(&self) -> Result<Option<Vec<Duty>>>;

    /// Discard the cached collection, if any.
    async fn clear(&self) -> Result<()>;
}
