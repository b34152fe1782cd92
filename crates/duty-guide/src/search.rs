//! The `duty search` command.
//!
//! Composes the type filter with the fuzzy engine: filter first, then
//! search within the filtered set. Results print in descending relevance
//! with their scores; an empty query degrades to a plain listing.

use anyhow::Result;

use duty_guide_core::model::TypeSelector;
use duty_guide_core::search::{DutySearch, SearchParams};
use duty_guide_core::store::CatalogStore;

use crate::config::Config;
use crate::loader;

pub async fn run_search<S: CatalogStore>(
    config: &Config,
    store: &S,
    query: &str,
    selector: TypeSelector,
    limit: Option<usize>,
) -> Result<()> {
    let duties = loader::load_catalog(config, store).await?;

    let params = SearchParams {
        threshold: config.search.threshold,
        limit: Some(limit.unwrap_or(config.search.limit)),
    };
    let mut engine = DutySearch::new(params);
    let results = engine.query(&duties, selector, query);

    if results.is_empty() {
        println!("No results.");
        return Ok(());
    }

    println!(
        "{:<7} {:<4} {:<8} {:<36} TAGS",
        "SCORE", "ID", "TYPE", "TITLE"
    );
    for result in &results {
        println!(
            "{:<7.3} {:<4} {:<8} {:<36} {}",
            result.score,
            result.duty.id,
            result.duty.duty_type,
            result.duty.title,
            result.duty.tags.join(", ")
        );
    }
    Ok(())
}
