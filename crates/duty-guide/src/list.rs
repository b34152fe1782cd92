//! The `duty list` command: cache-first load, type filter, and a table
//! of records in ascending-id order.

use anyhow::Result;

use duty_guide_core::model::TypeSelector;
use duty_guide_core::search::filter_by_type;
use duty_guide_core::store::CatalogStore;

use crate::config::Config;
use crate::loader;

pub async fn run_list<S: CatalogStore>(
    config: &Config,
    store: &S,
    selector: TypeSelector,
) -> Result<()> {
    let duties = loader::load_catalog(config, store).await?;
    let filtered = filter_by_type(&duties, selector);

    if filtered.is_empty() {
        println!("No duties found.");
        return Ok(());
    }

    println!(
        "{:<4} {:<8} {:<36} {:<6} TAGS",
        "ID", "TYPE", "TITLE", "PATCH"
    );
    for duty in &filtered {
        println!(
            "{:<4} {:<8} {:<36} {:<6} {}",
            duty.id,
            duty.duty_type,
            duty.title,
            duty.patch,
            duty.tags.join(", ")
        );
    }
    Ok(())
}
