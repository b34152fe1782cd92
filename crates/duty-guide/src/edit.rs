//! Editor commands: add, edit, remove, reset.
//!
//! Every command runs the core mutation pipeline against the cache-first
//! collection and persists the result into the store before returning.

use anyhow::{bail, Result};

use duty_guide_core::editor::{add_duty, edit_duty, remove_duty, DutyEdit};
use duty_guide_core::store::CatalogStore;

use crate::config::Config;
use crate::loader;

pub async fn run_add<S: CatalogStore>(config: &Config, store: &S, edit: DutyEdit) -> Result<()> {
    let mut duties = loader::load_catalog(config, store).await?;
    let added = add_duty(&mut duties, &edit);
    store.save(&duties).await?;
    println!(
        "Added {} #{} '{}' (slug: {})",
        added.duty_type, added.id, added.title, added.slug
    );
    Ok(())
}

pub async fn run_edit<S: CatalogStore>(
    config: &Config,
    store: &S,
    slug: &str,
    edit: DutyEdit,
) -> Result<()> {
    if edit.is_empty() {
        bail!("nothing to edit: pass at least one field flag");
    }
    let mut duties = loader::load_catalog(config, store).await?;
    let edited = edit_duty(&mut duties, slug, &edit)?;
    store.save(&duties).await?;
    println!(
        "Edited {} #{} '{}' (slug: {})",
        edited.duty_type, edited.id, edited.title, edited.slug
    );
    Ok(())
}

pub async fn run_remove<S: CatalogStore>(config: &Config, store: &S, slug: &str) -> Result<()> {
    let mut duties = loader::load_catalog(config, store).await?;
    let removed = remove_duty(&mut duties, slug)?;
    store.save(&duties).await?;
    println!(
        "Removed {} '{}'; reindexed {} remaining duties",
        removed.duty_type,
        removed.title,
        duties.len()
    );
    Ok(())
}

pub async fn run_reset<S: CatalogStore>(config: &Config, store: &S) -> Result<()> {
    let duties = loader::reset_from_sources(config, store).await?;
    println!("Reset cache from sources ({} duties).", duties.len());
    Ok(())
}
