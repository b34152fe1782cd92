//! The single mutation pipeline for the catalog.
//!
//! Add, edit, and remove all run the same sequence: apply the field
//! changes (re-deriving slug and background image on a title change,
//! re-assigning the id on a type change), then [`reindex`] the whole
//! collection. Callers persist the collection into a
//! [`CatalogStore`](crate::store::CatalogStore) after each mutation.

use anyhow::{bail, Result};

use crate::indexer::{derive_from_title, reindex};
use crate::model::{Duty, DutyType};

/// A field-by-field edit. `None` leaves the field untouched.
///
/// `slug` and `background_image` are intentionally absent: both are
/// derived from the title and never edited independently.
#[derive(Debug, Clone, Default)]
pub struct DutyEdit {
    pub title: Option<String>,
    pub tags: Option<Vec<String>>,
    pub duty_type: Option<DutyType>,
    pub patch: Option<String>,
    pub description: Option<String>,
}

impl DutyEdit {
    pub fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.tags.is_none()
            && self.duty_type.is_none()
            && self.patch.is_none()
            && self.description.is_none()
    }
}

/// Apply an edit to the record at `index` without reindexing.
///
/// A type change re-assigns the id to the destination partition's size as
/// of this moment, counted before the record joins it. For a dense
/// destination that id collides with the partition's last record; the
/// collision is transient and corrected by the reindex pass that every
/// mutation runs afterwards. This ordering is observable behavior and is
/// kept deliberately.
pub fn apply_edit(duties: &mut [Duty], index: usize, edit: &DutyEdit) {
    if let Some(title) = &edit.title {
        let (slug, background_image) = derive_from_title(title);
        duties[index].title = title.clone();
        duties[index].slug = slug;
        duties[index].background_image = background_image;
    }
    if let Some(tags) = &edit.tags {
        duties[index].tags = tags.clone();
    }
    if let Some(patch) = &edit.patch {
        duties[index].patch = patch.clone();
    }
    if let Some(description) = &edit.description {
        duties[index].description = description.clone();
    }
    if let Some(new_type) = edit.duty_type {
        if duties[index].duty_type != new_type {
            let destination_size = duties
                .iter()
                .filter(|d| d.duty_type == new_type)
                .count() as u32;
            duties[index].duty_type = new_type;
            duties[index].id = destination_size.max(1);
        }
    }
}

/// Add a new record and run the pipeline.
///
/// The record starts blank with type Dungeon and an id computed from the
/// current partition size; `edit` is then applied through the same path
/// as [`edit_duty`], so a title supplied at creation derives its slug and
/// a type supplied at creation moves the record before reindexing.
/// Returns the record as it stands after the reindex.
pub fn add_duty(duties: &mut Vec<Duty>, edit: &DutyEdit) -> Duty {
    let partition_size = duties
        .iter()
        .filter(|d| d.duty_type == DutyType::default())
        .count() as u32;
    duties.push(Duty {
        id: partition_size + 1,
        ..Default::default()
    });
    let index = duties.len() - 1;
    apply_edit(duties, index, edit);
    let final_type = duties[index].duty_type;
    reindex(duties);

    // The new record entered its partition last, so after reindexing it
    // holds the partition's highest id.
    duties
        .iter()
        .filter(|d| d.duty_type == final_type)
        .max_by_key(|d| d.id)
        .cloned()
        .unwrap_or_default()
}

/// Edit the record addressed by `slug` and run the pipeline.
///
/// Returns the record as it stands after the reindex (its slug may have
/// changed if the title was edited).
pub fn edit_duty(duties: &mut Vec<Duty>, slug: &str, edit: &DutyEdit) -> Result<Duty> {
    let index = match duties.iter().position(|d| d.slug == slug) {
        Some(i) => i,
        None => bail!("no duty with slug '{}'", slug),
    };
    apply_edit(duties, index, edit);
    let new_slug = duties[index].slug.clone();
    reindex(duties);

    duties
        .iter()
        .find(|d| d.slug == new_slug)
        .cloned()
        .ok_or_else(|| anyhow::anyhow!("no duty with slug '{}' after edit", new_slug))
}

/// Remove the record addressed by `slug`, then reindex the collection so
/// the affected partition closes the id gap. Returns the removed record.
pub fn remove_duty(duties: &mut Vec<Duty>, slug: &str) -> Result<Duty> {
    let index = match duties.iter().position(|d| d.slug == slug) {
        Some(i) => i,
        None => bail!("no duty with slug '{}'", slug),
    };
    let removed = duties.remove(index);
    reindex(duties);
    Ok(removed)
}
