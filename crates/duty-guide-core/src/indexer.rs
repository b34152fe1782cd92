//! Identifier and derived-field maintenance.
//!
//! Ids are unique only within a type partition and must stay dense (1..n,
//! no gaps or duplicates) across every insert, edit, and removal. The
//! functions here are pure: the mutation pipeline in [`crate::editor`]
//! calls them explicitly rather than relying on UI-side bookkeeping.

use crate::model::{Duty, DutyType};

/// Path prefix for derived background images.
const IMAGE_PREFIX: &str = "/images/";
/// Extension for derived background images.
const IMAGE_EXT: &str = ".jpg";

/// Renumber every type partition to a dense 1-based sequence in its
/// current relative order, then re-sort the collection by ascending id.
///
/// Partitions are independent: ids repeat across types. The trailing sort
/// is stable, so records sharing an id keep their relative order.
pub fn reindex(duties: &mut Vec<Duty>) {
    let mut next_id = [0u32; DutyType::ALL.len()];
    for duty in duties.iter_mut() {
        let slot = &mut next_id[duty.duty_type as usize];
        *slot += 1;
        duty.id = *slot;
    }
    sort_by_id(duties);
}

/// Stable sort by ascending id, the display order of the catalog.
pub fn sort_by_id(duties: &mut [Duty]) {
    duties.sort_by_key(|d| d.id);
}

/// Derive the slug and background image path from a title.
///
/// The slug is the lowercased title with each run of whitespace collapsed
/// to a single hyphen; the image path is the slug wrapped in a fixed
/// prefix and extension. Both are overwritten on every title edit and are
/// never edited independently.
pub fn derive_from_title(title: &str) -> (String, String) {
    let slug = title
        .to_lowercase()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join("-");
    let background_image = format!("{}{}{}", IMAGE_PREFIX, slug, IMAGE_EXT);
    (slug, background_image)
}
