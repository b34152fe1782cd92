//! Core data types for the duty catalog.
//!
//! A [`Duty`] is serialized with the exact field names used by the
//! partitioned JSON sources (`type`, `backgroundImage`, ...). Every field
//! defaults when absent — records are not schema-validated, a missing
//! field simply surfaces as blank.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Closed set of duty categories. One source partition exists per variant.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub enum DutyType {
    /// Default for newly added records.
    #[default]
    Dungeon,
    Trial,
    Raid,
}

impl DutyType {
    /// All variants, in partition order.
    pub const ALL: [DutyType; 3] = [DutyType::Dungeon, DutyType::Trial, DutyType::Raid];

    /// The stored value, as it appears in the `type` field.
    pub fn as_str(&self) -> &'static str {
        match self {
            DutyType::Dungeon => "Dungeon",
            DutyType::Trial => "Trial",
            DutyType::Raid => "Raid",
        }
    }

    /// Name of the source partition and export artifact for this type.
    pub fn partition_name(&self) -> &'static str {
        match self {
            DutyType::Dungeon => "dungeons",
            DutyType::Trial => "trials",
            DutyType::Raid => "raids",
        }
    }
}

impl fmt::Display for DutyType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DutyType {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "dungeon" | "dungeons" => Ok(DutyType::Dungeon),
            "trial" | "trials" => Ok(DutyType::Trial),
            "raid" | "raids" => Ok(DutyType::Raid),
            other => anyhow::bail!("Unknown duty type: '{}'. Use dungeon, trial, or raid.", other),
        }
    }
}

/// Type filter selector. `All` exists only as a filter value, never as a
/// stored `type`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TypeSelector {
    All,
    Only(DutyType),
}

impl FromStr for TypeSelector {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("all") {
            Ok(TypeSelector::All)
        } else {
            Ok(TypeSelector::Only(s.parse()?))
        }
    }
}

impl fmt::Display for TypeSelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TypeSelector::All => f.write_str("All"),
            TypeSelector::Only(t) => f.write_str(t.as_str()),
        }
    }
}

/// A single duty record, as serialized in the partitioned sources and the
/// local cache.
///
/// `id` is unique only within its type partition and is kept dense (1..n)
/// by [`reindex`](crate::indexer::reindex). `slug` is the routing key,
/// unique across the whole collection, and — together with
/// `background_image` — is re-derived from `title` whenever the title
/// changes.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Duty {
    pub id: u32,
    pub slug: String,
    pub title: String,
    pub tags: Vec<String>,
    #[serde(rename = "type")]
    pub duty_type: DutyType,
    pub patch: String,
    #[serde(rename = "backgroundImage")]
    pub background_image: String,
    pub description: String,
}

/// Look up a record by its slug (the detail-view routing key).
pub fn find_by_slug<'a>(duties: &'a [Duty], slug: &str) -> Option<&'a Duty> {
    duties.iter().find(|d| d.slug == slug)
}
