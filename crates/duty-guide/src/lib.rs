//! # Duty Guide
//!
//! A catalog manager for game duties (dungeons, trials, raids). Duty
//! Guide loads partitioned JSON sources into one collection, keeps ids
//! and derived fields consistent through a pure reindex pipeline, offers
//! fuzzy search plus type filtering, mirrors every edit into a JSON file
//! cache, and exports the collection back into the partitioned format.
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────┐   ┌──────────────┐   ┌─────────────┐
//! │ Partitioned  │──▶│   Indexer /   │──▶│  JSON file  │
//! │ JSON sources │   │   pipeline    │   │    cache    │
//! └──────────────┘   └──────────────┘   └──────┬──────┘
//!                                              │
//!                              ┌───────────────┤
//!                              ▼               ▼
//!                        ┌──────────┐    ┌──────────┐
//!                        │  search  │    │  export  │
//!                        └──────────┘    └──────────┘
//! ```
//!
//! ## Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`config`] | TOML configuration parsing |
//! | [`loader`] | Partitioned source loading (file and HTTP) |
//! | [`json_store`] | File-backed catalog cache |
//! | [`list`] | `duty list` |
//! | [`search`] | `duty search` |
//! | [`show`] | `duty show` |
//! | [`edit`] | `duty add` / `edit` / `remove` / `reset` |
//! | [`export`] | Partitioned export artifacts |
//! | [`sources`] | Partition source status |

pub mod config;
pub mod edit;
pub mod export;
pub mod json_store;
pub mod list;
pub mod loader;
pub mod search;
pub mod show;
pub mod sources;
