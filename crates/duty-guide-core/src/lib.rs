//! # Duty Guide Core
//!
//! Shared logic for Duty Guide: the duty data model, the id/derived-field
//! indexer, the mutation pipeline, the fuzzy search engine, and the
//! catalog store abstraction.
//!
//! This crate performs no I/O of its own. Loading partitioned sources,
//! the file-backed cache, and the CLI live in the `duty-guide` crate.

pub mod editor;
pub mod indexer;
pub mod model;
pub mod search;
pub mod store;
