//! # Duty Guide CLI (`duty`)
//!
//! The `duty` binary browses and edits a catalog of game duties backed
//! by partitioned JSON sources and a local JSON cache.
//!
//! ## Usage
//!
//! ```bash
//! duty --config ./config/duty.toml <command>
//! ```
//!
//! ## Commands
//!
//! | Command | Description |
//! |---------|-------------|
//! | `duty list` | List the catalog, optionally filtered by type |
//! | `duty search "<query>"` | Fuzzy search over titles and tags |
//! | `duty show <slug>` | Show one duty's detail view |
//! | `duty add` | Add a duty through the mutation pipeline |
//! | `duty edit <slug>` | Edit a duty field by field |
//! | `duty remove <slug>` | Remove a duty and reindex its partition |
//! | `duty export` | Export the catalog as one artifact per partition |
//! | `duty reset` | Overwrite the cache from the original sources |
//! | `duty sources` | Show configured partition sources and status |

mod config;
mod edit;
mod export;
mod json_store;
mod list;
mod loader;
mod search;
mod show;
mod sources;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use duty_guide_core::editor::DutyEdit;
use duty_guide_core::model::{DutyType, TypeSelector};

/// Duty Guide — browse, search, and edit a catalog of game duties.
///
/// All commands accept a `--config` flag pointing to a TOML configuration
/// file. See `config/duty.example.toml` for a full example.
#[derive(Parser)]
#[command(
    name = "duty",
    about = "Duty Guide — browse, search, and edit a catalog of game duties",
    version,
    long_about = "Duty Guide loads duty records (dungeons, trials, raids) from partitioned JSON \
    sources, keeps per-partition ids dense and derived fields consistent through a reindex \
    pipeline, supports fuzzy search over titles and tags, caches edits in a local JSON file, \
    and exports the collection back into the partitioned source format."
)]
struct Cli {
    /// Path to configuration file (TOML).
    #[arg(long, global = true, default_value = "./config/duty.toml")]
    config: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

/// Top-level CLI commands.
#[derive(Subcommand)]
enum Commands {
    /// List the catalog in ascending-id order.
    ///
    /// Loads cache-first: a previously edited collection is preferred
    /// over re-fetching the partitioned sources.
    List {
        /// Type filter: `all`, `dungeon`, `trial`, or `raid`.
        #[arg(long = "type", default_value = "all")]
        duty_type: TypeSelector,
    },

    /// Fuzzy-search titles and tags.
    ///
    /// The type filter is applied first; the query then narrows within
    /// the filtered set. Results are ranked by descending relevance.
    Search {
        /// The search query. An empty query returns everything.
        query: String,

        /// Type filter: `all`, `dungeon`, `trial`, or `raid`.
        #[arg(long = "type", default_value = "all")]
        duty_type: TypeSelector,

        /// Maximum number of results (defaults to `search.limit` from config).
        #[arg(long)]
        limit: Option<usize>,
    },

    /// Show one duty's detail view, addressed by slug.
    Show {
        /// The duty's slug (e.g. `the-praetorium`).
        slug: String,
    },

    /// Add a new duty.
    ///
    /// The record starts blank with type Dungeon and an id computed from
    /// the partition size; any flags are applied through the same edit
    /// pipeline as `duty edit`, so a title derives its slug and image.
    Add {
        /// Display title; derives the slug and background image.
        #[arg(long)]
        title: Option<String>,

        /// Duty type: `dungeon`, `trial`, or `raid`.
        #[arg(long = "type")]
        duty_type: Option<DutyType>,

        /// Comma-separated search tags.
        #[arg(long, value_delimiter = ',')]
        tags: Option<Vec<String>>,

        /// Version label (free text).
        #[arg(long)]
        patch: Option<String>,

        /// Detail-view description.
        #[arg(long)]
        description: Option<String>,
    },

    /// Edit a duty field by field, addressed by slug.
    ///
    /// Editing the title re-derives the slug and background image.
    /// Editing the type moves the record into the destination partition
    /// and reindexes ids.
    Edit {
        /// The duty's current slug.
        slug: String,

        /// New display title; re-derives the slug and background image.
        #[arg(long)]
        title: Option<String>,

        /// New duty type: `dungeon`, `trial`, or `raid`.
        #[arg(long = "type")]
        duty_type: Option<DutyType>,

        /// New comma-separated search tags (replaces the old set).
        #[arg(long, value_delimiter = ',')]
        tags: Option<Vec<String>>,

        /// New version label.
        #[arg(long)]
        patch: Option<String>,

        /// New description.
        #[arg(long)]
        description: Option<String>,
    },

    /// Remove a duty and reindex its partition.
    Remove {
        /// The duty's slug.
        slug: String,
    },

    /// Export the catalog as one pretty-printed JSON artifact per
    /// partition (`dungeons.json`, `trials.json`, `raids.json`).
    Export {
        /// Output directory (defaults to `export.dir` from config).
        #[arg(long)]
        out: Option<PathBuf>,
    },

    /// Discard the cache and reload the original partitioned sources.
    Reset,

    /// Show configured partition sources and their availability.
    Sources,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let cfg = config::load_config(&cli.config)?;
    let store = json_store::FileStore::from_config(&cfg);

    match cli.command {
        Commands::List { duty_type } => {
            list::run_list(&cfg, &store, duty_type).await?;
        }
        Commands::Search {
            query,
            duty_type,
            limit,
        } => {
            search::run_search(&cfg, &store, &query, duty_type, limit).await?;
        }
        Commands::Show { slug } => {
            show::run_show(&cfg, &store, &slug).await?;
        }
        Commands::Add {
            title,
            duty_type,
            tags,
            patch,
            description,
        } => {
            let edit = DutyEdit {
                title,
                tags,
                duty_type,
                patch,
                description,
            };
            edit::run_add(&cfg, &store, edit).await?;
        }
        Commands::Edit {
            slug,
            title,
            duty_type,
            tags,
            patch,
            description,
        } => {
            let changes = DutyEdit {
                title,
                tags,
                duty_type,
                patch,
                description,
            };
            edit::run_edit(&cfg, &store, &slug, changes).await?;
        }
        Commands::Remove { slug } => {
            edit::run_remove(&cfg, &store, &slug).await?;
        }
        Commands::Export { out } => {
            export::run_export(&cfg, &store, out.as_deref()).await?;
        }
        Commands::Reset => {
            edit::run_reset(&cfg, &store).await?;
        }
        Commands::Sources => {
            sources::list_sources(&cfg)?;
        }
    }

    Ok(())
}
