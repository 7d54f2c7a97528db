//! In-memory dataset of competitive-programming contest results.
//!
//! `oierdb-core` decodes a compact snapshot (schools, contests, and
//! contestants with compressed award records) into a cross-referenced graph,
//! then serves exact lookup, faceted search, score rankings and aggregate
//! statistics over it. Loading is a single pass that either yields a complete
//! [`Dataset`] or fails; once built, a dataset is never mutated and may be
//! queried from any number of threads.
//!
//! ```no_run
//! use oierdb_core::{Dataset, LoadConfig};
//!
//! let dataset = Dataset::load(&LoadConfig::from_env())?;
//! for oier in dataset.query().find_by_name("张三") {
//!     println!("{} {}", oier.qualified_name, oier.oierdb_score);
//! }
//! # Ok::<(), oierdb_core::LoadError>(())
//! ```

pub mod config;
pub mod constants;
pub mod dataset;
pub mod query;
pub mod record;
pub mod registry;
pub mod types;

pub use config::LoadConfig;
pub use dataset::{Dataset, DatasetHandle, DatasetLoader, LoadError, LoadReport, ReloadOutcome};
pub use query::QueryEngine;
