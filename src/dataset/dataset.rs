// Frozen after construction:
// no mutation
// safe to share across threads

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::config::LoadConfig;
use crate::dataset::loader::{DatasetLoader, LoadError};
use crate::query::QueryEngine;
use crate::registry::{ContestRegistry, OierRegistry, SchoolRegistry};
use crate::types::codes::CodeTable;
use crate::types::identifiers::DatasetVersion;

/// What the loader left out, and why.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoadReport {
    pub school_lines_skipped: usize,
    pub contests_skipped: usize,
    pub rows_loaded: usize,
    pub rows_skipped: usize,
    pub records_decoded: usize,
    pub records_dropped: usize,
    /// Records kept although their school id did not resolve.
    pub records_without_school: usize,
}

#[derive(Debug)]
pub struct Dataset {
    pub(crate) codes: CodeTable,
    pub(crate) schools: SchoolRegistry,
    pub(crate) contests: ContestRegistry,
    pub(crate) oiers: OierRegistry,
    pub(crate) report: LoadReport,
    pub(crate) version: DatasetVersion,
    pub(crate) loaded_at: DateTime<Utc>, // informational only
}

impl Dataset {
    /// Read and build from the files named in `config`.
    pub fn load(config: &LoadConfig) -> Result<Self, LoadError> {
        DatasetLoader::default().load(config)
    }

    /// Build from in-memory sources using the built-in code table.
    pub fn from_sources(
        schools_text: &str,
        contests_json: &str,
        oiers_text: &str,
    ) -> Result<Self, LoadError> {
        DatasetLoader::default().build(schools_text, contests_json, oiers_text)
    }

    pub fn query(&self) -> QueryEngine<'_> {
        QueryEngine::new(self)
    }

    pub fn codes(&self) -> &CodeTable {
        &self.codes
    }

    pub fn schools(&self) -> &SchoolRegistry {
        &self.schools
    }

    pub fn contests(&self) -> &ContestRegistry {
        &self.contests
    }

    pub fn oiers(&self) -> &OierRegistry {
        &self.oiers
    }

    pub fn report(&self) -> &LoadReport {
        &self.report
    }

    pub fn version(&self) -> &DatasetVersion {
        &self.version
    }

    pub fn loaded_at(&self) -> DateTime<Utc> {
        self.loaded_at
    }
}
