use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use chrono::Utc;
use thiserror::Error;

use crate::config::LoadConfig;
use crate::dataset::{Dataset, LoadReport};
use crate::record::RecordDecoder;
use crate::registry::{ContestRegistry, OierRegistry, SchoolRegistry};
use crate::types::codes::CodeTable;
use crate::types::identifiers::DatasetVersion;

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("Failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("Invalid contest source: {0}")]
    ContestSource(#[from] serde_json::Error),
}

/// Builds a [`Dataset`] in one pass: contests and schools, then contestants
/// and their records, then the global ranking sort.
///
/// Nothing is published until every step has finished; a failure leaves no
/// partial dataset behind.
pub struct DatasetLoader {
    codes: CodeTable,
}

impl Default for DatasetLoader {
    fn default() -> Self {
        Self {
            codes: CodeTable::default(),
        }
    }
}

impl DatasetLoader {
    pub fn new(codes: CodeTable) -> Self {
        Self { codes }
    }

    pub fn load(&self, config: &LoadConfig) -> Result<Dataset, LoadError> {
        let schools = read_source(&config.schools_path)?;
        let contests = read_source(&config.contests_path)?;
        let oiers = read_source(&config.oiers_path)?;
        self.build(&schools, &contests, &oiers)
    }

    pub fn build(
        &self,
        schools_text: &str,
        contests_json: &str,
        oiers_text: &str,
    ) -> Result<Dataset, LoadError> {
        tracing::info!("Loading dataset...");
        let version = DatasetVersion::from_sources(schools_text, contests_json, oiers_text);
        let mut report = LoadReport::default();

        let mut contests = ContestRegistry::new();
        report.contests_skipped = contests.load_json(contests_json)?;

        let mut schools = SchoolRegistry::new();
        report.school_lines_skipped = schools.load_text(schools_text);

        let mut oiers = OierRegistry::new();
        {
            let decoder = RecordDecoder::new(&self.codes, &schools, &contests);
            oiers.load_text(oiers_text, &decoder, &mut report);
        }
        oiers.sort_by_score();
        contests.recount(oiers.records().map(|record| record.contest));

        tracing::info!(
            version = %version,
            schools = schools.len(),
            contests = contests.len(),
            oiers = oiers.len(),
            records = report.records_decoded,
            rows_skipped = report.rows_skipped,
            records_dropped = report.records_dropped,
            "Dataset loaded"
        );

        Ok(Dataset {
            codes: self.codes.clone(),
            schools,
            contests,
            oiers,
            report,
            version,
            loaded_at: Utc::now(),
        })
    }
}

fn read_source(path: &Path) -> Result<String, LoadError> {
    fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })
}
