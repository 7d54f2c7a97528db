use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::types::query::{ScoreField, SearchFacet};

/// A contestant as returned to callers. Fully self-contained.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OierView {
    pub name: String,
    pub gender: String,
    pub enroll_middle: i32,
    pub oierdb_score: f64,
    pub ccf_score: f64,
    pub ccf_level: i32,
    pub records: Vec<RecordView>,
}

/// One record with its contest and school resolved to display values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecordView {
    pub contest_name: String,
    pub contest_type: String,
    pub year: i32,
    pub score: Option<f64>,
    pub rank: i32,
    pub level: String,
    pub province: String,
    pub school: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchResult {
    pub query: String,
    pub search_type: SearchFacet,
    pub total: usize,
    pub results: Vec<OierView>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankingResult {
    pub score_type: ScoreField,
    pub offset: usize,
    pub limit: usize,
    /// Contestants in the whole ranking, not just this page.
    pub total: usize,
    pub results: Vec<OierView>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContestView {
    pub id: u32,
    pub name: String,
    #[serde(rename = "type")]
    pub contest_type: String,
    pub year: i32,
    pub school_year: i32,
    pub full_score: Option<f64>,
    pub n_contestants: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SchoolView {
    pub id: u32,
    pub name: String,
    pub province: String,
    pub city: String,
    pub aliases: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BasicStats {
    pub total_oiers: usize,
    pub total_contests: usize,
    pub total_schools: usize,
    pub total_records: usize,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenderDistribution {
    pub male: usize,
    pub female: usize,
    pub unknown: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProvinceCount {
    pub province: String,
    pub count: usize,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContestTypeStats {
    /// Contest instances of this type.
    pub contests: usize,
    /// Sum of `n_contestants` over those instances.
    pub contestants: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Statistics {
    pub basic_stats: BasicStats,
    pub gender_distribution: GenderDistribution,
    /// Highest count first; ties by province name.
    pub province_distribution: Vec<ProvinceCount>,
    pub contest_types: BTreeMap<String, ContestTypeStats>,
}
