use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError, ValidationErrors};

use crate::constants::{MAX_NAME_BATCH, MAX_RANKING_LIMIT, MAX_SEARCH_LIMIT};

/// `MAX_NAME_BATCH` as `u64`, the type the `validator` length bounds require.
const MAX_NAME_BATCH_U64: u64 = MAX_NAME_BATCH as u64;

/// Which derived score a ranking is ordered by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScoreField {
    Oierdb,
    Ccf,
}

impl ScoreField {
    pub fn as_str(self) -> &'static str {
        match self {
            ScoreField::Oierdb => "oierdb",
            ScoreField::Ccf => "ccf",
        }
    }
}

impl FromStr for ScoreField {
    type Err = QueryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "oierdb" => Ok(ScoreField::Oierdb),
            "ccf" => Ok(ScoreField::Ccf),
            other => Err(QueryError::UnknownScoreField(other.to_string())),
        }
    }
}

impl fmt::Display for ScoreField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Field a search query is matched against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SearchFacet {
    Name,
    School,
    Contest,
    Province,
}

impl SearchFacet {
    pub fn as_str(self) -> &'static str {
        match self {
            SearchFacet::Name => "name",
            SearchFacet::School => "school",
            SearchFacet::Contest => "contest",
            SearchFacet::Province => "province",
        }
    }
}

impl FromStr for SearchFacet {
    type Err = QueryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "name" => Ok(SearchFacet::Name),
            "school" => Ok(SearchFacet::School),
            "contest" => Ok(SearchFacet::Contest),
            "province" => Ok(SearchFacet::Province),
            other => Err(QueryError::UnknownFacet(other.to_string())),
        }
    }
}

impl fmt::Display for SearchFacet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A case-insensitive substring query.
#[derive(Debug, Clone)]
pub struct SearchQuery {
    pub raw: String,
    pub needle: String,
}

impl SearchQuery {
    pub fn new(raw: impl Into<String>) -> Self {
        let raw = raw.into();
        let needle = raw.trim().to_lowercase();
        Self { raw, needle }
    }

    pub fn matches(&self, haystack: &str) -> bool {
        haystack.to_lowercase().contains(&self.needle)
    }
}

/// Batch exact-name lookup.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct QueryRequest {
    #[validate(length(min = 1, max = MAX_NAME_BATCH_U64))]
    pub names: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct SearchRequest {
    #[validate(custom(function = "not_blank"))]
    pub query: String,
    pub search_type: SearchFacet,
    #[serde(default = "default_search_limit")]
    #[validate(range(min = 1, max = MAX_SEARCH_LIMIT))]
    pub limit: usize,
}

fn default_search_limit() -> usize {
    20
}

fn not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new("blank"));
    }
    Ok(())
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct RankingRequest {
    pub score_type: ScoreField,
    #[serde(default = "default_ranking_limit")]
    #[validate(range(min = 1, max = MAX_RANKING_LIMIT))]
    pub limit: usize,
    #[serde(default)]
    pub offset: usize,
}

fn default_ranking_limit() -> usize {
    50
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum QueryError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Unknown search type: {0}")]
    UnknownFacet(String),

    #[error("Unknown score type: {0}")]
    UnknownScoreField(String),
}

impl From<ValidationErrors> for QueryError {
    fn from(err: ValidationErrors) -> Self {
        QueryError::Validation(err.to_string())
    }
}
