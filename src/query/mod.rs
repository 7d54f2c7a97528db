pub mod ranking;
pub mod search;
pub mod stats;

use validator::Validate;

use crate::dataset::Dataset;
use crate::registry::Oier;
use crate::types::query::{
    QueryError, QueryRequest, RankingRequest, ScoreField, SearchFacet, SearchQuery, SearchRequest,
};
use crate::types::view::{
    ContestView, OierView, RankingResult, RecordView, SchoolView, SearchResult, Statistics,
};

pub use ranking::rank;
pub use search::{facet_matches, search};
pub use stats::statistics;

/// Read-only operations over a loaded [`Dataset`].
///
/// Holds only a shared borrow, so any number of engines may run at once.
#[derive(Clone, Copy)]
pub struct QueryEngine<'a> {
    dataset: &'a Dataset,
}

impl<'a> QueryEngine<'a> {
    pub fn new(dataset: &'a Dataset) -> Self {
        Self { dataset }
    }

    /// Every contestant named exactly `name`, homonyms included.
    pub fn find_by_name(&self, name: &str) -> Vec<&'a Oier> {
        self.dataset.oiers.find_by_name(name)
    }

    pub fn search(&self, query: &SearchQuery, facet: SearchFacet, limit: usize) -> Vec<&'a Oier> {
        search(self.dataset, query, facet, limit)
    }

    pub fn rank(&self, field: ScoreField, limit: usize, offset: usize) -> Vec<&'a Oier> {
        rank(self.dataset, field, limit, offset)
    }

    pub fn statistics(&self, top_provinces: usize) -> Statistics {
        statistics(self.dataset, top_provinces)
    }

    /// Batch lookup: matches for each requested name, in request order.
    pub fn query(&self, request: &QueryRequest) -> Result<Vec<OierView>, QueryError> {
        request.validate()?;

        Ok(request
            .names
            .iter()
            .flat_map(|name| self.find_by_name(name))
            .map(|oier| self.render(oier))
            .collect())
    }

    pub fn search_request(&self, request: &SearchRequest) -> Result<SearchResult, QueryError> {
        request.validate()?;

        let query = SearchQuery::new(request.query.as_str());
        let results: Vec<OierView> = self
            .search(&query, request.search_type, request.limit)
            .into_iter()
            .map(|oier| self.render(oier))
            .collect();

        Ok(SearchResult {
            query: query.raw,
            search_type: request.search_type,
            total: results.len(),
            results,
        })
    }

    pub fn ranking(&self, request: &RankingRequest) -> Result<RankingResult, QueryError> {
        request.validate()?;

        let results = self
            .rank(request.score_type, request.limit, request.offset)
            .into_iter()
            .map(|oier| self.render(oier))
            .collect();

        Ok(RankingResult {
            score_type: request.score_type,
            offset: request.offset,
            limit: request.limit,
            total: self.dataset.oiers.len(),
            results,
        })
    }

    pub fn contests(&self) -> Vec<ContestView> {
        self.dataset
            .contests
            .get_all()
            .iter()
            .map(|contest| ContestView {
                id: contest.id.0,
                name: contest.name.clone(),
                contest_type: contest.contest_type.clone(),
                year: contest.year,
                school_year: contest.school_year(),
                full_score: contest.full_score,
                n_contestants: contest.n_contestants(),
            })
            .collect()
    }

    pub fn schools(&self) -> Vec<SchoolView> {
        self.dataset
            .schools
            .get_all()
            .iter()
            .map(|school| SchoolView {
                id: school.id.0,
                name: school.name.clone(),
                province: school.province.clone(),
                city: school.city.clone(),
                aliases: school.aliases.clone(),
            })
            .collect()
    }

    /// Resolve a contestant and its records into caller-facing values.
    pub fn render(&self, oier: &Oier) -> OierView {
        let records = oier
            .records()
            .iter()
            .filter_map(|record| {
                // Records only exist for contests that resolved at decode time.
                let contest = self.dataset.contests.get(record.contest)?;
                let school = record
                    .school
                    .and_then(|id| self.dataset.schools.get(id))
                    .map(|school| school.name.clone());

                Some(RecordView {
                    contest_name: contest.name.clone(),
                    contest_type: contest.contest_type.clone(),
                    year: contest.year,
                    score: record.score,
                    rank: record.rank,
                    level: record.level.clone(),
                    province: record.province.clone(),
                    school,
                })
            })
            .collect();

        OierView {
            name: oier.name.clone(),
            gender: oier.gender.label().to_string(),
            enroll_middle: oier.enroll_middle,
            oierdb_score: oier.oierdb_score,
            ccf_score: oier.ccf_score,
            ccf_level: oier.ccf_level,
            records,
        }
    }
}
