use crate::dataset::Dataset;
use crate::registry::Oier;
use crate::types::query::{SearchFacet, SearchQuery};

/// Does any part of `oier` selected by `facet` contain the query?
pub fn facet_matches(dataset: &Dataset, oier: &Oier, facet: SearchFacet, query: &SearchQuery) -> bool {
    match facet {
        SearchFacet::Name => query.matches(&oier.name),
        SearchFacet::School => oier.records().iter().any(|record| {
            record
                .school
                .and_then(|id| dataset.schools.get(id))
                .is_some_and(|school| query.matches(&school.name))
        }),
        SearchFacet::Contest => oier.records().iter().any(|record| {
            dataset
                .contests
                .get(record.contest)
                .is_some_and(|contest| {
                    query.matches(&contest.name) || query.matches(&contest.contest_type)
                })
        }),
        SearchFacet::Province => oier
            .records()
            .iter()
            .any(|record| query.matches(&record.province)),
    }
}

/// Contestants matching `query` on `facet`, in ranking order, at most `limit`.
pub fn search<'a>(
    dataset: &'a Dataset,
    query: &SearchQuery,
    facet: SearchFacet,
    limit: usize,
) -> Vec<&'a Oier> {
    dataset
        .oiers
        .get_all()
        .filter(|oier| facet_matches(dataset, oier, facet, query))
        .take(limit)
        .collect()
}
