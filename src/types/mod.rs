pub mod codes;
pub mod identifiers;
pub mod query;
pub mod view;

pub use codes::CodeTable;
pub use identifiers::{ContestId, DatasetVersion, Gender, OierId, SchoolId};
pub use query::{
    QueryError, QueryRequest, RankingRequest, ScoreField, SearchFacet, SearchQuery, SearchRequest,
};
pub use view::{
    BasicStats, ContestTypeStats, ContestView, GenderDistribution, OierView, ProvinceCount,
    RankingResult, RecordView, SchoolView, SearchResult, Statistics,
};
