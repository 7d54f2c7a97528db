//! Crate-wide limits and defaults.

// =============================================================================
// SOURCE DEFAULTS
// =============================================================================

/// Default school source path
pub const DEFAULT_SCHOOLS_PATH: &str = "data/school.txt";

/// Default contest source path
pub const DEFAULT_CONTESTS_PATH: &str = "static/contests.json";

/// Default contestant source path
pub const DEFAULT_OIERS_PATH: &str = "dist/result.txt";

// =============================================================================
// QUERY LIMITS
// =============================================================================

/// Maximum number of names in one batch lookup
pub const MAX_NAME_BATCH: usize = 100;

/// Maximum results for a single search
pub const MAX_SEARCH_LIMIT: usize = 100;

/// Maximum page size for a ranking request
pub const MAX_RANKING_LIMIT: usize = 1000;

/// Provinces reported by default in statistics
pub const DEFAULT_TOP_PROVINCES: usize = 10;
