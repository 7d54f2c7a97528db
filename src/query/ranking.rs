use crate::dataset::Dataset;
use crate::registry::Oier;
use crate::types::query::ScoreField;

/// The `[offset, offset + limit)` window of the ranking by `field`.
/// An offset past the end yields an empty page.
pub fn rank<'a>(dataset: &'a Dataset, field: ScoreField, limit: usize, offset: usize) -> Vec<&'a Oier> {
    let ranked = dataset.oiers.ranked(field);
    if offset >= ranked.len() {
        return Vec::new();
    }

    let end = offset.saturating_add(limit).min(ranked.len());
    let page: Vec<&Oier> = ranked[offset..end]
        .iter()
        .filter_map(|&id| dataset.oiers.get(id))
        .collect();

    debug_assert!(page
        .windows(2)
        .all(|w| w[0].score(field).total_cmp(&w[1].score(field)).is_ge()));

    page
}
