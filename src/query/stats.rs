use std::collections::{BTreeMap, HashMap, HashSet};

use crate::dataset::Dataset;
use crate::types::identifiers::Gender;
use crate::types::view::{
    BasicStats, ContestTypeStats, GenderDistribution, ProvinceCount, Statistics,
};

pub fn statistics(dataset: &Dataset, top_provinces: usize) -> Statistics {
    let oiers = &dataset.oiers;

    let basic_stats = BasicStats {
        total_oiers: oiers.len(),
        total_contests: dataset.contests.len(),
        total_schools: dataset.schools.len(),
        total_records: oiers.records().count(),
    };

    let mut gender_distribution = GenderDistribution::default();
    // Each contestant counts once per distinct province.
    let mut provinces: HashMap<&str, usize> = HashMap::new();
    for oier in oiers.get_all() {
        match oier.gender {
            Gender::Male => gender_distribution.male += 1,
            Gender::Female => gender_distribution.female += 1,
            Gender::Unknown => gender_distribution.unknown += 1,
        }

        let seen: HashSet<&str> = oier.records().iter().map(|r| r.province.as_str()).collect();
        for province in seen {
            *provinces.entry(province).or_default() += 1;
        }
    }

    let mut province_distribution: Vec<ProvinceCount> = provinces
        .into_iter()
        .map(|(province, count)| ProvinceCount {
            province: province.to_string(),
            count,
        })
        .collect();
    province_distribution.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.province.cmp(&b.province)));
    province_distribution.truncate(top_provinces);

    let mut contest_types: BTreeMap<String, ContestTypeStats> = BTreeMap::new();
    for contest in dataset.contests.get_all() {
        let entry = contest_types.entry(contest.contest_type.clone()).or_default();
        entry.contests += 1;
        entry.contestants += contest.n_contestants();
    }

    Statistics {
        basic_stats,
        gender_distribution,
        province_distribution,
        contest_types,
    }
}
