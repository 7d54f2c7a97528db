use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::types::identifiers::ContestId;

/// One entry of the contest source.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContestDescriptor {
    #[serde(default)]
    pub id: Option<u32>,
    pub name: String,
    #[serde(rename = "type")]
    pub contest_type: String,
    pub year: i32,
    #[serde(default)]
    pub fall_semester: Option<bool>,
    #[serde(default)]
    pub full_score: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Contest {
    pub id: ContestId,
    pub name: String,
    #[serde(rename = "type")]
    pub contest_type: String,
    pub year: i32,
    pub fall_semester: bool,
    pub full_score: Option<f64>,
    /// Filled in once the dataset is frozen; zero before that.
    contestants: usize,
}

impl Contest {
    /// Number of records across the dataset that reference this contest.
    pub fn n_contestants(&self) -> usize {
        self.contestants
    }

    /// School year the contest belongs to: spring contests count towards the
    /// year that started the previous autumn.
    pub fn school_year(&self) -> i32 {
        if self.fall_semester {
            self.year
        } else {
            self.year - 1
        }
    }
}

#[derive(Debug, Default)]
pub struct ContestRegistry {
    contests: Vec<Contest>,
    by_id: HashMap<ContestId, usize>,
}

impl ContestRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a contest. Descriptors without an id get their position in
    /// the registry, or the next free id above it. Returns `None` when an
    /// explicit id is already taken.
    pub fn create(&mut self, descriptor: ContestDescriptor) -> Option<ContestId> {
        let id = match descriptor.id {
            Some(id) => ContestId(id),
            None => self.next_free_id(),
        };
        if self.by_id.contains_key(&id) {
            tracing::warn!(contest = %id, contest_name = %descriptor.name, "duplicate contest id, skipping");
            return None;
        }

        self.by_id.insert(id, self.contests.len());
        self.contests.push(Contest {
            id,
            name: descriptor.name,
            contest_type: descriptor.contest_type,
            year: descriptor.year,
            fall_semester: descriptor.fall_semester.unwrap_or(false),
            full_score: descriptor.full_score,
            contestants: 0,
        });
        Some(id)
    }

    /// Parse the contest source: a JSON array of [`ContestDescriptor`].
    /// Returns the number of descriptors skipped as duplicates.
    pub fn load_json(&mut self, json: &str) -> Result<usize, serde_json::Error> {
        let descriptors: Vec<ContestDescriptor> = serde_json::from_str(json)?;
        let mut skipped = 0;
        for descriptor in descriptors {
            if self.create(descriptor).is_none() {
                skipped += 1;
            }
        }
        Ok(skipped)
    }

    fn next_free_id(&self) -> ContestId {
        let mut id = ContestId(self.contests.len() as u32);
        while self.by_id.contains_key(&id) {
            id.0 += 1;
        }
        id
    }

    pub fn get(&self, id: ContestId) -> Option<&Contest> {
        self.by_id.get(&id).map(|&idx| &self.contests[idx])
    }

    pub fn get_all(&self) -> &[Contest] {
        &self.contests
    }

    pub fn len(&self) -> usize {
        self.contests.len()
    }

    pub fn is_empty(&self) -> bool {
        self.contests.is_empty()
    }

    /// Recompute every contest's contestant count from the given record
    /// references. Contests not referenced end up at zero.
    pub(crate) fn recount<I>(&mut self, references: I)
    where
        I: IntoIterator<Item = ContestId>,
    {
        for contest in &mut self.contests {
            contest.contestants = 0;
        }
        for id in references {
            if let Some(&idx) = self.by_id.get(&id) {
                self.contests[idx].contestants += 1;
            }
        }
    }
}
