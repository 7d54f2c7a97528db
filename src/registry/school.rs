use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::types::identifiers::SchoolId;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct School {
    pub id: SchoolId,
    pub name: String,
    pub province: String,
    pub city: String,
    pub aliases: Vec<String>,
}

/// Owns every [`School`]; ids are dense, so lookup by id is a slice index.
#[derive(Debug, Default)]
pub struct SchoolRegistry {
    schools: Vec<School>,
    by_name: HashMap<String, SchoolId>,
}

impl SchoolRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn create(
        &mut self,
        name: impl Into<String>,
        province: impl Into<String>,
        city: impl Into<String>,
        aliases: Vec<String>,
    ) -> SchoolId {
        let id = SchoolId(self.schools.len() as u32);
        let school = School {
            id,
            name: name.into(),
            province: province.into(),
            city: city.into(),
            aliases,
        };

        // First school to claim a name or alias keeps it.
        self.by_name.entry(school.name.clone()).or_insert(id);
        for alias in &school.aliases {
            self.by_name.entry(alias.clone()).or_insert(id);
        }

        self.schools.push(school);
        id
    }

    /// Parse the school source: one `province,city,name[,alias]*` per line.
    /// Returns the number of lines skipped for having fewer than three fields.
    pub fn load_text(&mut self, text: &str) -> usize {
        let mut skipped = 0;

        for (lineno, line) in text.lines().enumerate() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            let parts: Vec<&str> = line.split(',').map(str::trim).collect();
            if parts.len() < 3 {
                tracing::debug!(line = lineno + 1, "skipping school line with {} fields", parts.len());
                skipped += 1;
                continue;
            }

            let aliases = parts[3..].iter().map(|s| s.to_string()).collect();
            self.create(parts[2], parts[0], parts[1], aliases);
        }

        skipped
    }

    pub fn get(&self, id: SchoolId) -> Option<&School> {
        self.schools.get(id.0 as usize)
    }

    pub fn find_by_name(&self, name: &str) -> Option<&School> {
        self.by_name.get(name).and_then(|&id| self.get(id))
    }

    pub fn get_all(&self) -> &[School] {
        &self.schools
    }

    pub fn len(&self) -> usize {
        self.schools.len()
    }

    pub fn is_empty(&self) -> bool {
        self.schools.is_empty()
    }
}
