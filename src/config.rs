//! Where the three dataset sources are read from.

use std::env;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_CONTESTS_PATH, DEFAULT_OIERS_PATH, DEFAULT_SCHOOLS_PATH};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoadConfig {
    pub schools_path: PathBuf,
    pub contests_path: PathBuf,
    pub oiers_path: PathBuf,
}

impl Default for LoadConfig {
    fn default() -> Self {
        Self {
            schools_path: DEFAULT_SCHOOLS_PATH.into(),
            contests_path: DEFAULT_CONTESTS_PATH.into(),
            oiers_path: DEFAULT_OIERS_PATH.into(),
        }
    }
}

impl LoadConfig {
    /// Defaults, overridden by `OIERDB_SCHOOLS`, `OIERDB_CONTESTS` and
    /// `OIERDB_OIERS` when set.
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            schools_path: env_path("OIERDB_SCHOOLS").unwrap_or(defaults.schools_path),
            contests_path: env_path("OIERDB_CONTESTS").unwrap_or(defaults.contests_path),
            oiers_path: env_path("OIERDB_OIERS").unwrap_or(defaults.oiers_path),
        }
    }

    /// All three sources under one directory, using the default file names.
    pub fn rooted_at(root: impl Into<PathBuf>) -> Self {
        let root = root.into();
        let defaults = Self::default();
        Self {
            schools_path: root.join(defaults.schools_path),
            contests_path: root.join(defaults.contests_path),
            oiers_path: root.join(defaults.oiers_path),
        }
    }
}

fn env_path(key: &str) -> Option<PathBuf> {
    env::var_os(key).filter(|v| !v.is_empty()).map(PathBuf::from)
}
