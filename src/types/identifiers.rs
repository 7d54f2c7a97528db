use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use std::fmt;

/// Dense school id, assigned in creation order starting at 0.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SchoolId(pub u32);

/// Contest id as given by the contest source (or its position when absent).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ContestId(pub u32);

/// Registry-local contestant handle. Not the external id from the source row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OierId(pub u32);

macro_rules! impl_display_id {
    ($($ty:ty),*) => {
        $(impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        })*
    };
}

impl_display_id!(SchoolId, ContestId, OierId);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Male,
    Female,
    #[default]
    Unknown,
}

impl Gender {
    /// Decode the row flag: `1` male, `-1` female, anything else unknown.
    pub fn from_flag(flag: &str) -> Self {
        match flag.trim() {
            "1" => Gender::Male,
            "-1" => Gender::Female,
            _ => Gender::Unknown,
        }
    }

    /// Label used in rendered output.
    pub fn label(self) -> &'static str {
        match self {
            Gender::Male => "男",
            Gender::Female => "女",
            Gender::Unknown => "",
        }
    }
}

/// Content hash of the three sources a dataset was built from.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DatasetVersion(String);

impl DatasetVersion {
    pub fn from_sources(schools: &str, contests: &str, oiers: &str) -> Self {
        let mut hasher = Sha256::new();
        // Length-prefix each part so moving bytes between sources changes the hash.
        for part in [schools, contests, oiers] {
            hasher.update((part.len() as u64).to_le_bytes());
            hasher.update(part.as_bytes());
        }

        let hash = hasher.finalize();
        let hex = hex::encode(hash);

        DatasetVersion(format!("sha256:{hex}"))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for DatasetVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
