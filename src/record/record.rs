use serde::{Deserialize, Serialize};

use crate::types::identifiers::{ContestId, Gender, OierId, SchoolId};

/// One award result. Owned by its contestant; contest and school are
/// references into the registries.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Record {
    pub oier: OierId,
    pub contest: ContestId,
    pub score: Option<f64>,
    /// 0 means unranked or unknown.
    pub rank: i32,
    pub level: String,
    pub school: Option<SchoolId>,
    pub province: String,
    /// Owner's gender at decode time.
    pub gender: Gender,
    /// Enrolment-year hint carried by the token, if any.
    pub enroll_middle: Option<i32>,
    pub keep_grade: bool,
}
