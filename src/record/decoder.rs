use thiserror::Error;

use crate::record::Record;
use crate::registry::{ContestRegistry, Oier, SchoolRegistry};
use crate::types::codes::CodeTable;
use crate::types::identifiers::{ContestId, SchoolId};

/// Fields in a well-formed token:
/// `contest_id:school_id:score:rank:province:level[:enroll_middle]`.
pub const TOKEN_FIELDS: usize = 6;

/// Why a token contributed nothing to the graph.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DropReason {
    #[error("expected 6 fields, found {0}")]
    TooFewFields(usize),
    #[error("malformed {field} field: {value:?}")]
    MalformedField { field: &'static str, value: String },
    #[error("unknown contest {0}")]
    UnknownContest(ContestId),
}

#[derive(Debug, Clone, PartialEq)]
pub enum Decoded {
    Record(Record),
    Dropped(DropReason),
}

impl Decoded {
    pub fn record(&self) -> Option<&Record> {
        match self {
            Decoded::Record(record) => Some(record),
            Decoded::Dropped(_) => None,
        }
    }
}

/// Read-only view over the registries a token is resolved against.
pub struct RecordDecoder<'a> {
    codes: &'a CodeTable,
    schools: &'a SchoolRegistry,
    contests: &'a ContestRegistry,
}

impl<'a> RecordDecoder<'a> {
    pub fn new(
        codes: &'a CodeTable,
        schools: &'a SchoolRegistry,
        contests: &'a ContestRegistry,
    ) -> Self {
        Self {
            codes,
            schools,
            contests,
        }
    }

    /// Decode a token for `owner` without touching it.
    pub fn decode(&self, token: &str, owner: &Oier) -> Decoded {
        match self.parse(token, owner) {
            Ok(record) => Decoded::Record(record),
            Err(reason) => Decoded::Dropped(reason),
        }
    }

    /// Decode a token and append the record to `owner` on success.
    pub fn decode_into<'o>(
        &self,
        token: &str,
        owner: &'o mut Oier,
    ) -> Result<&'o Record, DropReason> {
        let record = self.parse(token, owner)?;
        Ok(owner.push_record(record))
    }

    fn parse(&self, token: &str, owner: &Oier) -> Result<Record, DropReason> {
        let parts: Vec<&str> = token.trim().split(':').map(str::trim).collect();
        if parts.len() < TOKEN_FIELDS {
            return Err(DropReason::TooFewFields(parts.len()));
        }

        let contest = ContestId(parse_field("contest_id", parts[0])?);
        if self.contests.get(contest).is_none() {
            return Err(DropReason::UnknownContest(contest));
        }
        let school = SchoolId(parse_field("school_id", parts[1])?);
        let score = match parts[2] {
            "" => None,
            s => Some(parse_field::<f64>("score", s)?),
        };
        let rank = match parts[3] {
            "" => 0,
            s => parse_field::<i32>("rank", s)?,
        };

        // `level;year` marks a record whose grade must be kept as-is.
        let (level_field, keep_grade, kept_year) = match parts[5].split_once(';') {
            Some((level, year)) => (level.trim(), true, year.trim().parse::<i32>().ok()),
            None => (parts[5], false, None),
        };
        let enroll_middle =
            kept_year.or_else(|| parts.get(6).and_then(|s| s.parse().ok()));

        Ok(Record {
            oier: owner.id,
            contest,
            score,
            rank,
            level: self.codes.award_level(level_field),
            school: self.schools.get(school).map(|s| s.id),
            province: self.codes.province(parts[4]),
            gender: owner.gender,
            enroll_middle,
            keep_grade,
        })
    }
}

fn parse_field<T: std::str::FromStr>(field: &'static str, value: &str) -> Result<T, DropReason> {
    value.trim().parse().map_err(|_| DropReason::MalformedField {
        field,
        value: value.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::{ContestDescriptor, OierRegistry};
    use crate::types::identifiers::{Gender, OierId};

    fn fixtures() -> (CodeTable, SchoolRegistry, ContestRegistry, OierRegistry) {
        let mut schools = SchoolRegistry::new();
        schools.create("Test MS", "北京", "北京", vec![]);

        let mut contests = ContestRegistry::new();
        contests.create(ContestDescriptor {
            id: Some(5),
            name: "NOIP2020".into(),
            contest_type: "NOIP".into(),
            year: 2020,
            fall_semester: Some(true),
            full_score: None,
        });

        let mut oiers = OierRegistry::new();
        oiers.of("Alice", "Alice(AB)", Gender::Female, 2019, 1);

        (CodeTable::default(), schools, contests, oiers)
    }

    #[test]
    fn decodes_indexed_fields() {
        let (codes, schools, contests, oiers) = fixtures();
        let decoder = RecordDecoder::new(&codes, &schools, &contests);
        let owner = oiers.get(OierId(0)).expect("owner");

        let decoded = decoder.decode("5:0:95.0:1:2:1", owner);
        let record = decoded.record().expect("record");

        assert_eq!(record.contest, ContestId(5));
        assert_eq!(record.school, Some(SchoolId(0)));
        assert_eq!(record.score, Some(95.0));
        assert_eq!(record.rank, 1);
        assert_eq!(record.province, codes.provinces()[2]);
        assert_eq!(record.level, codes.award_levels()[1]);
        assert_eq!(record.gender, Gender::Female);
        assert_eq!(record.enroll_middle, None);
        assert!(!record.keep_grade);
    }

    #[test]
    fn empty_score_and_rank() {
        let (codes, schools, contests, oiers) = fixtures();
        let decoder = RecordDecoder::new(&codes, &schools, &contests);
        let owner = oiers.get(OierId(0)).expect("owner");

        let decoded = decoder.decode("5:0:::湖南:一等奖", owner);
        let record = decoded.record().expect("record");
        assert_eq!(record.score, None);
        assert_eq!(record.rank, 0);
        assert_eq!(record.province, "湖南");
        assert_eq!(record.level, "一等奖");
    }

    #[test]
    fn too_few_fields() {
        let (codes, schools, contests, oiers) = fixtures();
        let decoder = RecordDecoder::new(&codes, &schools, &contests);
        let owner = oiers.get(OierId(0)).expect("owner");

        assert_eq!(
            decoder.decode("5:0:95.0:1:2", owner),
            Decoded::Dropped(DropReason::TooFewFields(5))
        );
    }

    #[test]
    fn malformed_contest_id() {
        let (codes, schools, contests, oiers) = fixtures();
        let decoder = RecordDecoder::new(&codes, &schools, &contests);
        let owner = oiers.get(OierId(0)).expect("owner");

        assert!(matches!(
            decoder.decode("x:0:95.0:1:2:1", owner),
            Decoded::Dropped(DropReason::MalformedField { field: "contest_id", .. })
        ));
    }

    #[test]
    fn grade_hints() {
        let (codes, schools, contests, oiers) = fixtures();
        let decoder = RecordDecoder::new(&codes, &schools, &contests);
        let owner = oiers.get(OierId(0)).expect("owner");

        let decoded = decoder.decode("5:0:95:1:2:1:2018", owner);
        let record = decoded.record().expect("record");
        assert_eq!(record.enroll_middle, Some(2018));
        assert!(!record.keep_grade);

        let decoded = decoder.decode("5:0:95:1:2:1;2017", owner);
        let record = decoded.record().expect("record");
        assert_eq!(record.level, codes.award_levels()[1]);
        assert_eq!(record.enroll_middle, Some(2017));
        assert!(record.keep_grade);
    }
}
