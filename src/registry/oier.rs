use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::dataset::LoadReport;
use crate::record::{Record, RecordDecoder};
use crate::types::identifiers::{Gender, OierId};
use crate::types::query::ScoreField;

/// Fields in a contestant row:
/// `uid,initials,name,gender,enroll_middle,oierdb_score,ccf_score,ccf_level,records`.
pub const ROW_FIELDS: usize = 9;

/// A contestant. Homonyms are distinct entities told apart by
/// `qualified_name` and `uid`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Oier {
    pub id: OierId,
    /// External id from the source row.
    pub uid: i64,
    pub name: String,
    pub qualified_name: String,
    pub gender: Gender,
    pub enroll_middle: i32,
    pub oierdb_score: f64,
    pub ccf_score: f64,
    pub ccf_level: i32,
    records: Vec<Record>,
}

impl Oier {
    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn score(&self, field: ScoreField) -> f64 {
        match field {
            ScoreField::Oierdb => self.oierdb_score,
            ScoreField::Ccf => self.ccf_score,
        }
    }

    pub(crate) fn push_record(&mut self, record: Record) -> &Record {
        self.records.push(record);
        &self.records[self.records.len() - 1]
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RowSkip {
    #[error("expected 9 fields, found {0}")]
    TooFewFields(usize),
    #[error("malformed {field} field: {value:?}")]
    MalformedField { field: &'static str, value: String },
}

/// A contestant row split into typed fields; `records` is still encoded.
#[derive(Debug, Clone, PartialEq)]
pub struct OierRow<'a> {
    pub uid: i64,
    pub initials: &'a str,
    pub name: &'a str,
    pub gender: Gender,
    pub enroll_middle: i32,
    pub oierdb_score: f64,
    pub ccf_score: f64,
    pub ccf_level: i32,
    pub records: &'a str,
}

impl<'a> OierRow<'a> {
    pub fn parse(line: &'a str) -> Result<Self, RowSkip> {
        // Fields past the ninth are ignored.
        let parts: Vec<&str> = line.split(',').collect();
        if parts.len() < ROW_FIELDS {
            return Err(RowSkip::TooFewFields(parts.len()));
        }

        Ok(OierRow {
            uid: parse_field("uid", parts[0])?,
            initials: parts[1],
            name: parts[2],
            gender: Gender::from_flag(parts[3]),
            enroll_middle: parse_field("enroll_middle", parts[4])?,
            oierdb_score: parse_field("oierdb_score", parts[5])?,
            ccf_score: parse_field("ccf_score", parts[6])?,
            ccf_level: parse_field("ccf_level", parts[7])?,
            records: parts[8],
        })
    }

    pub fn qualified_name(&self) -> String {
        format!("{}({})", self.name, self.initials)
    }
}

fn parse_field<T: std::str::FromStr>(field: &'static str, value: &str) -> Result<T, RowSkip> {
    value.trim().parse().map_err(|_| RowSkip::MalformedField {
        field,
        value: value.to_string(),
    })
}

#[derive(Debug, Default)]
pub struct OierRegistry {
    oiers: Vec<Oier>,
    by_uid: HashMap<i64, OierId>,
    by_name: HashMap<String, Vec<OierId>>,
    /// Ranking by OIerDb score; insertion order until sorted.
    order: Vec<OierId>,
    /// Ranking by CCF score, built alongside `order`.
    ccf_order: Vec<OierId>,
    /// Position of each contestant in `order`, indexed by id.
    positions: Vec<usize>,
}

impl OierRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a contestant. A repeated `uid` reuses the existing entity and
    /// overwrites its identity fields; a repeated `name` alone does not.
    pub fn of(
        &mut self,
        name: impl Into<String>,
        qualified_name: impl Into<String>,
        gender: Gender,
        enroll_middle: i32,
        uid: i64,
    ) -> OierId {
        let name = name.into();
        let qualified_name = qualified_name.into();

        if let Some(&id) = self.by_uid.get(&uid) {
            let previous = std::mem::replace(&mut self.oiers[id.0 as usize].name, name.clone());
            if previous != name {
                if let Some(ids) = self.by_name.get_mut(&previous) {
                    ids.retain(|&other| other != id);
                }
                self.by_name.entry(name).or_default().push(id);
            }

            let oier = &mut self.oiers[id.0 as usize];
            oier.qualified_name = qualified_name;
            oier.gender = gender;
            oier.enroll_middle = enroll_middle;
            return id;
        }

        let id = OierId(self.oiers.len() as u32);
        self.by_uid.insert(uid, id);
        self.by_name.entry(name.clone()).or_default().push(id);
        self.positions.push(self.order.len());
        self.order.push(id);
        self.ccf_order.push(id);
        self.oiers.push(Oier {
            id,
            uid,
            name,
            qualified_name,
            gender,
            enroll_middle,
            oierdb_score: 0.0,
            ccf_score: 0.0,
            ccf_level: 0,
            records: Vec::new(),
        });
        id
    }

    /// Parse the contestant source, decoding each row's records with
    /// `decoder`. Anomalies are counted in `report` and otherwise ignored.
    pub fn load_text(&mut self, text: &str, decoder: &RecordDecoder<'_>, report: &mut LoadReport) {
        for (lineno, line) in text.lines().enumerate() {
            let line = line.trim();
            if line.is_empty() {
                continue;
            }

            let row = match OierRow::parse(line) {
                Ok(row) => row,
                Err(skip) => {
                    tracing::debug!(line = lineno + 1, "skipping contestant row: {skip}");
                    report.rows_skipped += 1;
                    continue;
                }
            };
            report.rows_loaded += 1;

            let id = self.of(
                row.name,
                row.qualified_name(),
                row.gender,
                row.enroll_middle,
                row.uid,
            );
            let oier = &mut self.oiers[id.0 as usize];
            oier.oierdb_score = row.oierdb_score;
            oier.ccf_score = row.ccf_score;
            oier.ccf_level = row.ccf_level;

            if row.records.is_empty() {
                continue;
            }
            for token in row.records.split('/') {
                match decoder.decode_into(token, oier) {
                    Ok(record) => {
                        report.records_decoded += 1;
                        if record.school.is_none() {
                            report.records_without_school += 1;
                        }
                    }
                    Err(reason) => {
                        tracing::debug!(line = lineno + 1, token, "dropping record: {reason}");
                        report.records_dropped += 1;
                    }
                }
            }
        }
    }

    /// Stable sort of every contestant by OIerDb score, descending. Also
    /// builds the CCF-score ranking. Ties keep load order in both.
    pub fn sort_by_score(&mut self) {
        let oiers = &self.oiers;
        let by_load = |a: &OierId, b: &OierId| a.cmp(b);

        self.order.sort_by(by_load);
        self.order.sort_by(|a, b| {
            oiers[b.0 as usize]
                .oierdb_score
                .total_cmp(&oiers[a.0 as usize].oierdb_score)
        });

        self.ccf_order.sort_by(by_load);
        self.ccf_order.sort_by(|a, b| {
            oiers[b.0 as usize]
                .ccf_score
                .total_cmp(&oiers[a.0 as usize].ccf_score)
        });

        for (pos, id) in self.order.iter().enumerate() {
            self.positions[id.0 as usize] = pos;
        }
        let positions = &self.positions;
        for ids in self.by_name.values_mut() {
            ids.sort_by_key(|id| positions[id.0 as usize]);
        }

        debug_assert!(self.order.windows(2).all(|w| {
            let (a, b) = (&oiers[w[0].0 as usize], &oiers[w[1].0 as usize]);
            a.oierdb_score.total_cmp(&b.oierdb_score).is_ge()
        }));
    }

    pub fn get(&self, id: OierId) -> Option<&Oier> {
        self.oiers.get(id.0 as usize)
    }

    pub fn get_by_uid(&self, uid: i64) -> Option<&Oier> {
        self.by_uid.get(&uid).and_then(|&id| self.get(id))
    }

    /// Every contestant in ranking order.
    pub fn get_all(&self) -> impl ExactSizeIterator<Item = &Oier> + '_ {
        self.order.iter().map(move |id| &self.oiers[id.0 as usize])
    }

    /// Contestant ids ranked by `field`, highest first.
    pub fn ranked(&self, field: ScoreField) -> &[OierId] {
        match field {
            ScoreField::Oierdb => &self.order,
            ScoreField::Ccf => &self.ccf_order,
        }
    }

    /// All contestants whose display name is exactly `name`, in ranking order.
    pub fn find_by_name(&self, name: &str) -> Vec<&Oier> {
        self.by_name
            .get(name)
            .map(|ids| ids.iter().map(|id| &self.oiers[id.0 as usize]).collect())
            .unwrap_or_default()
    }

    pub fn records(&self) -> impl Iterator<Item = &Record> + '_ {
        self.oiers.iter().flat_map(|oier| oier.records.iter())
    }

    pub fn len(&self) -> usize {
        self.oiers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.oiers.is_empty()
    }
}
