//! Province and award-level code tables.
//!
//! The compressed record format stores common provinces and award levels as
//! small indices into these lists. Index stability is a property of a loaded
//! dataset: every lookup goes through the [`CodeTable`] owned by that dataset.

use serde::{Deserialize, Serialize};

pub const PROVINCES: &[&str] = &[
    "安徽", "北京", "福建", "甘肃", "广东", "广西", "贵州", "海南", "河北", "河南", "黑龙江",
    "湖北", "湖南", "吉林", "江苏", "江西", "辽宁", "内蒙古", "山东", "山西", "陕西", "上海",
    "四川", "天津", "新疆", "浙江", "重庆", "宁夏", "云南", "澳门", "香港", "青海", "西藏",
    "台湾",
];

pub const AWARD_LEVELS: &[&str] = &[
    "金牌", "银牌", "铜牌", "一等奖", "二等奖", "三等奖", "国际金牌", "国际银牌", "国际铜牌",
    "前5%", "前15%", "前25%", "1=", "2=", "3=", "荣誉提名",
];

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CodeTable {
    provinces: Vec<String>,
    award_levels: Vec<String>,
}

impl Default for CodeTable {
    fn default() -> Self {
        Self::new(
            PROVINCES.iter().map(|s| s.to_string()).collect(),
            AWARD_LEVELS.iter().map(|s| s.to_string()).collect(),
        )
    }
}

impl CodeTable {
    pub fn new(provinces: Vec<String>, award_levels: Vec<String>) -> Self {
        Self {
            provinces,
            award_levels,
        }
    }

    pub fn provinces(&self) -> &[String] {
        &self.provinces
    }

    pub fn award_levels(&self) -> &[String] {
        &self.award_levels
    }

    /// Resolve a province field that is either an index or a literal name.
    pub fn province(&self, field: &str) -> String {
        resolve(&self.provinces, field)
    }

    /// Resolve an award-level field that is either an index or a literal name.
    pub fn award_level(&self, field: &str) -> String {
        resolve(&self.award_levels, field)
    }
}

/// All-digit fields are indices; anything that fails to resolve (including an
/// out-of-range index) is kept verbatim.
fn resolve(table: &[String], field: &str) -> String {
    parse_index(field)
        .and_then(|idx| table.get(idx))
        .cloned()
        .unwrap_or_else(|| field.to_string())
}

/// Decimal index made of ASCII or full-width digits.
fn parse_index(field: &str) -> Option<usize> {
    if field.is_empty() {
        return None;
    }

    field.chars().try_fold(0usize, |acc, c| {
        let digit = match c {
            '0'..='9' => c as u32 - '0' as u32,
            '０'..='９' => c as u32 - '０' as u32,
            _ => return None,
        };
        acc.checked_mul(10)?.checked_add(digit as usize)
    })
}
