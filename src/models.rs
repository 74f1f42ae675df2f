use serde::{Deserialize, Serialize};
use serde_json::Value;

/// One calendar year of visitor data as returned by the API (root of the payload).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct YearRecord {
    pub year: i32,
    pub total: i64,
    pub months: Vec<MonthRecord>,
}

/// Raw month entry. `month` is 0-based (0 = January).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MonthRecord {
    pub month: u32,
    /// Expected to equal the sum of `days[*].total`; not enforced.
    pub total: i64,
    pub days: Vec<DayRecord>,
}

impl MonthRecord {
    /// 1-based calendar month used as key in derived statistics.
    pub fn number(&self) -> u32 {
        self.month + 1
    }

    /// Sum of the recorded day totals.
    pub fn days_sum(&self) -> i64 {
        self.days.iter().map(|d| d.total).sum()
    }
}

/// Raw day entry. `day` is the 1-based day of month.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DayRecord {
    pub day: u32,
    pub total: i64,
    /// Opaque identifier from the source; carried through untouched.
    pub id: Value,
}

impl YearRecord {
    /// Decode a payload that already passed [`crate::validate::validate`].
    pub fn from_value(payload: &Value) -> crate::error::Result<Self> {
        Self::deserialize(payload).map_err(crate::error::ZooError::Decode)
    }

    /// Visitor counts of every recorded day, months first, then days.
    pub fn daily_counts(&self) -> impl Iterator<Item = i64> + '_ {
        self.months
            .iter()
            .flat_map(|m| m.days.iter().map(|d| d.total))
    }

    pub fn day_count(&self) -> usize {
        self.months.iter().map(|m| m.days.len()).sum()
    }
}
