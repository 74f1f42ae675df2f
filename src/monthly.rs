//! Per-month statistics, month-over-month trends, cross-month comparison
//! and seasonal grouping.

use crate::dates::{format_iso_date, month_name};
use crate::error::{Result, ZooError};
use crate::models::{DayRecord, YearRecord};
use crate::stats::{mean, round2, sample_std_dev};
use serde::{Deserialize, Serialize, Serializer};

/// Direction of a month's total relative to the previously processed month.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Trend {
    Baseline,
    Increasing,
    Decreasing,
    Stable,
}

impl Trend {
    fn between(previous: i64, current: i64) -> Self {
        match current.cmp(&previous) {
            std::cmp::Ordering::Greater => Trend::Increasing,
            std::cmp::Ordering::Less => Trend::Decreasing,
            std::cmp::Ordering::Equal => Trend::Stable,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Trend::Baseline => "baseline",
            Trend::Increasing => "increasing",
            Trend::Decreasing => "decreasing",
            Trend::Stable => "stable",
        }
    }
}

/// A single extreme day within a month.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DayExtreme {
    /// ISO `YYYY-MM-DD`.
    pub date: String,
    pub visitors: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MonthlyStatsEntry {
    /// 1-based calendar month.
    pub month: u32,
    pub name: String,
    pub total: i64,
    pub daily_avg: f64,
    pub daily_std: f64,
    pub days_recorded: usize,
    pub peak_day: DayExtreme,
    pub quietest_day: DayExtreme,
    pub trend: Trend,
    /// Percent change from the previous month. `None` when the previous total is 0.
    pub change_pct: Option<f64>,
}

/// Ordered mapping month number → entry, in input order.
///
/// Built in a single pass; duplicate or out-of-range months are rejected
/// instead of silently overwriting entries.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MonthlyStats {
    entries: Vec<MonthlyStatsEntry>,
}

impl MonthlyStats {
    pub fn get(&self, month: u32) -> Option<&MonthlyStatsEntry> {
        self.entries.iter().find(|e| e.month == month)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, MonthlyStatsEntry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn insert(&mut self, entry: MonthlyStatsEntry) -> Result<()> {
        if self.get(entry.month).is_some() {
            return Err(ZooError::DuplicateMonth { month: entry.month });
        }
        self.entries.push(entry);
        Ok(())
    }
}

impl<'a> IntoIterator for &'a MonthlyStats {
    type Item = &'a MonthlyStatsEntry;
    type IntoIter = std::slice::Iter<'a, MonthlyStatsEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

// Serialized as a JSON object keyed by month number, keeping input order.
impl Serialize for MonthlyStats {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_map(self.entries.iter().map(|e| (e.month.to_string(), e)))
    }
}

/// First day with the extreme total according to `better`; earlier days win ties.
fn first_extreme<'a>(
    days: &'a [DayRecord],
    better: impl Fn(i64, i64) -> bool,
) -> Option<&'a DayRecord> {
    let mut it = days.iter();
    let mut best = it.next()?;
    for d in it {
        if better(d.total, best.total) {
            best = d;
        }
    }
    Some(best)
}

/// Compute statistics for each month of `year`, in input order.
pub fn compute_monthly_stats(year: &YearRecord) -> Result<MonthlyStats> {
    let mut out = MonthlyStats::default();
    let mut previous_total: Option<i64> = None;

    for record in &year.months {
        if record.month > 11 {
            return Err(ZooError::MonthOutOfRange {
                index: record.month,
            });
        }
        let month = record.number();
        let counts: Vec<i64> = record.days.iter().map(|d| d.total).collect();

        let daily_avg = mean(&counts).ok_or(ZooError::EmptyMonth { month })?;
        let daily_std = sample_std_dev(&counts).unwrap_or(0.0);
        let peak =
            first_extreme(&record.days, |a, b| a > b).ok_or(ZooError::EmptyMonth { month })?;
        let quiet =
            first_extreme(&record.days, |a, b| a < b).ok_or(ZooError::EmptyMonth { month })?;

        let (trend, change_pct) = match previous_total {
            None => (Trend::Baseline, Some(0.0)),
            Some(prev) => {
                let pct = if prev == 0 {
                    None
                } else {
                    Some(round2((record.total - prev) as f64 / prev as f64 * 100.0))
                };
                (Trend::between(prev, record.total), pct)
            }
        };

        out.insert(MonthlyStatsEntry {
            month,
            name: month_name(month)?.to_string(),
            total: record.total,
            daily_avg: round2(daily_avg),
            daily_std: round2(daily_std),
            days_recorded: record.days.len(),
            peak_day: DayExtreme {
                date: format_iso_date(year.year, month, peak.day),
                visitors: peak.total,
            },
            quietest_day: DayExtreme {
                date: format_iso_date(year.year, month, quiet.day),
                visitors: quiet.total,
            },
            trend,
            change_pct,
        })?;

        previous_total = Some(record.total);
    }

    log::debug!("monthly stats for {} months", out.len());
    Ok(out)
}

/// A month singled out by its visitor total.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MonthVolume {
    pub month: u32,
    pub name: String,
    pub visitors: i64,
}

/// A month singled out by the spread of its daily counts.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MonthSpread {
    pub month: u32,
    pub name: String,
    pub std_dev: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MonthlyComparison {
    pub busiest_month: MonthVolume,
    pub quietest_month: MonthVolume,
    pub most_consistent: MonthSpread,
    pub most_variable: MonthSpread,
}

fn first_by<'a, T: Copy>(
    stats: &'a MonthlyStats,
    key: impl Fn(&MonthlyStatsEntry) -> T,
    better: impl Fn(T, T) -> bool,
) -> Option<&'a MonthlyStatsEntry> {
    let mut it = stats.iter();
    let mut best = it.next()?;
    for e in it {
        if better(key(e), key(best)) {
            best = e;
        }
    }
    Some(best)
}

impl From<&MonthlyStatsEntry> for MonthVolume {
    fn from(e: &MonthlyStatsEntry) -> Self {
        Self {
            month: e.month,
            name: e.name.clone(),
            visitors: e.total,
        }
    }
}

impl From<&MonthlyStatsEntry> for MonthSpread {
    fn from(e: &MonthlyStatsEntry) -> Self {
        Self {
            month: e.month,
            name: e.name.clone(),
            std_dev: e.daily_std,
        }
    }
}

/// Busiest/quietest month by total and most consistent/variable by daily std.
/// Earlier months win ties. `None` for empty input.
pub fn compare_months(stats: &MonthlyStats) -> Option<MonthlyComparison> {
    let busiest = first_by(stats, |e| e.total, |a: i64, b| a > b)?;
    let quietest = first_by(stats, |e| e.total, |a: i64, b| a < b)?;
    let consistent = first_by(stats, |e| e.daily_std, |a: f64, b| a < b)?;
    let variable = first_by(stats, |e| e.daily_std, |a: f64, b| a > b)?;

    Some(MonthlyComparison {
        busiest_month: busiest.into(),
        quietest_month: quietest.into(),
        most_consistent: consistent.into(),
        most_variable: variable.into(),
    })
}

/// Fixed meteorological seasons, in tie-break order.
pub const SEASONS: [(&str, [u32; 3]); 4] = [
    ("Winter", [12, 1, 2]),
    ("Spring", [3, 4, 5]),
    ("Summer", [6, 7, 8]),
    ("Fall", [9, 10, 11]),
];

pub const INSUFFICIENT_SEASONAL_DATA: &str = "Insufficient data for full seasonal analysis";

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SeasonAverage {
    pub name: String,
    pub months: [u32; 3],
    pub avg_visitors: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SeasonalSummary {
    pub peak_season: SeasonAverage,
    pub off_season: SeasonAverage,
    /// All four seasons in Winter, Spring, Summer, Fall order.
    pub seasonal_avgs: Vec<SeasonAverage>,
}

/// Outcome of seasonal detection: a summary, or a warning when months are missing.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum SeasonalAnalysis {
    Complete(SeasonalSummary),
    Insufficient {
        warning: String,
        months_present: usize,
    },
}

impl SeasonalAnalysis {
    pub fn summary(&self) -> Option<&SeasonalSummary> {
        match self {
            SeasonalAnalysis::Complete(s) => Some(s),
            SeasonalAnalysis::Insufficient { .. } => None,
        }
    }
}

/// Group the twelve months into seasons and pick the peak and off season.
///
/// Missing months degrade to [`SeasonalAnalysis::Insufficient`] rather than an error.
pub fn detect_seasonal_patterns(stats: &MonthlyStats) -> SeasonalAnalysis {
    let insufficient = || {
        log::info!(
            "seasonal analysis skipped: {} of 12 months present",
            stats.len()
        );
        SeasonalAnalysis::Insufficient {
            warning: INSUFFICIENT_SEASONAL_DATA.to_string(),
            months_present: stats.len(),
        }
    };
    if stats.len() < 12 {
        return insufficient();
    }

    let mut avgs = Vec::with_capacity(SEASONS.len());
    for (name, months) in SEASONS {
        let mut totals = Vec::with_capacity(months.len());
        for m in months {
            match stats.get(m) {
                Some(e) => totals.push(e.total),
                None => return insufficient(),
            }
        }
        let Some(avg) = mean(&totals) else {
            return insufficient();
        };
        avgs.push(SeasonAverage {
            name: name.to_string(),
            months,
            avg_visitors: round2(avg),
        });
    }

    let (mut peak, mut off) = (0, 0);
    for (i, s) in avgs.iter().enumerate().skip(1) {
        if s.avg_visitors > avgs[peak].avg_visitors {
            peak = i;
        }
        if s.avg_visitors < avgs[off].avg_visitors {
            off = i;
        }
    }

    SeasonalAnalysis::Complete(SeasonalSummary {
        peak_season: avgs[peak].clone(),
        off_season: avgs[off].clone(),
        seasonal_avgs: avgs,
    })
}

/// A recorded total that disagrees with the sum of its parts.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Inconsistency {
    /// 1-based month, or `None` for the year-level total.
    pub month: Option<u32>,
    pub recorded: i64,
    pub computed: i64,
}

/// List months whose `total` differs from their day sum, and the year itself
/// if its `total` differs from the month totals. Informational only.
pub fn check_consistency(year: &YearRecord) -> Vec<Inconsistency> {
    let mut out: Vec<Inconsistency> = year
        .months
        .iter()
        .filter(|m| m.total != m.days_sum())
        .map(|m| Inconsistency {
            month: Some(m.number()),
            recorded: m.total,
            computed: m.days_sum(),
        })
        .collect();

    let months_sum: i64 = year.months.iter().map(|m| m.total).sum();
    if months_sum != year.total {
        out.push(Inconsistency {
            month: None,
            recorded: year.total,
            computed: months_sum,
        });
    }
    for i in &out {
        log::warn!(
            "total mismatch ({}): recorded {} vs computed {}",
            i.month.map_or("year".to_string(), |m| format!("month {m}")),
            i.recorded,
            i.computed
        );
    }
    out
}
