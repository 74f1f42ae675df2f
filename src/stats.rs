use crate::error::{Result, ZooError};
use crate::models::YearRecord;
use serde::{Deserialize, Serialize};

/// Summary statistics over every recorded day of the year.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DailyStats {
    pub total: i64,
    pub average: f64,
    pub std_dev: f64,
    pub max: i64,
    pub min: i64,
    pub days_recorded: usize,
}

/// Round to two decimal places, ties to even (125.125 -> 125.12).
pub fn round2(x: f64) -> f64 {
    (x * 100.0).round_ties_even() / 100.0
}

/// Arithmetic mean; `None` for an empty slice.
pub fn mean(vals: &[i64]) -> Option<f64> {
    if vals.is_empty() {
        return None;
    }
    Some(vals.iter().map(|&v| v as f64).sum::<f64>() / vals.len() as f64)
}

/// Sample standard deviation (N - 1 denominator); `None` below two values.
pub fn sample_std_dev(vals: &[i64]) -> Option<f64> {
    if vals.len() < 2 {
        return None;
    }
    let m = mean(vals)?;
    let ss: f64 = vals.iter().map(|&v| (v as f64 - m).powi(2)).sum();
    Some((ss / (vals.len() - 1) as f64).sqrt())
}

/// Flatten all day totals of `year` and summarize them.
///
/// Fails with [`ZooError::InsufficientData`] when fewer than two days are
/// recorded, since the sample standard deviation is undefined there.
pub fn compute_daily_stats(year: &YearRecord) -> Result<DailyStats> {
    let counts: Vec<i64> = year.daily_counts().collect();
    let insufficient = || ZooError::InsufficientData {
        needed: 2,
        found: counts.len(),
    };

    let std_dev = sample_std_dev(&counts).ok_or_else(insufficient)?;
    let average = mean(&counts).ok_or_else(insufficient)?;
    let max = counts.iter().copied().max().ok_or_else(insufficient)?;
    let min = counts.iter().copied().min().ok_or_else(insufficient)?;

    log::debug!("daily stats over {} day records", counts.len());
    Ok(DailyStats {
        total: counts.iter().sum(),
        average: round2(average),
        std_dev: round2(std_dev),
        max,
        min,
        days_recorded: counts.len(),
    })
}
