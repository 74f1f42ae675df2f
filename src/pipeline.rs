use crate::error::Result;
use crate::models::YearRecord;
use crate::monthly::{
    Inconsistency, MonthlyComparison, MonthlyStats, SeasonalAnalysis, check_consistency,
    compare_months, compute_monthly_stats, detect_seasonal_patterns,
};
use crate::stats::{DailyStats, compute_daily_stats};
use crate::validate::validate;
use serde::Serialize;
use serde_json::Value;

/// Everything computed for one year of data; input to the renderer.
#[derive(Debug, Clone, Serialize)]
pub struct Report {
    pub year: i32,
    pub daily: DailyStats,
    pub monthly: MonthlyStats,
    pub comparison: Option<MonthlyComparison>,
    pub seasonal: SeasonalAnalysis,
    pub inconsistencies: Vec<Inconsistency>,
}

impl Report {
    /// Run both aggregators over an already decoded year.
    pub fn from_year(year: &YearRecord) -> Result<Self> {
        log::info!(
            "analyzing {} months / {} days of {}",
            year.months.len(),
            year.day_count(),
            year.year
        );
        let daily = compute_daily_stats(year)?;
        let monthly = compute_monthly_stats(year)?;
        let comparison = compare_months(&monthly);
        let seasonal = detect_seasonal_patterns(&monthly);
        Ok(Self {
            year: year.year,
            daily,
            comparison,
            seasonal,
            monthly,
            inconsistencies: check_consistency(year),
        })
    }
}

/// Validate a raw payload, decode it and compute the full report.
pub fn analyze(payload: &Value) -> Result<Report> {
    validate(payload)?;
    let year = YearRecord::from_value(payload)?;
    Report::from_year(&year)
}
