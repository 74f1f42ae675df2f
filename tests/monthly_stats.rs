use serde_json::json;
use zoo_visitors::ZooError;
use zoo_visitors::models::{DayRecord, MonthRecord, YearRecord};
use zoo_visitors::monthly::{
    Trend, check_consistency, compare_months, compute_monthly_stats,
};
use zoo_visitors::stats::compute_daily_stats;

fn days(totals: &[i64]) -> Vec<DayRecord> {
    totals
        .iter()
        .enumerate()
        .map(|(i, &t)| DayRecord {
            day: i as u32 + 1,
            total: t,
            id: json!(format!("id-{i}")),
        })
        .collect()
}

fn month(idx: u32, totals: &[i64]) -> MonthRecord {
    MonthRecord {
        month: idx,
        total: totals.iter().sum(),
        days: days(totals),
    }
}

/// Month whose recorded total is set independently of its days.
fn month_with_total(idx: u32, total: i64) -> MonthRecord {
    MonthRecord {
        month: idx,
        total,
        days: days(&[total / 2, total - total / 2]),
    }
}

fn year(months: Vec<MonthRecord>) -> YearRecord {
    YearRecord {
        year: 2024,
        total: months.iter().map(|m| m.total).sum(),
        months,
    }
}

#[test]
fn trend_follows_input_order() {
    let y = year(vec![
        month_with_total(0, 100),
        month_with_total(1, 150),
        month_with_total(2, 150),
        month_with_total(3, 90),
    ]);
    let stats = compute_monthly_stats(&y).unwrap();
    let trends: Vec<Trend> = stats.iter().map(|e| e.trend).collect();
    assert_eq!(
        trends,
        vec![
            Trend::Baseline,
            Trend::Increasing,
            Trend::Stable,
            Trend::Decreasing
        ]
    );
    assert_eq!(stats.get(1).unwrap().change_pct, Some(0.0));
    assert_eq!(stats.get(2).unwrap().change_pct, Some(50.0));
    assert_eq!(stats.get(3).unwrap().change_pct, Some(0.0));
    assert_eq!(stats.get(4).unwrap().change_pct, Some(-40.0));
}

#[test]
fn change_pct_from_200_to_250_is_25() {
    let y = year(vec![month_with_total(4, 200), month_with_total(5, 250)]);
    let stats = compute_monthly_stats(&y).unwrap();
    assert_eq!(stats.get(6).unwrap().change_pct, Some(25.0));
}

#[test]
fn change_pct_from_zero_base_is_undefined() {
    let y = year(vec![month(0, &[0, 0]), month(1, &[10, 5])]);
    let stats = compute_monthly_stats(&y).unwrap();
    let feb = stats.get(2).unwrap();
    assert_eq!(feb.trend, Trend::Increasing);
    assert_eq!(feb.change_pct, None);
}

#[test]
fn trend_uses_input_order_not_calendar_order() {
    // March listed before January.
    let y = year(vec![month_with_total(2, 300), month_with_total(0, 100)]);
    let stats = compute_monthly_stats(&y).unwrap();
    let keys: Vec<u32> = stats.iter().map(|e| e.month).collect();
    assert_eq!(keys, vec![3, 1]);
    assert_eq!(stats.get(3).unwrap().trend, Trend::Baseline);
    assert_eq!(stats.get(1).unwrap().trend, Trend::Decreasing);
}

#[test]
fn entry_fields_are_computed_per_month() {
    let y = year(vec![month(6, &[10, 30, 20, 30, 5])]);
    let stats = compute_monthly_stats(&y).unwrap();
    let jul = stats.get(7).unwrap();

    assert_eq!(jul.name, "July");
    assert_eq!(jul.total, 95);
    assert_eq!(jul.days_recorded, 5);
    assert_eq!(jul.daily_avg, 19.0);
    assert_eq!(jul.daily_std, 11.4);
    // Tie on 30: the earlier day (2nd) wins.
    assert_eq!(jul.peak_day.date, "2024-07-02");
    assert_eq!(jul.peak_day.visitors, 30);
    assert_eq!(jul.quietest_day.date, "2024-07-05");
    assert_eq!(jul.quietest_day.visitors, 5);
}

#[test]
fn quietest_day_tie_prefers_earlier_day() {
    let y = year(vec![month(11, &[7, 3, 9, 3])]);
    let stats = compute_monthly_stats(&y).unwrap();
    let dec = stats.get(12).unwrap();
    assert_eq!(dec.quietest_day.date, "2024-12-02");
}

#[test]
fn single_day_month_has_zero_std() {
    let y = year(vec![month(1, &[42])]);
    let stats = compute_monthly_stats(&y).unwrap();
    assert_eq!(stats.get(2).unwrap().daily_std, 0.0);
    assert_eq!(stats.get(2).unwrap().daily_avg, 42.0);
}

#[test]
fn empty_month_is_rejected() {
    let y = year(vec![month(0, &[1, 2]), month(1, &[])]);
    assert!(matches!(
        compute_monthly_stats(&y),
        Err(ZooError::EmptyMonth { month: 2 })
    ));
}

#[test]
fn duplicate_month_is_rejected() {
    let y = year(vec![month(3, &[1, 2]), month(3, &[4, 5])]);
    assert!(matches!(
        compute_monthly_stats(&y),
        Err(ZooError::DuplicateMonth { month: 4 })
    ));
}

#[test]
fn out_of_range_month_is_rejected() {
    let y = year(vec![month(12, &[1, 2])]);
    assert!(matches!(
        compute_monthly_stats(&y),
        Err(ZooError::MonthOutOfRange { index: 12 })
    ));
}

#[test]
fn monthly_totals_sum_to_daily_total_for_consistent_year() {
    let months: Vec<MonthRecord> = (0..12)
        .map(|i| month(i, &[(i as i64 + 1) * 10, 3, (i as i64) * 7]))
        .collect();
    let y = year(months);
    let daily = compute_daily_stats(&y).unwrap();
    let monthly = compute_monthly_stats(&y).unwrap();
    let sum: i64 = monthly.iter().map(|e| e.total).sum();
    assert_eq!(sum, daily.total);
    assert!(check_consistency(&y).is_empty());
}

#[test]
fn consistency_check_reports_mismatches() {
    let mut y = year(vec![month(0, &[1, 2]), month(1, &[3, 4])]);
    y.months[1].total = 100;
    let found = check_consistency(&y);
    assert_eq!(found.len(), 2);
    assert_eq!(found[0].month, Some(2));
    assert_eq!(found[0].recorded, 100);
    assert_eq!(found[0].computed, 7);
    // Year total was computed before the edit, so it no longer matches months.
    assert_eq!(found[1].month, None);
    assert_eq!(found[1].recorded, 10);
    assert_eq!(found[1].computed, 103);
}

#[test]
fn compare_months_picks_extremes_with_first_tie_break() {
    let y = year(vec![
        month(0, &[10, 10, 10]), // total 30, std 0
        month(1, &[5, 45]),      // total 50, std 28.28
        month(2, &[20, 30]),     // total 50, std 7.07
        month(3, &[1, 1]),       // total 2, std 0
    ]);
    let stats = compute_monthly_stats(&y).unwrap();
    let c = compare_months(&stats).unwrap();

    assert_eq!(c.busiest_month.month, 2);
    assert_eq!(c.busiest_month.name, "February");
    assert_eq!(c.busiest_month.visitors, 50);
    assert_eq!(c.quietest_month.month, 4);
    assert_eq!(c.quietest_month.visitors, 2);
    assert_eq!(c.most_consistent.month, 1);
    assert_eq!(c.most_consistent.std_dev, 0.0);
    assert_eq!(c.most_variable.month, 2);
    assert_eq!(c.most_variable.std_dev, 28.28);
}

#[test]
fn compare_months_on_empty_is_none() {
    let stats = compute_monthly_stats(&year(vec![])).unwrap();
    assert!(stats.is_empty());
    assert!(compare_months(&stats).is_none());
}

#[test]
fn monthly_stats_serialize_keyed_by_month() {
    let y = year(vec![month(0, &[1, 2]), month(1, &[0, 0])]);
    let stats = compute_monthly_stats(&y).unwrap();
    let v = serde_json::to_value(&stats).unwrap();
    assert_eq!(v["1"]["name"], "January");
    assert_eq!(v["1"]["trend"], "baseline");
    assert_eq!(v["2"]["trend"], "decreasing");
    assert_eq!(v["2"]["change_pct"], json!(-100.0));
}
