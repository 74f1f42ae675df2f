//! Console rendering of a [`Report`].

use crate::monthly::SeasonalAnalysis;
use crate::pipeline::Report;
use num_format::{Locale, ToFormattedString};
use std::fmt::Write;

/// Rendering knobs.
#[derive(Debug, Clone)]
pub struct RenderOptions {
    pub locale: String,
    pub show_consistency: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            locale: "en".into(),
            show_consistency: false,
        }
    }
}

/// Number formatting for one report: digit grouping plus decimal mark.
struct NumFmt {
    locale: &'static Locale,
    decimal: char,
}

impl NumFmt {
    /// Tags are matched case-insensitively, `-` and `_` alike (`de-DE`, `fi_FI`).
    /// Unknown tags render English numbers.
    fn new(tag: &str) -> Self {
        let tag = tag.trim().to_ascii_lowercase().replace('-', "_");
        let lang = tag.split('_').next().unwrap_or_default();
        let (locale, decimal) = match lang {
            "fi" => (&Locale::fi, ','),
            "sv" => (&Locale::sv, ','),
            "de" => (&Locale::de, ','),
            "fr" => (&Locale::fr, ','),
            "es" => (&Locale::es, ','),
            "it" => (&Locale::it, ','),
            "nl" => (&Locale::nl, ','),
            "pt" => (&Locale::pt, ','),
            _ => (&Locale::en, '.'),
        };
        Self { locale, decimal }
    }

    fn int(&self, v: i64) -> String {
        v.to_formatted_string(self.locale)
    }

    /// Up to 2 decimals, trailing zeros trimmed, grouped integer part.
    fn float(&self, v: f64) -> String {
        if !v.is_finite() {
            return "NA".to_string();
        }
        let s = format!("{:.2}", v.abs());
        let s = s.trim_end_matches('0').trim_end_matches('.');
        let (int_part, frac) = match s.split_once('.') {
            Some((i, f)) => (i, Some(f)),
            None => (s, None),
        };
        let grouped = int_part
            .parse::<i64>()
            .map(|i| i.to_formatted_string(self.locale))
            .unwrap_or_else(|_| int_part.to_string());
        let mut out = String::new();
        if v < 0.0 && s != "0" {
            out.push('-');
        }
        out.push_str(&grouped);
        if let Some(f) = frac {
            out.push(self.decimal);
            out.push_str(f);
        }
        out
    }

    fn pct(&self, v: Option<f64>) -> String {
        match v {
            Some(p) if p > 0.0 => format!("+{}%", self.float(p)),
            Some(p) => format!("{}%", self.float(p)),
            None => "n/a".to_string(),
        }
    }
}

/// Render the human-readable report.
pub fn render_report(report: &Report, opts: &RenderOptions) -> String {
    let nf = NumFmt::new(&opts.locale);
    let mut out = String::new();
    // Writing to a String cannot fail.
    let _ = write_report(&mut out, report, &nf, opts);
    out
}

fn write_report(
    out: &mut String,
    report: &Report,
    nf: &NumFmt,
    opts: &RenderOptions,
) -> std::fmt::Result {
    writeln!(out, "\n{:=^50}", " ZOO VISITORS ANALYSIS ")?;
    writeln!(out, "\nYear: {}\n", report.year)?;

    let d = &report.daily;
    writeln!(out, "=== Daily Statistics ===")?;
    writeln!(out, "Total visitors: {}", nf.int(d.total))?;
    writeln!(out, "Average daily: {}", nf.float(d.average))?;
    writeln!(out, "Standard deviation: {}", nf.float(d.std_dev))?;
    writeln!(out, "Peak day: {} visitors", nf.int(d.max))?;
    writeln!(out, "Quietest day: {} visitors\n", nf.int(d.min))?;

    writeln!(out, "=== Monthly Highlights ===")?;
    for m in &report.monthly {
        writeln!(out, "Month {}: {} visitors", m.month, nf.int(m.total))?;
    }

    writeln!(out, "\n=== Monthly Trends ===")?;
    for m in &report.monthly {
        writeln!(
            out,
            "{}: {} ({}), peak {} on {}, quietest {} on {}",
            m.name,
            m.trend.as_str(),
            nf.pct(m.change_pct),
            nf.int(m.peak_day.visitors),
            m.peak_day.date,
            nf.int(m.quietest_day.visitors),
            m.quietest_day.date,
        )?;
    }

    if let Some(c) = &report.comparison {
        writeln!(out, "\n=== Monthly Comparison ===")?;
        writeln!(
            out,
            "Busiest month: {} ({} visitors)",
            c.busiest_month.name,
            nf.int(c.busiest_month.visitors)
        )?;
        writeln!(
            out,
            "Quietest month: {} ({} visitors)",
            c.quietest_month.name,
            nf.int(c.quietest_month.visitors)
        )?;
        writeln!(
            out,
            "Most consistent: {} (std dev {})",
            c.most_consistent.name,
            nf.float(c.most_consistent.std_dev)
        )?;
        writeln!(
            out,
            "Most variable: {} (std dev {})",
            c.most_variable.name,
            nf.float(c.most_variable.std_dev)
        )?;
    }

    writeln!(out, "\n=== Seasonal Patterns ===")?;
    match &report.seasonal {
        SeasonalAnalysis::Complete(s) => {
            for season in &s.seasonal_avgs {
                writeln!(
                    out,
                    "{}: {} avg monthly visitors",
                    season.name,
                    nf.float(season.avg_visitors)
                )?;
            }
            writeln!(out, "Peak season: {}", s.peak_season.name)?;
            writeln!(out, "Off season: {}", s.off_season.name)?;
        }
        SeasonalAnalysis::Insufficient {
            warning,
            months_present,
        } => {
            writeln!(out, "{warning} ({months_present} of 12 months)")?;
        }
    }

    if opts.show_consistency {
        writeln!(out, "\n=== Consistency ===")?;
        if report.inconsistencies.is_empty() {
            writeln!(out, "All totals match their parts.")?;
        }
        for i in &report.inconsistencies {
            let label = match i.month {
                Some(m) => format!("Month {m}"),
                None => "Year".to_string(),
            };
            writeln!(
                out,
                "{label}: recorded {} but parts sum to {}",
                nf.int(i.recorded),
                nf.int(i.computed)
            )?;
        }
    }
    Ok(())
}
