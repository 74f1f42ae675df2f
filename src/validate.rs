//! Structural checks on the raw API payload.
//!
//! Validation is fail-fast: the first missing field aborts the walk, so months
//! after a broken one are never inspected. Values, ranges and sums are not checked.

use crate::error::{Result, SchemaLevel, ZooError};
use serde_json::{Map, Value};

const TOP_LEVEL_KEYS: [&str; 3] = ["year", "total", "months"];
const MONTH_KEYS: [&str; 2] = ["total", "days"];
const DAY_KEYS: [&str; 3] = ["day", "total", "id"];

fn missing_keys<'a>(obj: &Map<String, Value>, keys: &[&'a str]) -> Vec<&'a str> {
    keys.iter().copied().filter(|k| !obj.contains_key(*k)).collect()
}

fn schema_err(level: SchemaLevel, detail: String) -> ZooError {
    ZooError::Schema { level, detail }
}

/// Check that `payload` has the year → months → days shape.
///
/// Returns `Ok(true)` on success, or a [`ZooError::Schema`] naming the level
/// (top-level / month-level / day-level) of the first violation.
pub fn validate(payload: &Value) -> Result<bool> {
    let top = payload
        .as_object()
        .ok_or_else(|| schema_err(SchemaLevel::TopLevel, "payload is not an object".into()))?;

    let missing = missing_keys(top, &TOP_LEVEL_KEYS);
    if !missing.is_empty() {
        return Err(schema_err(
            SchemaLevel::TopLevel,
            format!("missing {}", missing.join(", ")),
        ));
    }

    let months = top["months"]
        .as_array()
        .ok_or_else(|| schema_err(SchemaLevel::TopLevel, "`months` is not a list".into()))?;

    for (mi, month) in months.iter().enumerate() {
        let obj = month.as_object().ok_or_else(|| {
            schema_err(SchemaLevel::Month, format!("entry {mi} is not an object"))
        })?;

        // `month` must be an integer, not merely present.
        if !obj.get("month").is_some_and(|v| v.is_i64() || v.is_u64()) {
            return Err(schema_err(
                SchemaLevel::Month,
                format!("entry {mi} has no integer `month`"),
            ));
        }

        let missing = missing_keys(obj, &MONTH_KEYS);
        if !missing.is_empty() {
            return Err(schema_err(
                SchemaLevel::Month,
                format!("entry {mi} missing {}", missing.join(", ")),
            ));
        }

        let days = obj["days"].as_array().ok_or_else(|| {
            schema_err(SchemaLevel::Month, format!("entry {mi} `days` is not a list"))
        })?;

        for (di, day) in days.iter().enumerate() {
            let missing = match day.as_object() {
                Some(d) => missing_keys(d, &DAY_KEYS),
                None => DAY_KEYS.to_vec(),
            };
            if !missing.is_empty() {
                return Err(schema_err(
                    SchemaLevel::Day,
                    format!("month entry {mi}, day entry {di} missing {}", missing.join(", ")),
                ));
            }
        }
    }

    log::debug!("payload passed schema validation ({} months)", months.len());
    Ok(true)
}
