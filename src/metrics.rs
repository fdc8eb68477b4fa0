// src/metrics.rs
//! Derived metrics and display formatting.
//!
//! A derived metric is a value computed from a record's raw fields rather
//! than stored on it. [`derive`] is the only place it is computed: the table
//! cell text and the sort key both call it, so the shown value and the value
//! sorted by cannot drift apart.

use chrono::{DateTime, Datelike, NaiveDate};

use crate::config::consts::{MEDIA_UNIT_RATE, MEDIA_UNIT_SIZE};
use crate::record::Record;

/// Metrics that exist only as computations over a record.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum MetricId {
    /// Media-equivalent value (EUR) of a match's live listener count.
    MediaValue,
}

impl MetricId {
    /// Raw field the metric is computed from.
    pub fn source_field(self) -> &'static str {
        match self {
            MetricId::MediaValue => "listeners",
        }
    }
}

/// Compute `metric` for `record`. Pure; recomputed on every call.
/// An absent or non-numeric source field yields 0.
pub fn derive(record: &Record, metric: MetricId) -> f64 {
    match metric {
        MetricId::MediaValue => {
            let raw = record.number(metric.source_field()).unwrap_or(0.0);
            (raw / MEDIA_UNIT_SIZE) * MEDIA_UNIT_RATE
        }
    }
}

/// Display text for a derived cell. `None` when the source field is absent,
/// so the table can show `N/A` instead of a fabricated zero.
pub fn display(record: &Record, metric: MetricId) -> Option<String> {
    record.number(metric.source_field())?;
    let value = derive(record, metric);
    Some(match metric {
        MetricId::MediaValue => format_eur(value),
    })
}

/* ---------------- Number formatting ---------------- */

fn group_digits(int_part: u64, sep: char) -> String {
    let digits = int_part.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(sep);
        }
        out.push(ch);
    }
    out
}

/// en-US grouping: `12345` → `12,345`, `1234.5` → `1,234.5`.
/// At most two fraction digits, trailing zeros dropped.
pub fn format_number(value: f64) -> String {
    if !value.is_finite() {
        return s!("N/A");
    }
    let neg = value < 0.0;
    let cents = (value.abs() * 100.0).round() as u64;
    let (int_part, frac) = (cents / 100, cents % 100);

    let mut out = if neg && cents > 0 { s!("-") } else { s!() };
    out.push_str(&group_digits(int_part, ','));
    if frac > 0 {
        let frac = format!("{frac:02}");
        out.push('.');
        out.push_str(frac.trim_end_matches('0'));
    }
    out
}

/// nl-NL currency without decimals: `1250.0` → `€ 1.250`.
pub fn format_eur(value: f64) -> String {
    if !value.is_finite() {
        return s!("N/A");
    }
    let whole = value.abs().round() as u64;
    let sign = if value < 0.0 && whole > 0 { "-" } else { "" };
    format!("€ {sign}{}", group_digits(whole, '.'))
}

/* ---------------- Date formatting ---------------- */

const NL_MONTHS: [&str; 12] = [
    "jan.", "feb.", "mrt.", "apr.", "mei", "jun.", "jul.", "aug.", "sep.", "okt.", "nov.", "dec.",
];

/// Short Dutch date: `2025-01-05` → `5 jan. 2025`. RFC 3339 timestamps use
/// their calendar date. Anything unparsable is returned verbatim.
pub fn format_date(raw: &str) -> String {
    let date = NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d")
        .ok()
        .or_else(|| DateTime::parse_from_rfc3339(raw.trim()).ok().map(|dt| dt.date_naive()));

    match date {
        Some(d) => {
            let month = NL_MONTHS[d.month0() as usize];
            format!("{} {} {}", d.day(), month, d.year())
        }
        None => s!(raw),
    }
}
