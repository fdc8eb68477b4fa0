// src/sort/compare.rs
//! Comparator registry: column → typed comparison.
//!
//! Absent values never fail a comparison; they read as the kind's lowest
//! sentinel ("" for text and dates, 0 for numbers).

use std::borrow::Cow;
use std::cmp::Ordering;

use crate::metrics::{self, MetricId};
use crate::record::Record;
use super::column::{ColumnDef, ColumnKind};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Comparator {
    Text(&'static str),
    Numeric(&'static str),
    Date(&'static str),
    Derived(MetricId),
}

impl Comparator {
    pub fn for_column(col: &ColumnDef) -> Self {
        match col.kind {
            ColumnKind::Text | ColumnKind::Category => Comparator::Text(col.key),
            ColumnKind::Numeric => Comparator::Numeric(col.key),
            ColumnKind::Date => Comparator::Date(col.key),
            ColumnKind::Derived(m) => Comparator::Derived(m),
        }
    }

    pub fn compare(&self, a: &Record, b: &Record) -> Ordering {
        match *self {
            Comparator::Text(key) => cmp_caseless(&text_of(a, key), &text_of(b, key)),
            Comparator::Numeric(key) => {
                cmp_f64(a.number(key).unwrap_or(0.0), b.number(key).unwrap_or(0.0))
            }
            // YYYY-MM-DD sorts chronologically as a plain string
            Comparator::Date(key) => {
                text_of(a, key).cmp(&text_of(b, key))
            }
            Comparator::Derived(metric) => {
                cmp_f64(metrics::derive(a, metric), metrics::derive(b, metric))
            }
        }
    }
}

fn text_of<'r>(r: &'r Record, key: &str) -> Cow<'r, str> {
    r.text_ref(key).unwrap_or(Cow::Borrowed(""))
}

/// Lowercased comparison without building lowercased copies.
pub fn cmp_caseless(a: &str, b: &str) -> Ordering {
    a.chars()
        .flat_map(char::to_lowercase)
        .cmp(b.chars().flat_map(char::to_lowercase))
}

fn cmp_f64(a: f64, b: f64) -> Ordering {
    a.partial_cmp(&b).unwrap_or(Ordering::Equal)
}

/// `compare(a, b, column)` as -1 / 0 / 1.
pub fn compare(a: &Record, b: &Record, column: &ColumnDef) -> i8 {
    match column.comparator().compare(a, b) {
        Ordering::Less => -1,
        Ordering::Equal => 0,
        Ordering::Greater => 1,
    }
}
