// src/record.rs
//! Records: one row of a precomputed analytics result set.
//!
//! A record is an open mapping from column name to a loosely typed value, as
//! it arrives in the JSON files. The column definition decides how a value is
//! read (text, number, date); the record itself never interprets it.

use std::borrow::Cow;
use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Value {
    Null,
    Bool(bool),
    Int(i64),
    Decimal(f64),
    Text(String),
    /// Nested arrays/objects; shown but never meaningful as a sort key.
    Other(serde_json::Value),
}

impl Value {
    /// Numeric reading. Text holding a plain number counts; everything else is absent.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Int(i) => Some(*i as f64),
            Value::Decimal(d) if d.is_finite() => Some(*d),
            Value::Text(t) => t.trim().parse::<f64>().ok().filter(|d| d.is_finite()),
            _ => None,
        }
    }

    /// Textual reading; `None` for null and empty strings. Text values are
    /// borrowed, everything else is rendered.
    pub fn as_str(&self) -> Option<Cow<'_, str>> {
        match self {
            Value::Null => None,
            Value::Text(t) if t.is_empty() => None,
            Value::Text(t) => Some(Cow::Borrowed(t.as_str())),
            Value::Bool(b) => Some(Cow::Owned(b.to_string())),
            Value::Int(i) => Some(Cow::Owned(i.to_string())),
            Value::Decimal(d) => Some(Cow::Owned(d.to_string())),
            Value::Other(v) => Some(Cow::Owned(v.to_string())),
        }
    }

    pub fn as_text(&self) -> Option<String> {
        self.as_str().map(Cow::into_owned)
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self { Value::Text(s!(s)) }
}

impl From<String> for Value {
    fn from(s: String) -> Self { Value::Text(s) }
}

impl From<i64> for Value {
    fn from(i: i64) -> Self { Value::Int(i) }
}

impl From<f64> for Value {
    fn from(d: f64) -> Self { Value::Decimal(d) }
}

/// One row. Records in a collection share a column set.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Record(BTreeMap<String, Value>);

impl Record {
    pub fn new() -> Self { Self::default() }

    /// Builder used by tests and fixtures.
    pub fn with(mut self, key: &str, value: impl Into<Value>) -> Self {
        self.0.insert(s!(key), value.into());
        self
    }

    pub fn insert(&mut self, key: &str, value: impl Into<Value>) {
        self.0.insert(s!(key), value.into());
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key).filter(|v| !v.is_null())
    }

    /// Number under `key`, or `None` when absent/null/non-numeric.
    pub fn number(&self, key: &str) -> Option<f64> {
        self.get(key).and_then(Value::as_f64)
    }

    /// Text under `key`, or `None` when absent/null/empty.
    pub fn text(&self, key: &str) -> Option<String> {
        self.get(key).and_then(Value::as_text)
    }

    /// Like [`Record::text`] without copying text values.
    pub fn text_ref(&self, key: &str) -> Option<Cow<'_, str>> {
        self.get(key).and_then(Value::as_str)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize { self.0.len() }
    pub fn is_empty(&self) -> bool { self.0.is_empty() }
}

impl FromIterator<(String, Value)> for Record {
    fn from_iter<I: IntoIterator<Item = (String, Value)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}
