// src/sort/column.rs
//! Column definitions: what a sortable field is and how it compares.

use crate::metrics::MetricId;
use super::compare::Comparator;
use super::engine::SortState;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    Ascending,
    Descending,
}

impl Direction {
    pub fn flip(self) -> Self {
        match self {
            Direction::Ascending => Direction::Descending,
            Direction::Descending => Direction::Ascending,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Direction::Ascending => "asc",
            Direction::Descending => "desc",
        }
    }
}

/// How a column's values are read and compared.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ColumnKind {
    /// Case-insensitive text; absent sorts as "".
    Text,
    /// Enumerated label (W/D/L, Paid/Open). Compared like text.
    Category,
    /// Integer or decimal; absent sorts as 0.
    Numeric,
    /// ISO `YYYY-MM-DD` (or `YYYY-MM`, RFC 3339). Compared as literal strings.
    Date,
    /// Not stored on the record; computed per comparison.
    Derived(MetricId),
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ColumnDef {
    pub key: &'static str,
    pub label: &'static str,
    pub kind: ColumnKind,
    /// Direction applied when this column becomes the sort key.
    pub default_direction: Direction,
    pub sortable: bool,
    /// Preferred on-screen width (px-ish)
    pub width: f32,
}

impl ColumnDef {
    const fn new(key: &'static str, label: &'static str, kind: ColumnKind) -> Self {
        Self {
            key,
            label,
            kind,
            default_direction: Direction::Ascending,
            sortable: true,
            width: 90.0,
        }
    }

    pub const fn text(key: &'static str, label: &'static str) -> Self {
        Self::new(key, label, ColumnKind::Text)
    }

    pub const fn category(key: &'static str, label: &'static str) -> Self {
        Self::new(key, label, ColumnKind::Category)
    }

    pub const fn numeric(key: &'static str, label: &'static str) -> Self {
        Self::new(key, label, ColumnKind::Numeric)
    }

    pub const fn date(key: &'static str, label: &'static str) -> Self {
        Self::new(key, label, ColumnKind::Date)
    }

    pub const fn derived(key: &'static str, label: &'static str, metric: MetricId) -> Self {
        Self::new(key, label, ColumnKind::Derived(metric))
    }

    /// Recency/magnitude columns open descending.
    pub const fn desc(mut self) -> Self {
        self.default_direction = Direction::Descending;
        self
    }

    pub const fn unsortable(mut self) -> Self {
        self.sortable = false;
        self
    }

    pub const fn width(mut self, w: f32) -> Self {
        self.width = w;
        self
    }

    pub fn is_numeric(&self) -> bool {
        matches!(self.kind, ColumnKind::Numeric | ColumnKind::Derived(_))
    }

    pub fn comparator(&self) -> Comparator {
        Comparator::for_column(self)
    }
}

/// The column table for one kind of result set, plus the order it opens in.
#[derive(Debug)]
pub struct TableSchema {
    pub columns: &'static [ColumnDef],
    pub initial_key: &'static str,
    pub initial_direction: Direction,
}

impl TableSchema {
    pub fn column(&self, key: &str) -> Option<&ColumnDef> {
        self.columns.iter().find(|c| c.key == key)
    }

    pub fn initial_state(&self) -> SortState {
        SortState::new(self.initial_key, self.initial_direction)
    }

    /// Column-specific default; unknown keys open ascending.
    pub fn default_direction_for(&self, key: &str) -> Direction {
        self.column(key)
            .map(|c| c.default_direction)
            .unwrap_or(Direction::Ascending)
    }

    pub fn headers(&self) -> Vec<String> {
        self.columns.iter().map(|c| s!(c.label)).collect()
    }
}
