// src/sort/engine.rs
//! The one sort entry point and the header-click state machine.

use crate::record::Record;
use super::column::{Direction, TableSchema};

/// Current sort of one table. Exactly one per table instance.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct SortState {
    pub key: String,
    pub direction: Direction,
}

impl SortState {
    pub fn new(key: &str, direction: Direction) -> Self {
        Self { key: s!(key), direction }
    }

    pub fn asc(key: &str) -> Self {
        Self::new(key, Direction::Ascending)
    }

    pub fn desc(key: &str) -> Self {
        Self::new(key, Direction::Descending)
    }

    /// Header indicator for `column_key` under this state.
    pub fn indicator(&self, column_key: &str) -> SortIndicator {
        if self.key != column_key {
            return SortIndicator::Unsorted;
        }
        match self.direction {
            Direction::Ascending => SortIndicator::Ascending,
            Direction::Descending => SortIndicator::Descending,
        }
    }
}

/// Three distinct visual states per sortable header.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SortIndicator {
    Unsorted,
    Ascending,
    Descending,
}

impl SortIndicator {
    pub fn glyph(self) -> &'static str {
        match self {
            SortIndicator::Unsorted => "⇅",
            SortIndicator::Ascending => "▲",
            SortIndicator::Descending => "▼",
        }
    }

    /// Hover/accessibility text.
    pub fn describe(self) -> &'static str {
        match self {
            SortIndicator::Unsorted => "not sorted",
            SortIndicator::Ascending => "sorted ascending",
            SortIndicator::Descending => "sorted descending",
        }
    }
}

impl TableSchema {
    /// Header click: same key flips the direction, a new key opens in its
    /// column default. Clicks on unsortable columns leave the state alone.
    pub fn next_state(&self, current: &SortState, clicked: &str) -> SortState {
        if self.column(clicked).is_some_and(|c| !c.sortable) {
            return current.clone();
        }
        if current.key == clicked {
            SortState::new(clicked, current.direction.flip())
        } else {
            SortState::new(clicked, self.default_direction_for(clicked))
        }
    }
}

/// Stable order of `records` under `state`, as indices into `records`.
/// Ties keep their input order in both directions. A key the schema does
/// not know leaves the input order untouched.
pub fn sort_indices(records: &[Record], schema: &TableSchema, state: &SortState) -> Vec<usize> {
    let mut ix: Vec<usize> = (0..records.len()).collect();
    let Some(column) = schema.column(&state.key) else {
        return ix;
    };
    let cmp = column.comparator();

    ix.sort_by(|&a, &b| {
        let ord = cmp.compare(&records[a], &records[b]);
        match state.direction {
            Direction::Ascending => ord,
            Direction::Descending => ord.reverse(),
        }
    });
    ix
}

/// Sorted copy; the input collection is not modified.
pub fn sort(records: &[Record], schema: &TableSchema, state: &SortState) -> Vec<Record> {
    sort_indices(records, schema, state)
        .into_iter()
        .map(|i| records[i].clone())
        .collect()
}

/// Zero-copy view over a record slice in sorted order.
pub struct SortedView<'a> {
    records: &'a [Record],
    pub row_ix: Vec<usize>,
}

impl<'a> SortedView<'a> {
    pub fn new(records: &'a [Record], schema: &TableSchema, state: &SortState) -> Self {
        Self { records, row_ix: sort_indices(records, schema, state) }
    }

    pub fn len(&self) -> usize { self.row_ix.len() }
    pub fn is_empty(&self) -> bool { self.row_ix.is_empty() }

    pub fn iter(&self) -> impl Iterator<Item = &'a Record> + '_ {
        self.row_ix.iter().map(move |&i| &self.records[i])
    }

    pub fn get(&self, pos: usize) -> Option<&'a Record> {
        self.row_ix.get(pos).map(|&i| &self.records[i])
    }
}
