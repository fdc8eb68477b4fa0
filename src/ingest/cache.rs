// src/ingest/cache.rs
//! Owned application data: the last good batch plus the last failure.

use std::collections::HashMap;
use std::sync::Arc;

use chrono::{DateTime, Local};

use super::sets::ResultSet;
use crate::error::IngestError;
use crate::record::Record;

/// One complete, validated batch. Never modified after construction.
#[derive(Debug)]
pub struct Snapshot {
    sets: HashMap<ResultSet, Vec<Record>>,
    pub loaded_at: DateTime<Local>,
}

impl Snapshot {
    pub fn new(sets: HashMap<ResultSet, Vec<Record>>) -> Self {
        Self { sets, loaded_at: Local::now() }
    }

    pub fn records(&self, set: ResultSet) -> &[Record] {
        self.sets.get(&set).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn row_count(&self, set: ResultSet) -> usize {
        self.records(set).len()
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LoadOutcome {
    Loaded,
    /// Nothing to show yet.
    FirstLoadFailed,
    /// Previous snapshot kept; error surfaced separately.
    RefreshFailed,
}

#[derive(Debug, Default)]
pub struct DataCache {
    snapshot: Option<Arc<Snapshot>>,
    last_error: Option<String>,
    generation: u64,
}

impl DataCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the snapshot wholesale on success; keep it untouched on failure.
    pub fn apply(&mut self, result: Result<Snapshot, IngestError>) -> LoadOutcome {
        match result {
            Ok(snap) => {
                self.snapshot = Some(Arc::new(snap));
                self.last_error = None;
                self.generation += 1;
                LoadOutcome::Loaded
            }
            Err(e) => {
                self.last_error = Some(e.to_string());
                if self.snapshot.is_some() {
                    logf!("Data: Refresh failed, keeping previous data: {e}");
                    LoadOutcome::RefreshFailed
                } else {
                    loge!("Data: First load failed: {e}");
                    LoadOutcome::FirstLoadFailed
                }
            }
        }
    }

    pub fn snapshot(&self) -> Option<Arc<Snapshot>> {
        self.snapshot.clone()
    }

    pub fn records(&self, set: ResultSet) -> &[Record] {
        self.snapshot.as_deref().map(|s| s.records(set)).unwrap_or(&[])
    }

    pub fn is_loaded(&self) -> bool {
        self.snapshot.is_some()
    }

    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    /// Bumped on every successful apply; views key their sort caches on it.
    pub fn generation(&self) -> u64 {
        self.generation
    }
}
