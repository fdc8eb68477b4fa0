// src/ingest/source.rs
//! Where the result sets come from, and the all-or-nothing batch load.

use std::collections::HashMap;
use std::fs;
use std::path::PathBuf;
use std::sync::mpsc;
use std::thread;
use std::time::Duration;

use chrono::Utc;

use super::cache::Snapshot;
use super::sets::{self, ResultSet};
use crate::config::consts::{FETCH_TIMEOUT_SECS, USER_AGENT};
use crate::config::options::{DataOptions, DataSource};
use crate::error::IngestError;
use crate::progress::Progress;
use crate::record::Record;

/// Raw bytes of one named file. Shared across the batch's worker threads.
pub trait Source: Sync {
    fn describe(&self) -> String;
    fn fetch(&self, set: ResultSet) -> Result<Vec<u8>, IngestError>;
}

pub struct DirSource {
    dir: PathBuf,
}

impl DirSource {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }
}

impl Source for DirSource {
    fn describe(&self) -> String {
        self.dir.display().to_string()
    }

    fn fetch(&self, set: ResultSet) -> Result<Vec<u8>, IngestError> {
        let path = self.dir.join(set.file());
        fs::read(&path).map_err(|source| IngestError::Read { name: set.file(), path, source })
    }
}

pub struct HttpSource {
    base: String,
    client: reqwest::blocking::Client,
}

impl HttpSource {
    pub fn new(base: &str) -> Result<Self, IngestError> {
        let client = reqwest::blocking::Client::builder()
            .timeout(Duration::from_secs(FETCH_TIMEOUT_SECS))
            .user_agent(USER_AGENT)
            .build()
            .map_err(|e| IngestError::Fetch { name: "http client", message: e.to_string() })?;
        Ok(Self { base: s!(base.trim_end_matches('/')), client })
    }

    /// `<base>/<file>?t=<unix millis>` so intermediaries never serve a stale copy.
    pub fn url_for(&self, set: ResultSet) -> String {
        format!("{}/{}?t={}", self.base, set.file(), Utc::now().timestamp_millis())
    }
}

impl Source for HttpSource {
    fn describe(&self) -> String {
        self.base.clone()
    }

    fn fetch(&self, set: ResultSet) -> Result<Vec<u8>, IngestError> {
        let name = set.file();
        let resp = self
            .client
            .get(self.url_for(set))
            .header(reqwest::header::CACHE_CONTROL, "no-store")
            .send()
            .map_err(|e| IngestError::Fetch { name, message: e.to_string() })?;

        let status = resp.status();
        if !status.is_success() {
            return Err(IngestError::Status { name, status: status.as_u16() });
        }
        resp.bytes()
            .map(|b| b.to_vec())
            .map_err(|e| IngestError::Fetch { name, message: e.to_string() })
    }
}

pub fn source_for(opts: &DataOptions) -> Result<Box<dyn Source>, IngestError> {
    Ok(match &opts.source {
        DataSource::Dir(dir) => Box::new(DirSource::new(dir.clone())),
        DataSource::Url(url) => Box::new(HttpSource::new(url)?),
    })
}

/// Fetch and validate every set concurrently, one scoped thread per set.
///
/// All or nothing: the first failure (in set order) is returned and no
/// partial snapshot is built.
pub fn load_all(
    source: &dyn Source,
    mut progress: Option<&mut dyn Progress>,
) -> Result<Snapshot, IngestError> {
    if let Some(p) = progress.as_deref_mut() {
        p.begin(ResultSet::ALL.len());
        p.log(&format!("Loading data from {}", source.describe()));
    }
    logd!("Ingest: Loading {} sets from {}", ResultSet::ALL.len(), source.describe());

    let (tx, rx) = mpsc::channel::<(ResultSet, Result<Vec<Record>, IngestError>)>();

    let mut loaded: HashMap<ResultSet, Vec<Record>> = HashMap::new();
    let mut failures: Vec<(ResultSet, IngestError)> = Vec::new();

    thread::scope(|scope| {
        let workers: Vec<_> = ResultSet::ALL
            .into_iter()
            .map(|set| {
                let tx = tx.clone();
                scope.spawn(move || {
                    let result = source.fetch(set).and_then(|bytes| sets::parse(set, &bytes));
                    let _ = tx.send((set, result));
                })
            })
            .collect();
        drop(tx); // receiver ends when every worker is done

        for (set, result) in rx {
            match result {
                Ok(records) => {
                    logd!("Ingest: {} rows={}", set.file(), records.len());
                    loaded.insert(set, records);
                }
                Err(e) => {
                    loge!("Ingest: {e}");
                    failures.push((set, e));
                }
            }
            if let Some(p) = progress.as_deref_mut() {
                p.item_done(set.file());
            }
        }

        // Joined here so a panicking worker does not take the caller down
        for w in workers {
            let _ = w.join();
        }
    });

    if let Some(p) = progress.as_deref_mut() {
        p.finish();
    }

    failures.sort_by_key(|(set, _)| *set);
    if let Some((_, first)) = failures.into_iter().next() {
        return Err(first);
    }

    // A worker that panicked never sent; its set counts as failed
    if let Some(missing) = ResultSet::ALL.into_iter().find(|s| !loaded.contains_key(s)) {
        return Err(IngestError::Fetch { name: missing.file(), message: s!("worker stopped unexpectedly") });
    }

    logf!("Ingest: OK sets={}", loaded.len());
    Ok(Snapshot::new(loaded))
}
