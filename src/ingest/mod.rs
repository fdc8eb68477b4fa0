// src/ingest/mod.rs
//! Data ingestion: the named result sets, their sources, the owned cache,
//! and the upstream refresh trigger.
pub mod cache;
pub mod refresh;
pub mod sets;
pub mod source;

pub use cache::{DataCache, LoadOutcome, Snapshot};
pub use sets::{ResultSet, Shape};
pub use source::{load_all, source_for, DirSource, HttpSource, Source};
