// src/specs/mod.rs
//! # Table specs
//!
//! One column-definition table per result set. A table definition says which
//! fields a view shows, how each one sorts, which direction a header opens
//! in, and the order the view starts in.
//!
//! ## What lives here
//! - `TableSchema` constants, grouped by page (`matches`, `commentators`,
//!   `breakdowns`, `podcast`).
//! - Cell text: [`format_cell`] turns a record field into what the table and
//!   the TSV copy show.
//!
//! ## What does **not** live here
//! - Comparison rules (`sort::compare`) and the derived-metric formula
//!   (`metrics`). Specs only point at them.
//! - Loading and validating the JSON (`ingest`).
//!
//! Every view goes through the same `sort::sort` entry point with the schema
//! from [`schema_for`]; no page keeps its own comparator.
pub mod breakdowns;
pub mod commentators;
pub mod matches;
pub mod podcast;

use crate::ingest::ResultSet;
use crate::metrics;
use crate::record::Record;
use crate::sort::{ColumnDef, ColumnKind, TableSchema};

pub const NA: &str = "N/A";

pub fn schema_for(set: ResultSet) -> &'static TableSchema {
    match set {
        ResultSet::AllMatches => &matches::ALL_MATCHES,
        ResultSet::FutureMatches => &matches::FUTURE_MATCHES,
        ResultSet::Top5Games => &matches::TOP5_GAMES,
        ResultSet::Commentators => &commentators::COMMENTATORS,
        ResultSet::CommentatorDuos => &commentators::DUOS,
        ResultSet::ByResult => &breakdowns::BY_RESULT,
        ResultSet::ByHomeAway => &breakdowns::BY_HOME_AWAY,
        ResultSet::ByTvCategory => &breakdowns::BY_TV_CATEGORY,
        ResultSet::KickoffBlocks => &breakdowns::KICKOFF_BLOCKS,
        ResultSet::Weekday => &breakdowns::WEEKDAY,
        ResultSet::PodcastEpisodes => &podcast::EPISODES,
        ResultSet::PodcastMonthly => &podcast::MONTHLY,
        ResultSet::PodcastApps => &podcast::APPS,
    }
}

/// Display text for one cell. Absent values read `N/A`.
pub fn format_cell(record: &Record, column: &ColumnDef) -> String {
    let shown = match column.kind {
        ColumnKind::Text | ColumnKind::Category => record.text(column.key),
        ColumnKind::Numeric => record.number(column.key).map(metrics::format_number),
        ColumnKind::Date => record.text(column.key).map(|d| metrics::format_date(&d)),
        ColumnKind::Derived(metric) => metrics::display(record, metric),
    };
    shown.unwrap_or_else(|| s!(NA))
}

/// One formatted row, column order as in `schema`.
pub fn format_row(record: &Record, schema: &TableSchema) -> Vec<String> {
    schema.columns.iter().map(|c| format_cell(record, c)).collect()
}
