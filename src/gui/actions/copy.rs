// src/gui/actions/copy.rs
use eframe::egui;

use crate::{csv, gui::app::App, ingest::ResultSet, specs};

/// Put `set`'s table on the clipboard as TSV, in the current sort order.
pub fn copy(app: &mut App, ui_ctx: &egui::Context, set: ResultSet) {
    let row_ix = app.row_ix(set);
    if row_ix.is_empty() {
        app.status("Nothing to copy");
        logd!("Copy: Clicked, but there's nothing to copy");
        return;
    }

    let schema = specs::schema_for(set);
    let txt = csv::table_to_string(app.cache.records(set), &row_ix, schema, csv::Delimiter::Tsv.sep());
    logf!("Copy: set={} rows={} sort={}", set.file(), row_ix.len(), app.sort_state(set).key);

    ui_ctx.copy_text(txt);
    app.status(format!("Copied {} ({} rows)", set.title(), row_ix.len()));
}
