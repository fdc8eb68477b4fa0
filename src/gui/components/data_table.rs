// src/gui/components/data_table.rs
//
// One result set as a sortable table. Header clicks go through the schema's
// `next_state`; the body reads rows through the app's cached sort order.

use eframe::egui::{self, Align, Color32, CursorIcon, Layout, RichText, Sense, TextWrapMode};
use egui_extras::{Column, TableBuilder};

use crate::gui::{actions, app::App};
use crate::ingest::ResultSet;
use crate::record::Record;
use crate::sort::{ColumnDef, ColumnKind, SortIndicator};
use crate::specs;

const ROW_H: f32 = 20.0;
const HEADER_H: f32 = 24.0;

fn result_color(text: &str) -> Option<Color32> {
    match text.trim().to_ascii_uppercase().as_str() {
        "W" | "WIN" => Some(Color32::from_rgb(0x2E, 0x7D, 0x32)),
        "L" | "LOSS" => Some(Color32::from_rgb(0xC6, 0x28, 0x28)),
        "D" | "DRAW" => Some(Color32::from_rgb(0x9E, 0x9E, 0x9E)),
        _ => None,
    }
}

fn cell(ui: &mut egui::Ui, record: &Record, col: &ColumnDef) {
    let text = specs::format_cell(record, col);
    let mut rt = RichText::new(&text);
    if col.kind == ColumnKind::Category && col.key == "result" {
        if let Some(c) = result_color(&text) {
            rt = rt.color(c).strong();
        }
    }
    if col.is_numeric() {
        ui.with_layout(Layout::right_to_left(Align::Center), |ui| { ui.label(rt); });
    } else {
        ui.label(rt);
    }
}

pub fn draw(ui: &mut egui::Ui, app: &mut App, set: ResultSet) {
    let schema = specs::schema_for(set);
    let snapshot = app.cache.snapshot();
    let records: &[Record] = snapshot.as_deref().map(|s| s.records(set)).unwrap_or(&[]);
    let row_ix = app.row_ix(set);
    let state = app.sort_state(set);

    let mut copy_clicked = false;
    ui.horizontal(|ui| {
        ui.heading(set.title());
        ui.weak(format!("{} rows", records.len()));
        if !records.is_empty()
            && ui.small_button("Copy").on_hover_text("Copy table as TSV").clicked()
        {
            copy_clicked = true;
        }
    });

    if records.is_empty() {
        ui.weak("No data available");
        return;
    }

    let mut clicked: Option<&'static str> = None;

    let mut table = TableBuilder::new(ui)
        .id_salt(("table", set))
        .striped(true)
        .vscroll(false)
        .cell_layout(Layout::left_to_right(Align::Center));
    for col in schema.columns {
        table = table.column(Column::initial(col.width).resizable(true).clip(true).at_least(30.0));
    }

    table
        .header(HEADER_H, |mut header| {
            for col in schema.columns {
                header.col(|ui| {
                    ui.style_mut().wrap_mode = Some(TextWrapMode::Extend);
                    if !col.sortable {
                        ui.add(egui::Label::new(RichText::new(col.label).strong()).selectable(false));
                        return;
                    }

                    let ind = state.indicator(col.key);
                    let mut rt = RichText::new(format!("{} {}", col.label, ind.glyph())).strong();
                    if ind == SortIndicator::Unsorted {
                        rt = rt.weak();
                    }
                    let resp = ui
                        .add(egui::Label::new(rt).sense(Sense::click()).selectable(false))
                        .on_hover_cursor(CursorIcon::PointingHand)
                        .on_hover_text(ind.describe());
                    if resp.clicked() {
                        clicked = Some(col.key);
                    }
                });
            }
        })
        .body(|body| {
            body.rows(ROW_H, row_ix.len(), |mut row| {
                let Some(record) = row_ix.get(row.index()).and_then(|&i| records.get(i)) else {
                    return;
                };
                for col in schema.columns {
                    row.col(|ui| {
                        ui.style_mut().wrap_mode = Some(TextWrapMode::Extend);
                        cell(ui, record, col);
                    });
                }
            });
        });

    if let Some(key) = clicked {
        app.click_header(set, key);
    }
    if copy_clicked {
        let ctx = ui.ctx().clone();
        actions::copy(app, &ctx, set);
    }
}
