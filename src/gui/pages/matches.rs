// src/gui/pages/matches.rs
use eframe::egui;

use crate::gui::app::App;
use crate::ingest::ResultSet::{self, *};
use crate::metrics;

use super::Page;

pub struct MatchesPage;
pub static PAGE: MatchesPage = MatchesPage;

impl Page for MatchesPage {
    fn title(&self) -> &'static str { "Matches" }
    fn sets(&self) -> &'static [ResultSet] { &[AllMatches, Top5Games, FutureMatches] }
    fn export_stem(&self) -> &'static str { "matches" }

    fn draw_intro(&self, ui: &mut egui::Ui, app: &App) {
        let records = app.cache.records(AllMatches);
        if records.is_empty() {
            return;
        }
        let total: f64 = records.iter().filter_map(|r| r.number("listeners")).sum();
        let value: f64 = records
            .iter()
            .map(|r| metrics::derive(r, metrics::MetricId::MediaValue))
            .sum();
        ui.label(format!(
            "{} matches · {} listeners · media value {}",
            records.len(),
            metrics::format_number(total),
            metrics::format_eur(value),
        ));
        ui.add_space(8.0);
    }
}
