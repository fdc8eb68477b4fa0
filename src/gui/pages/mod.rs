// src/gui/pages/mod.rs
use eframe::egui;

use crate::gui::{app::App, components::data_table};
use crate::ingest::ResultSet;

pub mod breakdowns;
pub mod commentators;
pub mod matches;
pub mod podcast;

/// A dashboard tab: a fixed group of result sets shown as stacked tables.
pub trait Page: Send + Sync + 'static {
    fn title(&self) -> &'static str;

    /// Result sets shown on this page, top to bottom.
    fn sets(&self) -> &'static [ResultSet];

    /// Default export file stem (before the date suffix).
    fn export_stem(&self) -> &'static str;

    /// Capture region name; one per page.
    fn region(&self) -> &'static str {
        self.export_stem()
    }

    /// Optional: text above the tables.
    fn draw_intro(&self, _ui: &mut egui::Ui, _app: &App) {}

    /// Draw the page body. Runs inside the page's vertical scroll area.
    fn draw(&self, ui: &mut egui::Ui, app: &mut App) {
        self.draw_intro(ui, app);
        for &set in self.sets() {
            data_table::draw(ui, app, set);
            ui.add_space(18.0);
        }
    }
}
