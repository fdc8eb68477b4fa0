// src/gui/pages/breakdowns.rs
use eframe::egui;

use crate::gui::app::App;
use crate::ingest::ResultSet::{self, *};

use super::Page;

pub struct BreakdownsPage;
pub static PAGE: BreakdownsPage = BreakdownsPage;

impl Page for BreakdownsPage {
    fn title(&self) -> &'static str { "Breakdowns" }

    fn sets(&self) -> &'static [ResultSet] {
        &[ByResult, ByHomeAway, ByTvCategory, KickoffBlocks, Weekday]
    }

    fn export_stem(&self) -> &'static str { "breakdowns" }

    fn draw_intro(&self, ui: &mut egui::Ui, _app: &App) {
        ui.weak("Listeners per match, grouped by one attribute.");
        ui.add_space(6.0);
    }
}
