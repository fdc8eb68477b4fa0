// src/gui/pages/podcast.rs
use eframe::egui;

use crate::gui::app::App;
use crate::ingest::ResultSet::{self, *};
use crate::metrics;

use super::Page;

pub struct PodcastPage;
pub static PAGE: PodcastPage = PodcastPage;

impl Page for PodcastPage {
    fn title(&self) -> &'static str { "Podcast" }
    fn sets(&self) -> &'static [ResultSet] { &[PodcastEpisodes, PodcastMonthly, PodcastApps] }
    fn export_stem(&self) -> &'static str { "podcast" }

    fn draw_intro(&self, ui: &mut egui::Ui, app: &App) {
        let episodes = app.cache.records(PodcastEpisodes);
        if episodes.is_empty() {
            return;
        }
        let downloads: f64 = episodes.iter().filter_map(|r| r.number("total_downloads")).sum();
        ui.label(format!(
            "{} episodes · {} downloads",
            episodes.len(),
            metrics::format_number(downloads)
        ));
        ui.add_space(8.0);
    }
}
