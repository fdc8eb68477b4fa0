// src/gui/components/action_bar.rs

use eframe::egui;

use crate::config::options::Paper;
use crate::file;
use crate::gui::{actions, app::App};

pub fn draw(ui: &mut egui::Ui, app: &mut App, ctx: &egui::Context) {
    let page = app.current_page();
    let idle = app.capture.is_none();

    ui.horizontal(|ui| {
        // --- Export ---
        let hint = file::default_export_stem(page.export_stem());
        ui.label("File:");
        ui.add(
            egui::TextEdit::singleline(&mut app.state.gui.export_stem)
                .hint_text(hint)
                .desired_width(200.0),
        );

        let paper = &mut app.state.options.export.paper;
        let before = *paper;
        ui.selectable_value(paper, Paper::A4, "A4");
        ui.selectable_value(paper, Paper::Letter, "Letter");
        if *paper != before {
            logf!("UI: Paper → {:?}", paper);
        }

        let can_export = idle && app.cache.is_loaded();
        if ui.add_enabled(can_export, egui::Button::new("Export PDF")).clicked() {
            actions::begin_export(app, ctx);
        }
        if !idle && ui.button("Cancel").clicked() {
            app.abandon_capture(ctx, "cancelled by user");
        }

        ui.separator();

        // --- Data ---
        let busy = app.loading > 0;
        if ui.add_enabled(!busy, egui::Button::new("Reload")).clicked() {
            actions::spawn_load(app, ctx, None);
        }
        if ui
            .add_enabled(!busy, egui::Button::new("Refresh data"))
            .on_hover_text("Ask the data pipeline to rebuild, then reload")
            .clicked()
        {
            actions::refresh(app, ctx);
        }
    });
}
