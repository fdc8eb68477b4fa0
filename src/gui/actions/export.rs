// src/gui/actions/export.rs
use eframe::egui;
use image::RgbaImage;

use crate::{
    export::{self, CaptureRegion, ExportJob, ExportOutcome, PdfWriter},
    error::ExportError,
    file,
    gui::{app::App, capture::{CaptureSession, ScreenshotRasterizer}},
};

/// Start walking the current page for a capture. The export itself runs in
/// `finish_export` once the last strip is in.
pub fn begin_export(app: &mut App, ctx: &egui::Context) {
    if app.capture.is_some() {
        logd!("Export: Clicked while a capture is running");
        return;
    }
    let page = app.current_page();
    let typed = app.state.gui.export_stem.trim();
    let stem = if typed.is_empty() { file::default_export_stem(page.export_stem()) } else { s!(typed) };

    logf!("Export: Begin page={} stem={}", page.title(), stem);
    let oversample = app.state.options.export.oversample;
    let mut session = CaptureSession::new(app.current_index(), CaptureRegion::new(page.region()), stem, oversample);
    session.start(ctx);
    app.capture = Some(session);
    app.status("Capturing page…");
}

pub fn finish_export(app: &mut App, session: CaptureSession, bitmap: RgbaImage) {
    let job = ExportJob::from_options(&app.state.options.export, session.region.clone(), &session.stem);
    let mut rasterizer = ScreenshotRasterizer::new(session.region.clone(), bitmap);

    let msg = match export::export_region(&job, &mut rasterizer, &PdfWriter, &session.cancel) {
        Ok(ExportOutcome::Written { path, pages }) => {
            format!("Exported {} page(s) → {}", pages, path.display())
        }
        Ok(ExportOutcome::Skipped) => s!("Nothing to export"),
        Err(ExportError::Cancelled) => s!("Export cancelled"),
        Err(e) => {
            loge!("Export: Error: {e}");
            format!("Export error: {e}")
        }
    };
    app.status(msg);
}
