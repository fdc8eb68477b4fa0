// tests/capture_stitch.rs
use eframe::egui::{self, UserData};
use image::{Rgba, RgbaImage};
use radio_dash::export::{
    export_region, CancelToken, CaptureRegion, ExportJob, ExportOutcome, PageSize, PdfWriter, Rasterizer,
};
use radio_dash::gui::capture::{stitch_strips, CaptureSession, ScreenshotRasterizer};

const WIDTH: u32 = 4;

/// A screenshot strip of a `viewport` points tall window scrolled to
/// `offset`. Each pixel row encodes the content row it shows (R/G) and the
/// strip it came from (B).
fn strip(offset: f32, viewport: f32, ppp: f32, index: u8) -> (f32, RgbaImage) {
    let first = (offset * ppp).round() as u32;
    let rows = (viewport * ppp).round() as u32;
    let img = RgbaImage::from_fn(WIDTH, rows, |_, y| {
        let row = first + y;
        Rgba([(row / 256) as u8, (row % 256) as u8, index, 255])
    });
    (offset, img)
}

fn content_row(px: &Rgba<u8>) -> u32 {
    px.0[0] as u32 * 256 + px.0[1] as u32
}

/// Every canvas row shows exactly the matching content row: no gap, no repeat.
fn assert_rows_in_order(img: &RgbaImage) {
    for y in 0..img.height() {
        assert_eq!(content_row(img.get_pixel(0, y)), y, "row {y} out of place");
    }
}

#[test]
fn short_content_is_one_cropped_strip() {
    let img = stitch_strips(vec![strip(0.0, 400.0, 1.0, 0)], 300.0, 1.0);
    assert_eq!(img.dimensions(), (WIDTH, 300));
    assert_rows_in_order(&img);
}

#[test]
fn clamped_last_strip_adds_no_duplicate_band() {
    // 1000pt of content through a 400pt viewport; the third scroll (800)
    // clamps to 600, overlapping the second strip by 200pt
    let strips = vec![
        strip(0.0, 400.0, 1.0, 0),
        strip(400.0, 400.0, 1.0, 1),
        strip(600.0, 400.0, 1.0, 2),
    ];
    let img = stitch_strips(strips, 1000.0, 1.0);

    assert_eq!(img.height(), 1000);
    assert_rows_in_order(&img);
    assert_eq!(img.get_pixel(0, 799).0[2], 1);
    for y in 800..1000 {
        assert_eq!(img.get_pixel(0, y).0[2], 2, "row {y} not from the last strip");
    }
}

#[test]
fn fractional_pixels_per_point() {
    let ppp = 1.25;
    let strips = vec![
        strip(0.0, 400.0, ppp, 0),
        strip(400.0, 400.0, ppp, 1),
        strip(600.0, 400.0, ppp, 2),
    ];
    let img = stitch_strips(strips, 1000.0, ppp);

    assert_eq!(img.height(), 1250);
    assert_rows_in_order(&img);
}

#[test]
fn no_strips_gives_a_blank_page_tall_canvas() {
    let img = stitch_strips(Vec::new(), 10.0, 2.0);
    assert_eq!(img.dimensions(), (1, 20));
}

#[test]
fn screenshot_for_another_region_is_skipped() {
    let (_, img) = strip(0.0, 50.0, 2.0, 0);
    let mut raster = ScreenshotRasterizer::new(CaptureRegion::new("matches"), img.clone());
    assert!(raster.rasterize(&CaptureRegion::new("podcast"), 2.0).unwrap().is_none());

    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("podcast.pdf");
    let job = ExportJob::new(CaptureRegion::new("podcast"), PageSize::A4, &out);
    let mut raster = ScreenshotRasterizer::new(CaptureRegion::new("matches"), img);
    let outcome = export_region(&job, &mut raster, &PdfWriter, &CancelToken::new()).unwrap();
    assert_eq!(outcome, ExportOutcome::Skipped);
    assert!(!out.exists());
}

#[test]
fn screenshot_bitmap_is_not_rescaled() {
    let (_, img) = strip(0.0, 50.0, 2.0, 0);
    let mut raster = ScreenshotRasterizer::new(CaptureRegion::new("matches"), img.clone());
    let got = raster.rasterize(&CaptureRegion::new("matches"), 2.0).unwrap().unwrap();
    assert_eq!(got, img);
    // handed over once
    assert!(raster.rasterize(&CaptureRegion::new("matches"), 2.0).unwrap().is_none());
}

#[test]
fn sessions_only_take_their_own_screenshots() {
    let first = CaptureSession::new(0, CaptureRegion::new("matches"), "m".into(), 2.0);
    let second = CaptureSession::new(0, CaptureRegion::new("matches"), "m".into(), 2.0);
    assert_ne!(first.id(), second.id());

    assert!(second.accepts(&UserData::new(second.id())));
    assert!(!second.accepts(&UserData::new(first.id())));
    assert!(!second.accepts(&UserData::default()));
    assert!(!second.accepts(&UserData::new("not an id")));
}

#[test]
fn session_zooms_ui_to_oversample_and_restores_it() {
    let ctx = egui::Context::default();
    assert_eq!(ctx.zoom_factor(), 1.0);

    let mut session = CaptureSession::new(0, CaptureRegion::new("matches"), "m".into(), 2.0);
    session.start(&ctx);
    assert_eq!(ctx.zoom_factor(), 2.0);

    session.restore(&ctx);
    assert_eq!(ctx.zoom_factor(), 1.0);
}

#[test]
fn session_never_zooms_below_native_resolution() {
    let ctx = egui::Context::default();
    let mut session = CaptureSession::new(0, CaptureRegion::new("matches"), "m".into(), 0.5);
    session.start(&ctx);
    assert_eq!(ctx.zoom_factor(), 1.0);
    session.restore(&ctx);
    assert_eq!(ctx.zoom_factor(), 1.0);
}
