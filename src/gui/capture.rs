// src/gui/capture.rs
//
// Full-extent capture of a page's scroll area.
//
// egui can only screenshot what is on screen, so a capture walks the page:
// scroll to an offset, screenshot the next frame, crop to the scroll
// viewport, advance by one viewport height, repeat until the content bottom
// is covered. The strips are then stitched into one bitmap.
//
// While a session runs the UI is zoomed to at least the export oversampling
// factor, so the screenshots carry real detail instead of upscaled pixels.

use std::sync::atomic::{AtomicU64, Ordering};

use eframe::egui::{self, ColorImage, Rect};
use image::{imageops, Rgba, RgbaImage};

use crate::error::ExportError;
use crate::export::{CancelToken, CaptureRegion, Rasterizer};

static NEXT_SESSION: AtomicU64 = AtomicU64::new(1);

/// What the page's scroll area reported this frame (points).
#[derive(Clone, Copy, Debug)]
pub struct ScrollFrame {
    pub viewport: Rect,
    pub content_height: f32,
    pub offset: f32,
}

#[derive(Clone, Copy, Debug, PartialEq)]
enum Step {
    /// Scroll to this offset, then request a screenshot.
    Scroll(f32),
    /// Screenshot requested with the area at this offset.
    Awaiting(f32),
    Done,
}

pub struct CaptureSession {
    id: u64,
    pub page_index: usize,
    pub region: CaptureRegion,
    pub stem: String,
    pub cancel: CancelToken,
    oversample: f32,
    /// Zoom factor to put back when the session ends.
    zoom_before: Option<f32>,
    target_ppp: f32,
    step: Step,
    frame: Option<ScrollFrame>,
    strips: Vec<(f32, RgbaImage)>,
    ppp: f32,
}

impl CaptureSession {
    pub fn new(page_index: usize, region: CaptureRegion, stem: String, oversample: f32) -> Self {
        Self {
            id: NEXT_SESSION.fetch_add(1, Ordering::Relaxed),
            page_index,
            region,
            stem,
            cancel: CancelToken::new(),
            oversample,
            zoom_before: None,
            target_ppp: oversample,
            step: Step::Scroll(0.0),
            frame: None,
            strips: Vec::new(),
            ppp: 1.0,
        }
    }

    pub fn id(&self) -> u64 {
        self.id
    }

    /// Screenshots this session asked for carry its id; anything else is
    /// a leftover from an abandoned session.
    pub fn accepts(&self, user_data: &egui::UserData) -> bool {
        user_data
            .data
            .as_ref()
            .and_then(|d| d.downcast_ref::<u64>())
            .is_some_and(|&id| id == self.id)
    }

    /// Zoom the UI up to the oversampling factor. Undone by [`Self::restore`].
    pub fn start(&mut self, ctx: &egui::Context) {
        let native = ctx.pixels_per_point();
        self.target_ppp = native.max(self.oversample);
        self.zoom_before = Some(ctx.zoom_factor());
        if self.target_ppp > native {
            ctx.set_pixels_per_point(self.target_ppp);
        }
        logd!("Capture: Start {} ppp {:.2} → {:.2}", self.region.name(), native, self.target_ppp);
        ctx.request_repaint();
    }

    pub fn restore(&self, ctx: &egui::Context) {
        if let Some(zoom) = self.zoom_before {
            ctx.set_zoom_factor(zoom);
        }
    }

    /// Offset the page's scroll area must show while this session drives it.
    pub fn wanted_offset(&self) -> Option<f32> {
        match self.step {
            Step::Scroll(o) | Step::Awaiting(o) => Some(o),
            Step::Done => None,
        }
    }

    /// Called after the page drew its scroll area this frame.
    pub fn after_draw(&mut self, ctx: &egui::Context, frame: ScrollFrame) {
        self.frame = Some(frame);
        self.ppp = ctx.pixels_per_point();

        // the zoom lands a frame or two after `start`
        let zoomed = self.ppp + 0.01 >= self.target_ppp;
        if let (Step::Scroll(_), true) = (self.step, zoomed) {
            // clamped offsets are recorded as actually shown
            self.step = Step::Awaiting(frame.offset);
            ctx.send_viewport_cmd(egui::ViewportCommand::Screenshot(egui::UserData::new(self.id)));
        }
        ctx.request_repaint();
    }

    /// Feed one screenshot. Returns the stitched bitmap once the content
    /// bottom has been captured.
    pub fn on_screenshot(&mut self, shot: &ColorImage) -> Option<RgbaImage> {
        let (Step::Awaiting(offset), Some(frame)) = (self.step, self.frame) else {
            return None;
        };

        let strip = to_rgba(&shot.region(&frame.viewport, Some(self.ppp)));
        self.strips.push((offset, strip));

        let bottom = offset + frame.viewport.height();
        let stalled = frame.viewport.height() < 1.0;
        if stalled || bottom + 0.5 >= frame.content_height {
            self.step = Step::Done;
            logd!("Capture: {} strips={} content_h={:.0}", self.region.name(), self.strips.len(), frame.content_height);
            Some(stitch_strips(std::mem::take(&mut self.strips), frame.content_height, self.ppp))
        } else {
            self.step = Step::Scroll(bottom);
            None
        }
    }
}

/// Stitch viewport strips, each tagged with the scroll offset (points) it
/// was taken at, into one bitmap `content_height` points tall.
///
/// Strips overlap when the last scroll clamps at the content bottom; rows
/// already filled are skipped so no band appears twice. The result is cut
/// at the last filled row.
pub fn stitch_strips(strips: Vec<(f32, RgbaImage)>, content_height: f32, ppp: f32) -> RgbaImage {
    let width = strips.iter().map(|(_, s)| s.width()).max().unwrap_or(0);
    let total = ((content_height * ppp).round() as u32).max(1);
    let mut canvas = RgbaImage::from_pixel(width.max(1), total, Rgba([255, 255, 255, 255]));

    let mut filled = 0u32;
    for (offset, strip) in strips {
        let y0 = (offset * ppp).round() as u32;
        let skip = filled.saturating_sub(y0).min(strip.height());
        let h = strip.height() - skip;
        if h == 0 {
            continue;
        }
        let piece = imageops::crop_imm(&strip, 0, skip, strip.width(), h).to_image();
        imageops::replace(&mut canvas, &piece, 0, (y0 + skip) as i64);
        filled = filled.max(y0 + skip + h);
    }

    if filled > 0 && filled < canvas.height() {
        canvas = imageops::crop_imm(&canvas, 0, 0, canvas.width(), filled).to_image();
    }
    canvas
}

fn to_rgba(img: &ColorImage) -> RgbaImage {
    let [w, h] = img.size;
    let mut out = RgbaImage::new(w as u32, h as u32);
    for (dst, px) in out.pixels_mut().zip(img.pixels.iter()) {
        dst.0 = px.to_srgba_unmultiplied();
    }
    out
}

/// Hands a finished stitched capture to the export pipeline. The capture was
/// taken at the oversampled zoom, so the bitmap is passed on unscaled.
pub struct ScreenshotRasterizer {
    region: CaptureRegion,
    image: Option<RgbaImage>,
}

impl ScreenshotRasterizer {
    pub fn new(region: CaptureRegion, image: RgbaImage) -> Self {
        Self { region, image: Some(image) }
    }
}

impl Rasterizer for ScreenshotRasterizer {
    fn rasterize(&mut self, region: &CaptureRegion, _oversample: f32) -> Result<Option<RgbaImage>, ExportError> {
        if *region != self.region {
            return Ok(None);
        }
        Ok(self.image.take())
    }
}
