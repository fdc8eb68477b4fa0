// src/export/paginate.rs
//! Page placement: one tall image sliced across fixed-size pages.
//!
//! The same full-width image is placed on every page, shifted up by the
//! height already shown, so each page reveals the next slice.

/// Portrait page size in millimetres.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PageSize {
    pub width_mm: f32,
    pub height_mm: f32,
}

impl PageSize {
    pub const A4: PageSize = PageSize { width_mm: 210.0, height_mm: 297.0 };
    pub const LETTER: PageSize = PageSize { width_mm: 215.9, height_mm: 279.4 };
}

/// Float slivers below this never start a new page.
pub const SLIVER_MM: f32 = 0.01;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Placement {
    pub page_index: usize,
    /// Image top relative to page top; 0 on the first page, negative after.
    pub offset_mm: f32,
}

impl Placement {
    /// Image rows (in mm from the image top) this page shows.
    pub fn visible(&self, page: PageSize) -> (f32, f32) {
        let top = -self.offset_mm;
        (top, top + page.height_mm)
    }
}

/// Image height once scaled to exactly fill the page width.
pub fn scaled_height_mm(px_width: u32, px_height: u32, page: PageSize) -> f32 {
    if px_width == 0 {
        return 0.0;
    }
    px_height as f32 * page.width_mm / px_width as f32
}

/// Pages needed for an image `image_height_mm` tall. Always at least one.
/// Computed in one division so long documents do not accumulate rounding.
pub fn page_count(image_height_mm: f32, page: PageSize) -> usize {
    let pages = (f64::from(image_height_mm) - f64::from(SLIVER_MM)) / f64::from(page.height_mm);
    if pages.is_finite() { pages.ceil().max(1.0) as usize } else { 1 }
}

/// Placements for an image `image_height_mm` tall. Page `i` shows the image
/// shifted up by `i` page heights.
pub fn paginate(image_height_mm: f32, page: PageSize) -> Vec<Placement> {
    (0..page_count(image_height_mm, page))
        .map(|i| Placement { page_index: i, offset_mm: -(i as f32) * page.height_mm })
        .collect()
}
