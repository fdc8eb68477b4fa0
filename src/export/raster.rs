// src/export/raster.rs
//! Turning a capture region into pixels.

use std::path::PathBuf;

use image::imageops::{self, FilterType};
use image::RgbaImage;

use crate::error::ExportError;

/// Name of an on-screen panel (GUI) or an image path (CLI).
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct CaptureRegion(pub String);

impl CaptureRegion {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn name(&self) -> &str {
        &self.0
    }
}

pub trait Rasterizer {
    /// Full-extent bitmap of `region` at no less than `oversample` pixels per
    /// logical pixel. `Ok(None)` when the region no longer exists.
    fn rasterize(&mut self, region: &CaptureRegion, oversample: f32) -> Result<Option<RgbaImage>, ExportError>;
}

/// Upscale `img` captured at `source_scale` until it reaches `oversample`.
pub fn oversample_to(img: RgbaImage, source_scale: f32, oversample: f32) -> RgbaImage {
    let factor = oversample / source_scale.max(f32::EPSILON);
    if factor <= 1.0 {
        return img;
    }
    let w = (img.width() as f32 * factor).round() as u32;
    let h = (img.height() as f32 * factor).round() as u32;
    imageops::resize(&img, w.max(1), h.max(1), FilterType::CatmullRom)
}

/// Reads the region from an image file on disk. Region names are paths
/// relative to `base` (or absolute).
pub struct ImageFileRasterizer {
    base: PathBuf,
    /// Pixels per logical pixel the file was rendered at.
    pub source_scale: f32,
}

impl ImageFileRasterizer {
    pub fn new(base: impl Into<PathBuf>) -> Self {
        Self { base: base.into(), source_scale: 1.0 }
    }
}

impl Rasterizer for ImageFileRasterizer {
    fn rasterize(&mut self, region: &CaptureRegion, oversample: f32) -> Result<Option<RgbaImage>, ExportError> {
        let path = self.base.join(region.name());
        if !path.is_file() {
            logd!("Export: Region {} not found", path.display());
            return Ok(None);
        }
        let img = image::open(&path)
            .map_err(|e| ExportError::Raster(format!("{}: {e}", path.display())))?
            .to_rgba8();
        Ok(Some(oversample_to(img, self.source_scale, oversample)))
    }
}
