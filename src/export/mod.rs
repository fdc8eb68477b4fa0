// src/export/mod.rs
//! Capture-and-paginate export.
//!
//! `export_region` rasterizes a region, scales it to the page width, slices
//! it across as many pages as it needs, composes the whole document in
//! memory and only then writes it, atomically. A failed or cancelled job
//! leaves nothing at the destination.
pub mod paginate;
pub mod pdf;
pub mod raster;

use std::path::PathBuf;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

pub use paginate::{page_count, paginate, scaled_height_mm, PageSize, Placement};
pub use pdf::{DocumentWriter, PdfWriter};
pub use raster::{CaptureRegion, ImageFileRasterizer, Rasterizer};

use crate::config::consts::EXPORT_OVERSAMPLE;
use crate::config::options::ExportOptions;
use crate::error::ExportError;
use crate::file;

/// One export invocation. Consumed by `export_region`; nothing persists.
#[derive(Clone, Debug)]
pub struct ExportJob {
    pub region: CaptureRegion,
    pub page: PageSize,
    pub path: PathBuf,
    pub oversample: f32,
}

impl ExportJob {
    pub fn new(region: CaptureRegion, page: PageSize, path: impl Into<PathBuf>) -> Self {
        Self { region, page, path: path.into(), oversample: EXPORT_OVERSAMPLE }
    }

    /// Job for `region` written to `<out_dir>/<stem>.pdf` with the configured paper.
    pub fn from_options(opts: &ExportOptions, region: CaptureRegion, stem: &str) -> Self {
        Self {
            region,
            page: opts.paper.page_size(),
            path: opts.out_path(&file::sanitize_file_stem(stem)),
            oversample: opts.oversample.max(EXPORT_OVERSAMPLE),
        }
    }
}

/// Set when the hosting view goes away; checked up to the final rename.
#[derive(Clone, Debug, Default)]
pub struct CancelToken(Arc<AtomicBool>);

impl CancelToken {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.0.store(true, Ordering::SeqCst);
    }

    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::SeqCst)
    }

    fn check(&self) -> Result<(), ExportError> {
        if self.is_cancelled() { Err(ExportError::Cancelled) } else { Ok(()) }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum ExportOutcome {
    Written { path: PathBuf, pages: usize },
    /// Region was gone at call time; nothing done.
    Skipped,
}

pub fn export_region(
    job: &ExportJob,
    rasterizer: &mut dyn Rasterizer,
    writer: &dyn DocumentWriter,
    cancel: &CancelToken,
) -> Result<ExportOutcome, ExportError> {
    cancel.check()?;

    let Some(image) = rasterizer.rasterize(&job.region, job.oversample)? else {
        logf!("Export: Skipped, region {} not present", job.region.name());
        return Ok(ExportOutcome::Skipped);
    };
    if image.width() == 0 || image.height() == 0 {
        return Err(ExportError::EmptyRegion(s!(job.region.name())));
    }
    cancel.check()?;

    let height_mm = scaled_height_mm(image.width(), image.height(), job.page);
    let placements = paginate(height_mm, job.page);
    logd!(
        "Export: Bitmap {}x{} scaled_h={:.1}mm pages={}",
        image.width(),
        image.height(),
        height_mm,
        placements.len()
    );

    let bytes = writer.render(&image, job.page, &placements)?;
    drop(image);

    let written = file::write_atomic_if(&job.path, &bytes, || !cancel.is_cancelled())
        .map_err(|source| ExportError::Write { path: job.path.clone(), source })?;
    if !written {
        logf!("Export: Cancelled before write path={}", job.path.display());
        return Err(ExportError::Cancelled);
    }

    logf!("Export: OK pages={} path={}", placements.len(), job.path.display());
    Ok(ExportOutcome::Written { path: job.path.clone(), pages: placements.len() })
}
