// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Pipeline orchestration — normalize → fit → (compose) → export.

use std::path::Path;

use printmat_core::error::Result;
use printmat_core::{Job, OutputSet, PhysicalSize};
use tracing::{info, instrument, warn};

use crate::export::{export_pdf, save_png_with_dpi};
use crate::fit::fit_into_box;
use crate::normalize::load_source;
use crate::page::center_on_page;
use crate::units::pixel_box;

/// Run one job and write its artifacts into `out_dir`.
///
/// The pipeline is synchronous and single-threaded: each stage consumes the
/// previous stage's owned output, and nothing survives past the returned
/// `OutputSet`. Fatal errors abort the job; a document-export failure only
/// degrades the output set (the raster artifacts already produced are still
/// returned).
#[instrument(skip(job), fields(source = %job.source.display(), mode = job.mode.wire_name(), dpi = %job.dpi))]
pub fn process(job: &Job, out_dir: &Path) -> Result<OutputSet> {
    // Parameter validation happened when the Job's typed fields were
    // constructed; the pixel box derivation below can still reject sizes
    // beyond the addressable range before any file is touched.
    let target_box = pixel_box(&job.target, job.dpi)?;

    let source = load_source(&job.source)?;
    let fitted = fit_into_box(&source, target_box, job.padding);

    std::fs::create_dir_all(out_dir)?;
    let base = job
        .source
        .file_stem()
        .and_then(|stem| stem.to_str())
        .unwrap_or("image");
    let label = job.target.label();

    let mut outputs = OutputSet::default();

    if job.mode.wants_target_raster() {
        let path = out_dir.join(format!("{base}_{label}cm.png"));
        save_png_with_dpi(&fitted, &path, job.dpi)?;
        info!(path = %path.display(), "Target raster written");
        outputs.target_raster = Some(path);
    }

    if job.mode.wants_page_raster() {
        let page_box = pixel_box(&PhysicalSize::a4(), job.dpi)?;
        let composed = center_on_page(&fitted, page_box);
        let path = out_dir.join(format!("{base}_page_with_{label}.png"));
        save_png_with_dpi(&composed, &path, job.dpi)?;
        info!(path = %path.display(), "Page raster written");
        outputs.page_raster = Some(path);
    }

    if job.mode.wants_document() {
        let path = out_dir.join(format!("{base}_page_with_{label}.pdf"));
        match export_pdf(&fitted, &job.target, job.dpi, base, &path) {
            Ok(written) => outputs.document = Some(written),
            // Non-fatal: report the artifact absent and keep what was made.
            Err(err) => warn!(%err, "Document not produced"),
        }
    }

    info!(artifacts = outputs.len(), "Job complete");
    Ok(outputs)
}
