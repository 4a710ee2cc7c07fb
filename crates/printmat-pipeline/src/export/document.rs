// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Document export — a single-page A4 PDF with the fitted image placed at its
// true physical size, using `printpdf` 0.8.
//
// printpdf 0.8 uses a data-oriented API: the document is built from a
// `PdfPage` holding a `Vec<Op>` operation list, then serialised via
// `PdfDocument::save()`.

use std::fs;
use std::path::{Path, PathBuf};

use image::RgbImage;
use image::codecs::jpeg::JpegEncoder;
use printmat_core::error::{PrintmatError, Result};
use printmat_core::{A4_HEIGHT_CM, A4_WIDTH_CM, PhysicalSize, Resolution};
use printpdf::{
    Mm, Op, PdfDocument, PdfPage, PdfSaveOptions, PdfWarnMsg, Pt, RawImage, RawImageData,
    RawImageFormat, XObjectTransform,
};
use tracing::{debug, info, instrument};

/// Quality factor for the placed-image intermediate. High enough for print;
/// the encoder writes full-resolution chroma (no subsampling).
const JPEG_QUALITY: u8 = 95;

const POINTS_PER_CM: f32 = 72.0 / 2.54;

/// Export `fitted` as a one-page A4 PDF at `out_path`.
///
/// The image is rendered at its *physical* size — `size` in centimetres, not
/// the pixel count — and centred on the sheet. It travels through a
/// print-quality JPEG intermediate held in a `NamedTempFile`; the guard
/// removes the file on every exit path, so a failed export never leaks it.
///
/// Every failure in this path is reported as `DocumentExport`, which the
/// pipeline treats as non-fatal.
#[instrument(skip(fitted), fields(out = %out_path.display(), dpi = %dpi))]
pub fn export_pdf(
    fitted: &RgbImage,
    size: &PhysicalSize,
    dpi: Resolution,
    title: &str,
    out_path: &Path,
) -> Result<PathBuf> {
    let tmp_dir = match out_path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    let mut placed = tempfile::Builder::new()
        .prefix("placed_")
        .suffix(".jpg")
        .tempfile_in(tmp_dir)
        .map_err(|err| PrintmatError::DocumentExport(format!("temp file: {err}")))?;

    let encoder = JpegEncoder::new_with_quality(placed.as_file_mut(), JPEG_QUALITY);
    fitted
        .write_with_encoder(encoder)
        .map_err(|err| PrintmatError::DocumentExport(format!("JPEG encoding failed: {err}")))?;
    let jpeg_bytes = fs::read(placed.path())
        .map_err(|err| PrintmatError::DocumentExport(format!("temp file read: {err}")))?;
    debug!(jpeg_bytes = jpeg_bytes.len(), "Placed-image intermediate encoded");

    let pdf_bytes = build_a4_page(&jpeg_bytes, size, dpi, title)?;
    fs::write(out_path, &pdf_bytes)
        .map_err(|err| PrintmatError::DocumentExport(format!("PDF write failed: {err}")))?;

    info!(pdf_bytes = pdf_bytes.len(), "Document written");
    Ok(out_path.to_path_buf())
}

/// Build the single-page PDF in memory.
fn build_a4_page(
    jpeg_bytes: &[u8],
    size: &PhysicalSize,
    dpi: Resolution,
    title: &str,
) -> Result<Vec<u8>> {
    let decoded = image::load_from_memory(jpeg_bytes)
        .map_err(|err| PrintmatError::DocumentExport(format!("intermediate decode: {err}")))?;
    let rgb = decoded.to_rgb8();
    let (img_w, img_h) = rgb.dimensions();
    let raw = RawImage {
        pixels: RawImageData::U8(rgb.into_raw()),
        width: img_w as usize,
        height: img_h as usize,
        data_format: RawImageFormat::RGB8,
        tag: Vec::new(),
    };

    let mut doc = PdfDocument::new(title);
    let xobject_id = doc.add_image(&raw);

    let page_w = Mm((A4_WIDTH_CM * 10.0) as f32);
    let page_h = Mm((A4_HEIGHT_CM * 10.0) as f32);

    // Rendered extent comes from the physical size; the pixel count only
    // determines the image's native extent at `dpi`, which the scale factor
    // cancels out.
    let target_w_pt = size.width_cm() as f32 * POINTS_PER_CM;
    let target_h_pt = size.height_cm() as f32 * POINTS_PER_CM;
    let dpi_f = dpi.get() as f32;
    let native_w_pt = img_w as f32 / dpi_f * 72.0;
    let native_h_pt = img_h as f32 / dpi_f * 72.0;

    // Centre on the sheet. Float arithmetic here — PDF placement carries no
    // integer rounding bias.
    let x_offset = (page_w.into_pt().0 - target_w_pt) / 2.0;
    let y_offset = (page_h.into_pt().0 - target_h_pt) / 2.0;

    let ops = vec![Op::UseXobject {
        id: xobject_id,
        transform: XObjectTransform {
            translate_x: Some(Pt(x_offset)),
            translate_y: Some(Pt(y_offset)),
            scale_x: Some(target_w_pt / native_w_pt),
            scale_y: Some(target_h_pt / native_h_pt),
            dpi: Some(dpi_f),
            rotate: None,
        },
    }];

    doc.with_pages(vec![PdfPage::new(page_w, page_h, ops)]);

    let mut warnings: Vec<PdfWarnMsg> = Vec::new();
    Ok(doc.save(&PdfSaveOptions::default(), &mut warnings))
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgb;

    fn dpi(value: u32) -> Resolution {
        Resolution::new(value).unwrap()
    }

    #[test]
    fn exports_a_pdf_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.pdf");
        let fitted = RgbImage::from_pixel(236, 118, Rgb([255, 0, 0]));
        let size = PhysicalSize::new(20.0, 10.0).unwrap();

        let written = export_pdf(&fitted, &size, dpi(30), "test", &path).unwrap();
        assert_eq!(written, path);

        let bytes = fs::read(&path).unwrap();
        assert!(bytes.starts_with(b"%PDF"), "output must be a PDF");
    }

    #[test]
    fn export_failure_is_reported_not_propagated_as_io() {
        let dir = tempfile::tempdir().unwrap();
        // Writing into a directory that does not exist fails at the final
        // write; the error must be the non-fatal document variant.
        let path = dir.path().join("missing").join("out.pdf");
        let fitted = RgbImage::from_pixel(10, 10, Rgb([0, 0, 0]));
        let size = PhysicalSize::new(5.0, 5.0).unwrap();

        let result = export_pdf(&fitted, &size, dpi(30), "test", &path);
        assert!(matches!(result, Err(PrintmatError::DocumentExport(_))));
    }

    #[test]
    fn temp_intermediate_is_removed_after_export() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("clean.pdf");
        let fitted = RgbImage::from_pixel(30, 30, Rgb([10, 20, 30]));
        let size = PhysicalSize::new(3.0, 3.0).unwrap();

        export_pdf(&fitted, &size, dpi(30), "test", &path).unwrap();

        let leftovers: Vec<_> = fs::read_dir(dir.path())
            .unwrap()
            .map(|entry| entry.unwrap().file_name())
            .filter(|name| name.to_string_lossy().ends_with(".jpg"))
            .collect();
        assert!(leftovers.is_empty(), "temp JPEG must not outlive the export");
    }
}
