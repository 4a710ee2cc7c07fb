// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Lossless raster export with embedded pixel density.

use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

use image::RgbImage;
use printmat_core::Resolution;
use printmat_core::error::{PrintmatError, Result};
use tracing::{debug, instrument};

const METRES_PER_INCH: f64 = 0.0254;

/// Write `img` as PNG with a pHYs chunk recording `dpi` on both axes, so
/// viewers and printers can recover the true physical size from the pixel
/// dimensions.
///
/// PNG stores density as pixels per metre; 300 dpi becomes 11811 ppm.
#[instrument(skip(img), fields(path = %path.display(), dpi = %dpi, width = img.width(), height = img.height()))]
pub fn save_png_with_dpi(img: &RgbImage, path: &Path, dpi: Resolution) -> Result<()> {
    let pixels_per_metre = (dpi.get() as f64 / METRES_PER_INCH).round() as u32;

    let file = File::create(path)?;
    let mut encoder = png::Encoder::new(BufWriter::new(file), img.width(), img.height());
    encoder.set_color(png::ColorType::Rgb);
    encoder.set_depth(png::BitDepth::Eight);
    encoder.set_pixel_dims(Some(png::PixelDimensions {
        xppu: pixels_per_metre,
        yppu: pixels_per_metre,
        unit: png::Unit::Meter,
    }));

    let mut writer = encoder.write_header().map_err(encoding_error)?;
    writer.write_image_data(img.as_raw()).map_err(encoding_error)?;
    writer.finish().map_err(encoding_error)?;

    debug!(pixels_per_metre, "PNG written");
    Ok(())
}

fn encoding_error(err: png::EncodingError) -> PrintmatError {
    match err {
        png::EncodingError::IoError(io) => PrintmatError::Io(io),
        other => PrintmatError::Io(std::io::Error::other(other)),
    }
}
