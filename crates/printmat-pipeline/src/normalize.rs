// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Source normalization — decode, apply EXIF orientation, flatten alpha over
// opaque black, and convert to 3-channel RGB.

use std::io::{BufRead, Cursor, Seek};
use std::path::Path;

use image::{DynamicImage, ImageDecoder, ImageReader, Rgb, RgbImage};
use printmat_core::error::{PrintmatError, Result};
use tracing::{debug, info, instrument};

/// Load and normalize a source image from a file path.
///
/// The result is always upright (EXIF orientation applied), exactly three
/// channels, and alpha-free: transparent and semi-transparent regions are
/// composited onto an opaque black background before the alpha channel is
/// dropped.
#[instrument(skip_all, fields(path = %path.as_ref().display()))]
pub fn load_source(path: impl AsRef<Path>) -> Result<RgbImage> {
    let reader = ImageReader::open(path.as_ref())?.with_guessed_format()?;
    let upright = decode_upright(reader)?;
    info!(
        width = upright.width(),
        height = upright.height(),
        color = ?upright.color(),
        "Source image loaded"
    );
    Ok(flatten_to_rgb(upright))
}

/// Normalize a source image from raw encoded bytes (JPEG, PNG, etc.).
#[instrument(skip(data), fields(data_len = data.len()))]
pub fn decode_source(data: &[u8]) -> Result<RgbImage> {
    let reader = ImageReader::new(Cursor::new(data)).with_guessed_format()?;
    let upright = decode_upright(reader)?;
    debug!(
        width = upright.width(),
        height = upright.height(),
        "Source image decoded from bytes"
    );
    Ok(flatten_to_rgb(upright))
}

/// Decode and rotate/flip the image upright per its stored orientation.
fn decode_upright<R: BufRead + Seek>(reader: ImageReader<R>) -> Result<DynamicImage> {
    let mut decoder = reader
        .into_decoder()
        .map_err(|err| PrintmatError::SourceDecode(err.to_string()))?;
    let orientation = decoder
        .orientation()
        .map_err(|err| PrintmatError::SourceDecode(err.to_string()))?;
    let mut image = DynamicImage::from_decoder(decoder)
        .map_err(|err| PrintmatError::SourceDecode(err.to_string()))?;
    image.apply_orientation(orientation);
    Ok(image)
}

/// Convert to 3-channel RGB, compositing any alpha over opaque black.
///
/// Black is the fixed flattening background regardless of the job's padding
/// color: `out = channel * alpha / 255` per channel.
fn flatten_to_rgb(image: DynamicImage) -> RgbImage {
    if !image.color().has_alpha() {
        return image.into_rgb8();
    }

    let rgba = image.into_rgba8();
    let mut flattened = RgbImage::new(rgba.width(), rgba.height());
    for (dst, src) in flattened.pixels_mut().zip(rgba.pixels()) {
        let [r, g, b, a] = src.0;
        let a = a as u16;
        *dst = Rgb([
            ((r as u16 * a) / 255) as u8,
            ((g as u16 * a) / 255) as u8,
            ((b as u16 * a) / 255) as u8,
        ]);
    }
    flattened
}
